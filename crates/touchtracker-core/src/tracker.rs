//! Stroke tracking and line selection.

use crate::config::TrackerConfig;
use crate::error::{ConfigResult, TrackerError};
use crate::hit_test::line_at_point;
use crate::host::{NullHost, SurfaceHost};
use crate::line::Line;
use crate::touch::{CancelScope, TouchEvent, TouchId, TouchPhase};
use kurbo::{Point, Vec2};
use std::collections::HashMap;

/// What triggered a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// Single tap: a hit shows the context menu.
    Tap,
    /// Long press: a hit discards in-progress strokes so the press does not
    /// also draw.
    LongPress,
}

/// Borrowed view of everything a renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    /// Finished lines in completion order.
    pub finished: &'a [Line],
    /// Strokes still in progress.
    pub active: &'a HashMap<TouchId, Line>,
    /// Index into `finished` of the selected line.
    pub selection: Option<usize>,
}

impl<'a> SceneView<'a> {
    /// In-progress strokes, ordered by touch id.
    pub fn active_lines(&self) -> Vec<&'a Line> {
        let mut entries: Vec<(&TouchId, &'a Line)> = self.active.iter().collect();
        entries.sort_by_key(|(id, _)| **id);
        entries.into_iter().map(|(_, line)| line).collect()
    }

    /// Whether the finished line at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection == Some(index)
    }
}

/// Tracks in-progress strokes per touch, finished lines, and the selection.
///
/// Every operation runs synchronously on the caller's thread and asks the
/// host for a redraw once it has applied its change.
#[derive(Debug)]
pub struct StrokeTracker<H: SurfaceHost = NullHost> {
    /// Strokes keyed by the touch drawing them.
    active: HashMap<TouchId, Line>,
    /// Finished lines, in the order their touches ended.
    finished: Vec<Line>,
    /// Selected index into `finished`. Always valid when set.
    selection: Option<usize>,
    /// Whether the host currently shows the context menu.
    menu_visible: bool,
    config: TrackerConfig,
    host: H,
}

impl Default for StrokeTracker<NullHost> {
    fn default() -> Self {
        Self::new(NullHost)
    }
}

impl<H: SurfaceHost> StrokeTracker<H> {
    /// Create an empty tracker with the default config.
    pub fn new(host: H) -> Self {
        Self::build(host, TrackerConfig::default())
    }

    /// Create an empty tracker, rejecting configs that fail
    /// [`TrackerConfig::validate`].
    pub fn with_config(host: H, config: TrackerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(host, config))
    }

    fn build(host: H, config: TrackerConfig) -> Self {
        Self {
            active: HashMap::new(),
            finished: Vec::new(),
            selection: None,
            menu_visible: false,
            config,
            host,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Finished lines in completion order.
    pub fn finished_lines(&self) -> &[Line] {
        &self.finished
    }

    /// Strokes still in progress.
    pub fn active_strokes(&self) -> &HashMap<TouchId, Line> {
        &self.active
    }

    /// In-progress stroke for a touch.
    pub fn active_stroke(&self, id: TouchId) -> Option<&Line> {
        self.active.get(&id)
    }

    /// Whether any touch is currently drawing.
    pub fn is_drawing(&self) -> bool {
        !self.active.is_empty()
    }

    /// Index of the selected line.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selected line.
    pub fn selected_line(&self) -> Option<&Line> {
        self.selection.and_then(|index| self.finished.get(index))
    }

    /// Borrowed view for rendering.
    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            finished: &self.finished,
            active: &self.active,
            selection: self.selection,
        }
    }

    // --- touches ---

    /// Start a stroke for a new touch.
    ///
    /// A touch that is already active keeps its stroke; the duplicate begin
    /// is reported and otherwise ignored.
    pub fn begin_touch(&mut self, id: TouchId, at: Point) -> Result<(), TrackerError> {
        self.begin_stroke(id, at)?;
        self.host.request_redraw();
        Ok(())
    }

    /// Move the end of a touch's stroke. Unknown touches are ignored.
    pub fn move_touch(&mut self, id: TouchId, to: Point) {
        self.move_stroke(id, to);
        self.host.request_redraw();
    }

    /// Finish a touch's stroke and append it to the finished lines.
    pub fn end_touch(&mut self, id: TouchId, at: Point) {
        self.end_stroke(id, at);
        self.host.request_redraw();
    }

    /// Drop in-progress strokes without finishing them.
    pub fn cancel_touches(&mut self, scope: CancelScope) {
        self.cancel_strokes(&scope);
        self.host.request_redraw();
    }

    /// Apply a batch of touches that changed phase together.
    ///
    /// Requests a single redraw for the batch. A cancel with no touches
    /// cancels every active stroke. Duplicate begins inside the batch are
    /// skipped; the first one is returned after the rest of the batch has
    /// been applied.
    pub fn handle_touch_event(&mut self, event: &TouchEvent) -> Result<(), TrackerError> {
        log::trace!("touches {:?} ({} contacts)", event.phase, event.touches.len());

        let mut result = Ok(());
        match event.phase {
            TouchPhase::Began => {
                for touch in &event.touches {
                    if let Err(err) = self.begin_stroke(touch.id, touch.position) {
                        if result.is_ok() {
                            result = Err(err);
                        }
                    }
                }
            }
            TouchPhase::Moved => {
                for touch in &event.touches {
                    self.move_stroke(touch.id, touch.position);
                }
            }
            TouchPhase::Ended => {
                for touch in &event.touches {
                    self.end_stroke(touch.id, touch.position);
                }
            }
            TouchPhase::Cancelled => {
                let scope = if event.touches.is_empty() {
                    CancelScope::All
                } else {
                    CancelScope::Touches(event.touches.iter().map(|t| t.id).collect())
                };
                self.cancel_strokes(&scope);
            }
        }
        self.host.request_redraw();
        result
    }

    fn begin_stroke(&mut self, id: TouchId, at: Point) -> Result<(), TrackerError> {
        if self.active.contains_key(&id) {
            log::warn!("Touch {} began while already active; ignoring", id);
            return Err(TrackerError::DuplicateTouch(id));
        }
        self.active.insert(id, Line::at(at));
        Ok(())
    }

    fn move_stroke(&mut self, id: TouchId, to: Point) {
        match self.active.get_mut(&id) {
            Some(line) => line.end = to,
            None => log::debug!("Move for unknown touch {}", id),
        }
    }

    fn end_stroke(&mut self, id: TouchId, at: Point) {
        match self.active.remove(&id) {
            Some(mut line) => {
                line.end = at;
                self.finished.push(line);
            }
            None => log::debug!("End for unknown touch {}", id),
        }
    }

    fn cancel_strokes(&mut self, scope: &CancelScope) {
        match scope {
            CancelScope::All => self.active.clear(),
            CancelScope::Touches(ids) => {
                for id in ids {
                    self.active.remove(id);
                }
            }
        }
    }

    // --- selection ---

    /// Index of the first finished line near `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        line_at_point(
            &self.finished,
            point,
            self.config.hit_tolerance,
            self.config.hit_samples,
        )
    }

    /// Select the line under `point`, or clear the selection on a miss.
    pub fn select_at(&mut self, point: Point, origin: SelectionOrigin) {
        let hit = self.hit_test(point);
        log::debug!("Select at ({}, {}) via {:?}: {:?}", point.x, point.y, origin, hit);
        self.set_selection(hit);

        if hit.is_some() {
            match origin {
                SelectionOrigin::Tap => {
                    self.host.show_context_menu(point);
                    self.menu_visible = true;
                }
                SelectionOrigin::LongPress => {
                    self.active.clear();
                    self.hide_menu();
                }
            }
        }
        self.host.request_redraw();
    }

    /// Remove the selected line. Does nothing without a selection.
    pub fn delete_selected(&mut self) {
        if let Some(index) = self.selection {
            self.finished.remove(index);
            self.set_selection(None);
        }
        self.host.request_redraw();
    }

    /// Deselect without changing any line.
    pub fn clear_selection(&mut self) {
        self.set_selection(None);
        self.host.request_redraw();
    }

    /// Move the selected line by `delta`. Does nothing without a selection.
    pub fn translate_selected(&mut self, delta: Vec2) {
        if let Some(line) = self.selection.and_then(|index| self.finished.get_mut(index)) {
            line.translate(delta);
        }
        self.host.request_redraw();
    }

    /// Remove every stroke and line.
    pub fn clear_all(&mut self) {
        self.active.clear();
        self.finished.clear();
        self.set_selection(None);
        self.host.request_redraw();
    }

    fn set_selection(&mut self, selection: Option<usize>) {
        debug_assert!(selection.is_none_or(|index| index < self.finished.len()));
        self.selection = selection;
        if selection.is_none() {
            self.hide_menu();
        }
    }

    fn hide_menu(&mut self) {
        if self.menu_visible {
            self.host.hide_context_menu();
            self.menu_visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::host::RecordingHost;
    use crate::touch::TouchPoint;

    const A: TouchId = TouchId(1);
    const B: TouchId = TouchId(2);

    fn tracker() -> StrokeTracker<RecordingHost> {
        StrokeTracker::new(RecordingHost::new())
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Tracker holding a single finished line from (0,0) to (100,0).
    fn with_line() -> StrokeTracker<RecordingHost> {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.end_touch(A, p(100.0, 0.0));
        t.host_mut().take_redraws();
        t
    }

    #[test]
    fn test_begin_move_end() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        assert_eq!(t.active_stroke(A), Some(&Line::at(p(0.0, 0.0))));
        t.move_touch(A, p(10.0, 0.0));
        assert_eq!(t.active_stroke(A).map(|l| l.end), Some(p(10.0, 0.0)));
        t.end_touch(A, p(10.0, 0.0));

        assert_eq!(t.finished_lines(), &[Line::new(p(0.0, 0.0), p(10.0, 0.0))]);
        assert!(!t.is_drawing());
        assert_eq!(t.host().redraws, 3);
    }

    #[test]
    fn test_end_uses_end_location() {
        let mut t = tracker();
        t.begin_touch(A, p(1.0, 1.0)).unwrap();
        t.move_touch(A, p(5.0, 5.0));
        t.end_touch(A, p(7.0, 9.0));
        assert_eq!(t.finished_lines(), &[Line::new(p(1.0, 1.0), p(7.0, 9.0))]);
    }

    #[test]
    fn test_finish_order_follows_end_order() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.begin_touch(B, p(100.0, 100.0)).unwrap();
        t.end_touch(A, p(5.0, 0.0));
        t.end_touch(B, p(110.0, 110.0));
        assert_eq!(
            t.finished_lines(),
            &[
                Line::new(p(0.0, 0.0), p(5.0, 0.0)),
                Line::new(p(100.0, 100.0), p(110.0, 110.0)),
            ]
        );

        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.begin_touch(B, p(100.0, 100.0)).unwrap();
        t.end_touch(B, p(110.0, 110.0));
        t.end_touch(A, p(5.0, 0.0));
        assert_eq!(t.finished_lines()[0].begin, p(100.0, 100.0));
    }

    #[test]
    fn test_cancel_discards_stroke() {
        let mut t = with_line();
        t.begin_touch(B, p(3.0, 3.0)).unwrap();
        t.cancel_touches(CancelScope::Touches(vec![B]));
        assert!(!t.is_drawing());
        assert_eq!(t.finished_lines().len(), 1);
    }

    #[test]
    fn test_cancel_all() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.begin_touch(B, p(1.0, 1.0)).unwrap();
        t.cancel_touches(CancelScope::All);
        assert!(!t.is_drawing());
        assert!(t.finished_lines().is_empty());
    }

    #[test]
    fn test_cancel_subset_keeps_others() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.begin_touch(B, p(1.0, 1.0)).unwrap();
        t.cancel_touches(CancelScope::Touches(vec![A]));
        assert!(t.active_stroke(A).is_none());
        assert!(t.active_stroke(B).is_some());
    }

    #[test]
    fn test_unknown_touch_is_noop() {
        let mut t = with_line();
        let before = t.finished_lines().to_vec();
        t.move_touch(B, p(9.0, 9.0));
        t.end_touch(B, p(9.0, 9.0));
        assert_eq!(t.finished_lines(), before.as_slice());
        assert!(!t.is_drawing());
    }

    #[test]
    fn test_duplicate_begin_reported() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.move_touch(A, p(4.0, 0.0));
        assert_eq!(
            t.begin_touch(A, p(50.0, 50.0)),
            Err(TrackerError::DuplicateTouch(A))
        );
        assert_eq!(t.active_stroke(A), Some(&Line::new(p(0.0, 0.0), p(4.0, 0.0))));
        assert_eq!(t.host().redraws, 2);
    }

    #[test]
    fn test_touch_id_reusable_after_end() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.end_touch(A, p(1.0, 0.0));
        assert!(t.begin_touch(A, p(2.0, 0.0)).is_ok());
    }

    #[test]
    fn test_handle_touch_event_batch() {
        let mut t = tracker();
        t.handle_touch_event(&TouchEvent::new(
            TouchPhase::Began,
            vec![TouchPoint::new(A, p(0.0, 0.0)), TouchPoint::new(B, p(100.0, 100.0))],
        ))
        .unwrap();
        assert_eq!(t.active_strokes().len(), 2);
        assert_eq!(t.host().redraws, 1);

        t.handle_touch_event(&TouchEvent::new(
            TouchPhase::Moved,
            vec![TouchPoint::new(A, p(5.0, 0.0)), TouchPoint::new(B, p(110.0, 110.0))],
        ))
        .unwrap();
        t.handle_touch_event(&TouchEvent::new(
            TouchPhase::Ended,
            vec![TouchPoint::new(A, p(5.0, 0.0))],
        ))
        .unwrap();
        assert_eq!(t.finished_lines(), &[Line::new(p(0.0, 0.0), p(5.0, 0.0))]);

        t.handle_touch_event(&TouchEvent::cancel_all()).unwrap();
        assert!(!t.is_drawing());
        assert_eq!(t.finished_lines().len(), 1);
        assert_eq!(t.host().redraws, 4);
    }

    #[test]
    fn test_handle_touch_event_duplicate_in_batch() {
        let mut t = tracker();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        let result = t.handle_touch_event(&TouchEvent::new(
            TouchPhase::Began,
            vec![TouchPoint::new(A, p(9.0, 9.0)), TouchPoint::new(B, p(1.0, 1.0))],
        ));
        assert_eq!(result, Err(TrackerError::DuplicateTouch(A)));
        assert!(t.active_stroke(B).is_some());
        assert_eq!(t.active_stroke(A).map(|l| l.begin), Some(p(0.0, 0.0)));
    }

    #[test]
    fn test_hit_test_scenarios() {
        let t = with_line();
        assert_eq!(t.hit_test(p(50.0, 0.0)), Some(0));
        assert_eq!(t.hit_test(p(50.0, 50.0)), None);
        assert_eq!(t.hit_test(p(50.0, 0.0)), t.hit_test(p(50.0, 0.0)));
        assert_eq!(tracker().hit_test(p(0.0, 0.0)), None);
    }

    #[test]
    fn test_hit_test_uses_config() {
        let config = TrackerConfig {
            hit_tolerance: 60.0,
            ..TrackerConfig::default()
        };
        let mut t = StrokeTracker::with_config(RecordingHost::new(), config).unwrap();
        t.begin_touch(A, p(0.0, 0.0)).unwrap();
        t.end_touch(A, p(100.0, 0.0));
        assert_eq!(t.hit_test(p(50.0, 50.0)), Some(0));
        assert!((t.config().hit_tolerance - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_config_rejects_invalid_tolerance() {
        for hit_tolerance in [f64::NAN, 0.0, -5.0] {
            let config = TrackerConfig {
                hit_tolerance,
                ..TrackerConfig::default()
            };
            let result = StrokeTracker::with_config(RecordingHost::new(), config);
            assert!(matches!(result, Err(ConfigError::Invalid(_))));
        }
        let config = TrackerConfig {
            hit_samples: 0,
            ..TrackerConfig::default()
        };
        assert!(StrokeTracker::with_config(NullHost, config).is_err());
    }

    #[test]
    fn test_tap_select_shows_menu() {
        let mut t = with_line();
        t.select_at(p(50.0, 5.0), SelectionOrigin::Tap);
        assert_eq!(t.selection(), Some(0));
        assert_eq!(t.host().menu_anchor, Some(p(50.0, 5.0)));

        t.select_at(p(50.0, 80.0), SelectionOrigin::Tap);
        assert_eq!(t.selection(), None);
        assert!(!t.host().menu_visible());
    }

    #[test]
    fn test_long_press_select_discards_strokes() {
        let mut t = with_line();
        t.begin_touch(B, p(50.0, 0.0)).unwrap();
        t.select_at(p(50.0, 0.0), SelectionOrigin::LongPress);
        assert_eq!(t.selection(), Some(0));
        assert!(!t.is_drawing());
        assert!(!t.host().menu_visible());
        assert_eq!(t.finished_lines().len(), 1);
    }

    #[test]
    fn test_long_press_miss_keeps_strokes() {
        let mut t = with_line();
        t.begin_touch(B, p(300.0, 300.0)).unwrap();
        t.select_at(p(300.0, 300.0), SelectionOrigin::LongPress);
        assert_eq!(t.selection(), None);
        assert!(t.is_drawing());
    }

    #[test]
    fn test_delete_selected() {
        let mut t = with_line();
        t.select_at(p(50.0, 0.0), SelectionOrigin::Tap);
        t.delete_selected();
        assert!(t.finished_lines().is_empty());
        assert_eq!(t.selection(), None);
        assert!(!t.host().menu_visible());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut t = tracker();
        for (i, y) in [0.0, 100.0, 200.0].into_iter().enumerate() {
            let id = TouchId(i as u64);
            t.begin_touch(id, p(0.0, y)).unwrap();
            t.end_touch(id, p(100.0, y));
        }
        t.select_at(p(50.0, 100.0), SelectionOrigin::Tap);
        assert_eq!(t.selection(), Some(1));
        t.delete_selected();
        let ys: Vec<f64> = t.finished_lines().iter().map(|l| l.begin.y).collect();
        assert_eq!(ys, vec![0.0, 200.0]);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut t = with_line();
        t.delete_selected();
        assert_eq!(t.finished_lines().len(), 1);
        assert_eq!(t.host().redraws, 1);
    }

    #[test]
    fn test_translate_selected_additive() {
        let mut once = with_line();
        once.select_at(p(50.0, 0.0), SelectionOrigin::LongPress);
        once.translate_selected(Vec2::new(6.0, -4.0));

        let mut twice = with_line();
        twice.select_at(p(50.0, 0.0), SelectionOrigin::LongPress);
        twice.translate_selected(Vec2::new(3.0, -2.0));
        twice.translate_selected(Vec2::new(3.0, -2.0));

        assert_eq!(once.finished_lines(), twice.finished_lines());
        assert_eq!(
            once.selected_line(),
            Some(&Line::new(p(6.0, -4.0), p(106.0, -4.0)))
        );
        assert_eq!(twice.selection(), Some(0));
    }

    #[test]
    fn test_translate_without_selection_is_noop() {
        let mut t = with_line();
        t.translate_selected(Vec2::new(10.0, 10.0));
        assert_eq!(t.finished_lines(), &[Line::new(p(0.0, 0.0), p(100.0, 0.0))]);
    }

    #[test]
    fn test_clear_selection() {
        let mut t = with_line();
        t.select_at(p(50.0, 0.0), SelectionOrigin::Tap);
        t.clear_selection();
        assert_eq!(t.selection(), None);
        assert!(!t.host().menu_visible());
        assert_eq!(t.finished_lines().len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut t = with_line();
        t.select_at(p(50.0, 0.0), SelectionOrigin::Tap);
        t.begin_touch(B, p(5.0, 5.0)).unwrap();
        t.clear_all();
        assert!(t.finished_lines().is_empty());
        assert!(!t.is_drawing());
        assert_eq!(t.selection(), None);
        assert!(!t.host().menu_visible());
    }

    #[test]
    fn test_every_operation_requests_redraw() {
        let mut t = with_line();
        t.select_at(p(50.0, 0.0), SelectionOrigin::Tap);
        t.translate_selected(Vec2::new(1.0, 1.0));
        t.clear_selection();
        t.cancel_touches(CancelScope::All);
        t.clear_all();
        assert_eq!(t.host().redraws, 5);
    }

    #[test]
    fn test_scene_view() {
        let mut t = with_line();
        t.select_at(p(50.0, 0.0), SelectionOrigin::Tap);
        t.begin_touch(B, p(7.0, 7.0)).unwrap();
        t.begin_touch(A, p(3.0, 3.0)).unwrap();

        let scene = t.scene();
        assert_eq!(scene.finished.len(), 1);
        assert!(scene.is_selected(0));
        let active = scene.active_lines();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].begin, p(3.0, 3.0));
    }
}
