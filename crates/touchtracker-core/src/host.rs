//! Collaborators the tracker drives: redraw requests and the context menu.

use kurbo::Point;

/// The view hosting a [`StrokeTracker`](crate::tracker::StrokeTracker).
///
/// The tracker calls these after mutating its state. Implementations should
/// only schedule work (e.g. mark the view dirty); drawing happens later from
/// the tracker's [`SceneView`](crate::tracker::SceneView).
pub trait SurfaceHost {
    /// Mark the surface as needing a redraw.
    fn request_redraw(&mut self);

    /// Show the "Delete" context action anchored at `anchor`.
    fn show_context_menu(&mut self, _anchor: Point) {}

    /// Hide the context action.
    fn hide_context_menu(&mut self) {}
}

/// Host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl SurfaceHost for NullHost {
    fn request_redraw(&mut self) {}
}

/// Host that records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Redraw requests since the last [`take_redraws`](Self::take_redraws).
    pub redraws: usize,
    /// Anchor of the visible context menu, if shown.
    pub menu_anchor: Option<Point>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the context menu is currently visible.
    pub fn menu_visible(&self) -> bool {
        self.menu_anchor.is_some()
    }

    /// Return the redraw count and reset it.
    pub fn take_redraws(&mut self) -> usize {
        std::mem::take(&mut self.redraws)
    }
}

impl SurfaceHost for RecordingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn show_context_menu(&mut self, anchor: Point) {
        self.menu_anchor = Some(anchor);
    }

    fn hide_context_menu(&mut self) {
        self.menu_anchor = None;
    }
}
