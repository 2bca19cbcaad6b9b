//! Recorded input sessions and their replay.

use crate::AppError;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use touchtracker_core::{
    GestureEvent, GestureState, StrokeTracker, SurfaceHost, TouchEvent, TouchId, TouchPhase,
    TouchPoint,
};

/// One recorded input, in delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Raw touches from the input source.
    Touch(TouchEvent),
    /// A recognized gesture.
    Gesture(GestureEvent),
    /// The context menu's "Delete" action.
    Delete,
}

/// Read a session (a JSON array of events) from disk.
pub fn load_session(path: impl AsRef<Path>) -> Result<Vec<SessionEvent>, AppError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let events: Vec<SessionEvent> = serde_json::from_str(&json)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Feed every event to the tracker in order.
///
/// Duplicate touch begins are logged and skipped; replay continues.
pub fn replay<H: SurfaceHost>(tracker: &mut StrokeTracker<H>, events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::Touch(touch) => {
                if let Err(err) = tracker.handle_touch_event(touch) {
                    log::warn!("{}", err);
                }
            }
            SessionEvent::Gesture(gesture) => tracker.handle_gesture(gesture),
            SessionEvent::Delete => tracker.delete_selected(),
        }
    }
}

/// Two lines drawn at once, one moved with long press and pan, the other
/// tapped and deleted.
pub fn demo_session() -> Vec<SessionEvent> {
    let a = TouchId(1);
    let b = TouchId(2);
    let touches = |phase, points: &[(TouchId, Point)]| {
        SessionEvent::Touch(TouchEvent::new(
            phase,
            points.iter().map(|&(id, p)| TouchPoint::new(id, p)).collect(),
        ))
    };

    vec![
        touches(
            TouchPhase::Began,
            &[(a, Point::new(0.0, 0.0)), (b, Point::new(100.0, 100.0))],
        ),
        touches(
            TouchPhase::Moved,
            &[(a, Point::new(10.0, 0.0)), (b, Point::new(150.0, 100.0))],
        ),
        touches(
            TouchPhase::Ended,
            &[(a, Point::new(50.0, 0.0)), (b, Point::new(200.0, 100.0))],
        ),
        SessionEvent::Gesture(GestureEvent::LongPress {
            state: GestureState::Began,
            point: Point::new(25.0, 0.0),
        }),
        SessionEvent::Gesture(GestureEvent::Pan {
            state: GestureState::Changed,
            translation: Vec2::new(0.0, 40.0),
        }),
        SessionEvent::Gesture(GestureEvent::LongPress {
            state: GestureState::Ended,
            point: Point::new(25.0, 40.0),
        }),
        SessionEvent::Gesture(GestureEvent::Tap {
            point: Point::new(150.0, 100.0),
        }),
        SessionEvent::Delete,
    ]
}
