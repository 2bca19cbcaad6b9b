//! Pre-recognized gestures and how the tracker reacts to them.
//!
//! Recognition and disambiguation (a tap only fires when no double tap
//! follows, pan runs alongside long press, ...) is the host's job.

use crate::host::SurfaceHost;
use crate::tracker::{SelectionOrigin, StrokeTracker};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// State of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureState {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A gesture delivered by the host's recognizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Clears the whole drawing.
    DoubleTap { point: Point },
    /// Selects the line under the point.
    Tap { point: Point },
    /// Selects a line for moving while held.
    LongPress { state: GestureState, point: Point },
    /// Finger movement since the previous report; the host resets its
    /// recognizer's translation after each delivery.
    Pan { state: GestureState, translation: Vec2 },
}

impl<H: SurfaceHost> StrokeTracker<H> {
    /// React to a recognized gesture.
    pub fn handle_gesture(&mut self, gesture: &GestureEvent) {
        log::trace!("gesture {:?}", gesture);
        match *gesture {
            GestureEvent::DoubleTap { .. } => self.clear_all(),
            GestureEvent::Tap { point } => self.select_at(point, SelectionOrigin::Tap),
            GestureEvent::LongPress { state, point } => match state {
                GestureState::Began => self.select_at(point, SelectionOrigin::LongPress),
                GestureState::Ended | GestureState::Cancelled => self.clear_selection(),
                GestureState::Changed => {}
            },
            GestureEvent::Pan {
                state: GestureState::Changed,
                translation,
            } => {
                if self.selection().is_some() {
                    self.translate_selected(translation);
                }
            }
            GestureEvent::Pan { .. } => {}
        }
    }
}
