//! Touch input events delivered by the host's event source.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for one physical contact.
///
/// Stable for the duration of the contact and never shared by two contacts
/// that are down at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub u64);

impl fmt::Display for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for TouchId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => TouchPhase::Began,
            winit::event::TouchPhase::Moved => TouchPhase::Moved,
            winit::event::TouchPhase::Ended => TouchPhase::Ended,
            winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
        }
    }
}

/// One contact and its location in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: TouchId, position: Point) -> Self {
        Self { id, position }
    }
}

/// A batch of contacts that changed phase together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: Vec<TouchPoint>) -> Self {
        Self { phase, touches }
    }

    /// Single-contact event.
    pub fn single(phase: TouchPhase, id: TouchId, position: Point) -> Self {
        Self::new(phase, vec![TouchPoint::new(id, position)])
    }

    /// Cancellation of every active contact.
    pub fn cancel_all() -> Self {
        Self::new(TouchPhase::Cancelled, Vec::new())
    }
}

impl From<winit::event::Touch> for TouchEvent {
    fn from(touch: winit::event::Touch) -> Self {
        Self::single(
            touch.phase.into(),
            TouchId(touch.id),
            Point::new(touch.location.x, touch.location.y),
        )
    }
}

/// Which active strokes a cancellation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelScope {
    /// Every active stroke.
    All,
    /// Only the listed contacts.
    Touches(Vec<TouchId>),
}
