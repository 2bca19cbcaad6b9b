//! TouchTracker Core Library
//!
//! Platform-agnostic state machine for a touch drawing surface: in-progress
//! strokes keyed by touch identity, finished lines, and a single selection
//! that can be moved or deleted.

pub mod config;
pub mod error;
pub mod gesture;
pub mod host;
pub mod line;
pub mod touch;
pub mod tracker;

pub use config::{SerializableColor, TrackerConfig, DEFAULT_HIT_SAMPLES, DEFAULT_HIT_TOLERANCE};
pub use error::{ConfigError, TrackerError};
pub use gesture::{GestureEvent, GestureState};
pub use hit_test::line_at_point;
pub use host::{NullHost, RecordingHost, SurfaceHost};
pub use line::Line;
pub use touch::{CancelScope, TouchEvent, TouchId, TouchPhase, TouchPoint};
pub use tracker::{SceneView, SelectionOrigin, StrokeTracker};
