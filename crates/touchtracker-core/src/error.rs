//! Error types for the tracker and its configuration.

use crate::touch::TouchId;
use thiserror::Error;

/// Logic errors reported by the stroke tracker.
///
/// These never leave the tracker in an inconsistent state; callers may log
/// and continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Touch {0} began while already active")]
    DuplicateTouch(TouchId),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
