//! TouchTracker Application
//!
//! Application shell that feeds recorded input into a stroke tracker and
//! renders the result.

mod host;
mod session;

pub use host::LoggingHost;
pub use session::{demo_session, load_session, replay, SessionEvent};

use std::path::PathBuf;
use thiserror::Error;
use touchtracker_core::{ConfigError, TrackerConfig};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to read session: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session JSON: {0}")]
    Session(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

/// Command line options.
#[derive(Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Recorded session to replay; the built-in demo when absent.
    pub session: Option<PathBuf>,
    /// Tracker config file; defaults when absent.
    pub config: Option<PathBuf>,
}

impl AppConfig {
    /// Parse `[SESSION] [--config PATH]`.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut app = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config needs a path".to_string()))?;
                    app.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("Unknown option {flag}")));
                }
                _ if app.session.is_some() => {
                    return Err(AppError::Usage(
                        "Only one session file can be replayed".to_string(),
                    ));
                }
                _ => app.session = Some(PathBuf::from(arg)),
            }
        }
        Ok(app)
    }

    /// Load the tracker config, falling back to defaults.
    pub fn tracker_config(&self) -> Result<TrackerConfig, AppError> {
        match &self.config {
            Some(path) => Ok(TrackerConfig::load(path)?),
            None => Ok(TrackerConfig::default()),
        }
    }
}
