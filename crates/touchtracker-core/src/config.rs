//! Tracker configuration: hit-test tolerance and drawing style.

use crate::error::{ConfigError, ConfigResult};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum distance (exclusive) between a tap and a line probe.
pub const DEFAULT_HIT_TOLERANCE: f64 = 20.0;
/// Number of probes per line (step 0.05).
pub const DEFAULT_HIT_SAMPLES: usize = 20;
/// Stroke width for all lines.
pub const DEFAULT_LINE_THICKNESS: f64 = 10.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Configuration for a [`StrokeTracker`](crate::tracker::StrokeTracker) and
/// the renderer drawing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Hit-test radius around each probe.
    pub hit_tolerance: f64,
    /// Probes per line when hit testing.
    pub hit_samples: usize,
    /// Stroke width.
    pub line_thickness: f64,
    /// Color of finished lines.
    pub finished_color: SerializableColor,
    /// Color of strokes still in progress.
    pub active_color: SerializableColor,
    /// Color of the selected line.
    pub selected_color: SerializableColor,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            hit_samples: DEFAULT_HIT_SAMPLES,
            line_thickness: DEFAULT_LINE_THICKNESS,
            finished_color: SerializableColor::black(),
            active_color: SerializableColor::red(),
            selected_color: SerializableColor::green(),
        }
    }
}

impl TrackerConfig {
    /// Check that all values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.hit_tolerance.is_finite() || self.hit_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hit_tolerance must be positive, got {}",
                self.hit_tolerance
            )));
        }
        if self.hit_samples == 0 {
            return Err(ConfigError::Invalid("hit_samples must be at least 1".to_string()));
        }
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "line_thickness must be positive, got {}",
                self.line_thickness
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded tracker config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert!((config.hit_tolerance - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.hit_samples, 20);
        assert!((config.line_thickness - 10.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TrackerConfig::from_json(r#"{"hit_tolerance": 30.0}"#).unwrap();
        assert!((config.hit_tolerance - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.hit_samples, DEFAULT_HIT_SAMPLES);
        assert_eq!(config.active_color, SerializableColor::red());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = TrackerConfig::default();
        config.selected_color = SerializableColor::new(1, 2, 3, 4);
        let json = config.to_json().unwrap();
        assert_eq!(TrackerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            TrackerConfig::from_json(r#"{"hit_samples": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TrackerConfig::from_json(r#"{"hit_tolerance": -1.0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TrackerConfig::from_json(r#"{"line_thickness": 0.0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            TrackerConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"line_thickness": 4.0}}"#).unwrap();
        let config = TrackerConfig::load(file.path()).unwrap();
        assert!((config.line_thickness - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TrackerConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_color_conversion() {
        let color: Color = SerializableColor::new(10, 20, 30, 255).into();
        assert_eq!(SerializableColor::from(color), SerializableColor::new(10, 20, 30, 255));
    }
}
