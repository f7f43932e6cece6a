//! Editor configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::MAX_UNDO_HISTORY;
use crate::snap::GRID_SIZE;

/// Minimum element width/height enforced on every resize.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables of the editing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid unit for placement and drag snapping, in canvas units.
    pub grid_size: f64,
    /// Smallest width/height an element may have.
    pub min_element_size: f64,
    /// Maximum number of undo states kept.
    pub history_capacity: usize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Resize handle hit radius in screen pixels.
    pub handle_tolerance: f64,
    /// Snap newly placed elements to the grid.
    pub snap_placement: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            min_element_size: MIN_ELEMENT_SIZE,
            history_capacity: MAX_UNDO_HISTORY,
            min_zoom: 0.1,
            max_zoom: 10.0,
            handle_tolerance: 8.0,
            snap_placement: true,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if !(self.min_element_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_element_size must be positive, got {}",
                self.min_element_size
            )));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be at least 1".to_string()));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds must satisfy 0 < min_zoom <= max_zoom, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert!((config.grid_size - 20.0).abs() < f64::EPSILON);
        assert!((config.min_element_size - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.history_capacity, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "grid_size": 10 }"#).unwrap();
        assert!((config.grid_size - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "grid_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "min_zoom": 5, "max_zoom": 1 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(EditorConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "history_capacity": 5, "snap_placement": false }}"#).unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert!(!config.snap_placement);

        let missing = EditorConfig::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
