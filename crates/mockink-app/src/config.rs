//! Application configuration: editor tunables, export settings and an
//! optional starting layout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mockink_core::config::{ConfigError, EditorConfig};
use mockink_core::element::ElementKind;
use mockink_render::export::ExportConfig;

/// One element to place when the app starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub kind: ElementKind,
    /// Canvas-space point the element is centered on.
    pub x: f64,
    pub y: f64,
    /// Replaces the template's text content.
    #[serde(default)]
    pub content: Option<String>,
}

/// Top-level config file layout.
///
/// ```json
/// {
///   "editor": { "grid_size": 10 },
///   "export": { "title": "Landing" },
///   "layout": [{ "kind": "heading", "x": 400, "y": 60, "content": "Welcome" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub editor: EditorConfig,
    pub export: ExportConfig,
    pub layout: Vec<LayoutEntry>,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.editor.validate()?;
        if !(config.export.min_height >= 0.0 && config.export.margin >= 0.0) {
            return Err(ConfigError::Invalid(
                "export margin and min_height must be non-negative".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
