//! Application controller.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use kurbo::Point;

use mockink_core::catalog::builtin_template;
use mockink_core::config::ConfigError;
use mockink_core::element::ElementPatch;
use mockink_core::input::KeyEvent;
use mockink_core::session::EditorSession;
use mockink_render::export::HtmlExporter;
use mockink_render::live::{LiveProjection, project_live};
use mockink_render::panels::{LayerEntry, project_layers, status_text};

use crate::config::{AppConfig, LayoutEntry};
use crate::preview::PreviewSurface;
use crate::shortcuts::{Action, ShortcutRegistry};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Owns the editing session and routes input and output around it.
#[derive(Debug, Clone)]
pub struct App {
    session: EditorSession,
    exporter: HtmlExporter,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: EditorSession::new(config.editor),
            exporter: HtmlExporter::new(config.export),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn exporter(&self) -> &HtmlExporter {
        &self.exporter
    }

    /// Place each entry through the session, one history record per step.
    /// Returns how many elements were placed.
    pub fn apply_layout(&mut self, layout: &[LayoutEntry]) -> usize {
        let session = &mut self.session;
        let mut placed = 0;
        for entry in layout {
            session.arm_placement(builtin_template(entry.kind));
            let client = session.transform().canvas_to_client(Point::new(entry.x, entry.y));
            if session.place_at(client).is_none() {
                continue;
            }
            if let Some(content) = &entry.content {
                session.commit_edit(&ElementPatch::new().with_content(content.as_str()));
            }
            placed += 1;
        }
        log::info!("Applied layout: {placed} elements");
        placed
    }

    /// Handle a key press. Returns the action it mapped to, if any.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Action> {
        let action = ShortcutRegistry::resolve(event)?;
        let applied = self.perform(action);
        log::debug!("{} (applied: {applied})", action.name());
        Some(action)
    }

    /// Run an action against the session. Returns whether anything changed.
    pub fn perform(&mut self, action: Action) -> bool {
        let session = &mut self.session;
        match action {
            Action::CancelPlacement => session.cancel_placement(),
            Action::DeleteSelected => session.delete_selected() > 0,
            Action::Undo => session.undo(),
            Action::Redo => session.redo(),
            Action::BringToFront => session.bring_to_front(),
            Action::SendToBack => session.send_to_back(),
            Action::BringForward => session.bring_forward(),
            Action::SendBackward => session.send_backward(),
        }
    }

    pub fn live_view(&self) -> LiveProjection {
        project_live(self.session.scene(), self.session.config().grid_size)
    }

    pub fn layers(&self) -> Vec<LayerEntry> {
        project_layers(self.session.scene())
    }

    pub fn status_line(&self) -> String {
        status_text(&self.session.status())
    }

    /// The export document for the current scene.
    pub fn export_document(&self) -> String {
        self.exporter.export(self.session.scene())
    }

    /// Write the export document to `path`.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
        let path = path.as_ref();
        fs::write(path, self.export_document()).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Exported {} elements to {}", self.session.scene().len(), path.display());
        Ok(path.to_path_buf())
    }

    /// Write the export document into `dir` under the configured file name.
    pub fn export_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf, AppError> {
        self.export_to(dir.as_ref().join(&self.exporter.config().file_name))
    }

    /// Push the current export document to a preview surface.
    pub fn refresh_preview(&self, surface: &mut dyn PreviewSurface) -> Result<(), AppError> {
        surface.show(&self.export_document())?;
        log::info!("Preview refreshed");
        Ok(())
    }
}
