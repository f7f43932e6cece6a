//! Secondary display surfaces for the exported document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppError;

/// A surface that can show an exported document, refreshed repeatedly.
pub trait PreviewSurface {
    /// Replace whatever the surface shows with `document`.
    fn show(&mut self, document: &str) -> Result<(), AppError>;
}

/// Preview written to a file, overwritten on every refresh.
///
/// Point a browser with auto-reload at the file to watch the layout.
#[derive(Debug, Clone)]
pub struct FilePreview {
    path: PathBuf,
}

impl FilePreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSurface for FilePreview {
    fn show(&mut self, document: &str) -> Result<(), AppError> {
        fs::write(&self.path, document).map_err(|source| AppError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// In-memory preview keeping every shown document.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreview {
    documents: Vec<String>,
}

impl MemoryPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }

    pub fn refresh_count(&self) -> usize {
        self.documents.len()
    }
}

impl PreviewSurface for MemoryPreview {
    fn show(&mut self, document: &str) -> Result<(), AppError> {
        self.documents.push(document.to_string());
        Ok(())
    }
}
