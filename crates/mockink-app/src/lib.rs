//! Mockink Application
//!
//! Top-level controller for the Mockink layout editor.

mod app;
pub mod config;
pub mod preview;
pub mod shortcuts;

pub use app::{App, AppError};
pub use config::{AppConfig, LayoutEntry};
pub use preview::{FilePreview, MemoryPreview, PreviewSurface};
pub use shortcuts::{Action, Shortcut, ShortcutRegistry};
