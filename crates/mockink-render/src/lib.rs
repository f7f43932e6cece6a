//! Mockink Render Library
//!
//! Pure projections of a scene: the live interactive view, the layers panel
//! and the static HTML export. Nothing here mutates the model.

pub mod export;
pub mod live;
pub mod panels;
pub mod style;

pub use export::{ExportConfig, HtmlExporter};
pub use live::{BackgroundVideo, LiveContent, LiveNode, LiveProjection, project_live};
pub use panels::{LayerEntry, layer_label, project_layers, status_text};
pub use style::{ResolvedFont, ResolvedStyle, escape_html};
