//! Mockink Core Library
//!
//! Platform-agnostic scene editing engine for the Mockink layout editor.

pub mod catalog;
pub mod config;
pub mod element;
pub mod history;
pub mod input;
pub mod interaction;
pub mod properties;
pub mod scene;
pub mod selection;
pub mod session;
pub mod snap;
pub mod transform;

pub use catalog::{
    ElementTemplate, FONT_FAMILIES, TemplateStyles, builtin_catalog, builtin_template,
};
pub use config::{ConfigError, EditorConfig, MIN_ELEMENT_SIZE};
pub use element::{
    Background, BackgroundType, Element, ElementBody, ElementId, ElementKind, ElementPatch,
    FontStyle, FontWeight, TextAlign, TextStyle, VideoProps,
};
pub use history::{History, MAX_UNDO_HISTORY, Snapshot};
pub use input::{Key, KeyEvent, Modifiers};
pub use interaction::{Gesture, PlacementState};
pub use properties::PropertyField;
pub use scene::{Scene, SceneError, SceneResult};
pub use selection::{Corner, Handle, Selection};
pub use session::{EditorSession, SessionStatus};
pub use snap::{GRID_SIZE, SnapResult, snap_to_grid};
pub use transform::CanvasTransform;
