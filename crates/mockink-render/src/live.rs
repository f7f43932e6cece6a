//! Live view projection.
//!
//! Recomputed from scratch after every scene change; there is no diffing.
//! The view applies `zoom` as a visual scale on top of canvas-space geometry.

use kurbo::{Affine, Rect};

use mockink_core::element::{Background, Element, ElementBody, ElementId, ElementKind, VideoProps};
use mockink_core::scene::Scene;
use mockink_core::selection::{Handle, resize_handles};

use crate::style::ResolvedStyle;

/// Minimum live canvas width in canvas units.
pub const MIN_CANVAS_WIDTH: f64 = 3000.0;
/// Minimum live canvas height in canvas units.
pub const MIN_CANVAS_HEIGHT: f64 = 2000.0;
/// Room kept past the furthest element.
pub const CANVAS_PADDING: f64 = 200.0;

/// Inner content of a projected element.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveContent {
    Text(String),
    TextInput(String),
    TextArea(String),
    Select(Vec<String>),
    Checkbox,
    Image { src: String },
    Video { src: String, props: VideoProps },
}

/// A background video playing behind the element's content.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundVideo {
    pub src: String,
    pub props: VideoProps,
}

/// One element as the live view draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveNode {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Canvas-space bounds.
    pub bounds: Rect,
    pub style: ResolvedStyle,
    pub background_video: Option<BackgroundVideo>,
    pub content: LiveContent,
    pub selected: bool,
    /// Corner affordances, only on selected elements.
    pub handles: Option<[Handle; 4]>,
}

/// The whole live canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveProjection {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    /// Size of one background grid cell.
    pub grid_size: f64,
    /// Nodes in z-order, bottommost first.
    pub nodes: Vec<LiveNode>,
}

impl LiveProjection {
    pub fn node(&self, id: ElementId) -> Option<&LiveNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Canvas-space to view-space scale.
    pub fn view_transform(&self) -> Affine {
        Affine::scale(self.zoom)
    }
}

/// Project the scene for the interactive view.
pub fn project_live(scene: &Scene, grid_size: f64) -> LiveProjection {
    let nodes = scene
        .elements()
        .iter()
        .map(|element| project_node(element, scene.selection.shows_handles(element.id())))
        .collect();

    LiveProjection {
        width: MIN_CANVAS_WIDTH.max(scene.max_right() + CANVAS_PADDING),
        height: MIN_CANVAS_HEIGHT.max(scene.max_bottom() + CANVAS_PADDING),
        zoom: scene.zoom(),
        grid_size,
        nodes,
    }
}

fn project_node(element: &Element, selected: bool) -> LiveNode {
    let background_video = match &element.background {
        Background::Video { src, props } if !src.is_empty() => Some(BackgroundVideo {
            src: src.clone(),
            props: *props,
        }),
        _ => None,
    };

    LiveNode {
        id: element.id(),
        kind: element.kind(),
        bounds: element.bounds(),
        style: ResolvedStyle::resolve(element),
        background_video,
        content: live_content(&element.body),
        selected,
        handles: selected.then(|| resize_handles(element)),
    }
}

fn live_content(body: &ElementBody) -> LiveContent {
    match body {
        ElementBody::Box(t)
        | ElementBody::Button(t)
        | ElementBody::Heading(t)
        | ElementBody::Paragraph(t) => {
            LiveContent::Text(t.content.clone())
        }
        ElementBody::TextInput(t) => LiveContent::TextInput(t.content.clone()),
        ElementBody::TextArea(t) => LiveContent::TextArea(t.content.clone()),
        ElementBody::Select(s) => LiveContent::Select(s.options.clone()),
        ElementBody::Checkbox => LiveContent::Checkbox,
        ElementBody::Image(i) => LiveContent::Image { src: i.src.clone() },
        ElementBody::Video(v) => LiveContent::Video {
            src: v.src.clone(),
            props: v.props,
        },
    }
}
