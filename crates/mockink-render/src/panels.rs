//! Layers panel and status line projections.

use mockink_core::element::{Element, ElementId};
use mockink_core::scene::Scene;
use mockink_core::session::SessionStatus;

/// One row of the layers panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub id: ElementId,
    pub label: String,
    pub selected: bool,
}

/// `"<type> (<last 4 chars of id>)"`.
pub fn layer_label(element: &Element) -> String {
    let id = element.id().to_string();
    let suffix = &id[id.len().saturating_sub(4)..];
    format!("{} ({suffix})", element.kind().name())
}

/// Layers panel rows, topmost element first.
pub fn project_layers(scene: &Scene) -> Vec<LayerEntry> {
    scene
        .elements()
        .iter()
        .rev()
        .map(|element| LayerEntry {
            id: element.id(),
            label: layer_label(element),
            selected: scene.selection.contains(element.id()),
        })
        .collect()
}

/// Status line text: element count and zoom.
pub fn status_text(status: &SessionStatus) -> String {
    format!("Elements: {} | Zoom: {}%", status.element_count, status.zoom_percent)
}
