//! The editing session: one scene, its history and the interaction state.
//!
//! Every user-facing operation goes through [`EditorSession`]. It turns
//! pointer and keyboard input into scene mutations and decides when a
//! mutation is committed to history. Stale element references are logged
//! and ignored here; nothing below the session records history.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::catalog::ElementTemplate;
use crate::config::EditorConfig;
use crate::element::{Element, ElementId, ElementPatch};
use crate::history::History;
use crate::input::Modifiers;
use crate::interaction::{
    DragState, Gesture, PlacementState, ResizeState, display_to_storage, placement_origin,
};
use crate::properties::{PropertyField, property_fields};
use crate::scene::{Scene, SceneResult};
use crate::selection::{Corner, hit_test_handles};
use crate::snap::snap_to_grid;
use crate::transform::CanvasTransform;

/// Summary shown in the editor's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub element_count: usize,
    /// `round(zoom * 100)`.
    pub zoom_percent: u32,
    pub can_undo: bool,
    pub can_redo: bool,
    pub placement_armed: bool,
}

/// Explicit editor state owned by the application controller.
#[derive(Debug, Clone)]
pub struct EditorSession {
    scene: Scene,
    history: History,
    config: EditorConfig,
    /// On-screen bounds of the canvas, client-space.
    canvas_rect: Rect,
    placement: PlacementState,
    gesture: Gesture,
    /// Live preview edits not yet committed to history.
    pending_edit: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Start an empty session. The empty state is the first history entry.
    ///
    /// An invalid config is replaced by the defaults.
    pub fn new(config: EditorConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}; using default editor config");
                EditorConfig::default()
            }
        };
        let mut history = History::new(config.history_capacity);
        let scene = Scene::new();
        history.record(scene.elements());
        Self {
            scene,
            history,
            config,
            canvas_rect: Rect::ZERO,
            placement: PlacementState::default(),
            gesture: Gesture::default(),
            pending_edit: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn placement(&self) -> &PlacementState {
        &self.placement
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_edit
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Update the canvas's on-screen bounds (after layout or scrolling).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn transform(&self) -> CanvasTransform {
        CanvasTransform::new(self.canvas_rect, self.scene.zoom())
    }

    pub fn zoom(&self) -> f64 {
        self.scene.zoom()
    }

    /// Set the zoom, clamped to the configured bounds. Never recorded.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.scene.set_zoom(zoom, self.config.min_zoom, self.config.max_zoom);
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            element_count: self.scene.len(),
            zoom_percent: (self.scene.zoom() * 100.0).round() as u32,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            placement_armed: self.placement.is_armed(),
        }
    }

    // --- Placement ---

    /// Arm a template; the next canvas click places it.
    pub fn arm_placement(&mut self, template: ElementTemplate) {
        log::debug!("Armed placement: {}", template.label);
        self.placement.arm(template);
    }

    /// Disarm without placing. Returns whether anything was armed.
    pub fn cancel_placement(&mut self) -> bool {
        let was_armed = self.placement.is_armed();
        self.placement.cancel();
        was_armed
    }

    /// Place the armed template centered on a client-space click.
    pub fn place_at(&mut self, client: Point) -> Option<ElementId> {
        self.finish_gesture();
        let point = self.transform().client_to_canvas(client);
        self.place_at_canvas(point)
    }

    fn place_at_canvas(&mut self, point: Point) -> Option<ElementId> {
        let template = self.placement.take()?;
        let mut origin = placement_origin(point, &template);
        if self.config.snap_placement {
            origin = snap_to_grid(origin, self.config.grid_size).point;
        }

        let id = self.scene.create(&template, origin, self.config.min_element_size);
        self.scene.selection.select(id);
        log::debug!("Placed {} at ({}, {})", template.kind.name(), origin.x, origin.y);
        self.commit();
        Some(id)
    }

    // --- Pointer gestures ---

    /// Handle a pointer press on the canvas.
    ///
    /// An armed placement wins. Otherwise a handle of a selected element
    /// starts a resize, an element body selects it and starts a drag, and
    /// empty canvas clears the selection (unless shift is held).
    /// Returns the element the press landed on.
    pub fn pointer_down(&mut self, client: Point, modifiers: Modifiers) -> Option<ElementId> {
        self.finish_gesture();
        let point = self.transform().client_to_canvas(client);

        if self.placement.is_armed() {
            return self.place_at_canvas(point);
        }

        if let Some((id, corner)) = self.handle_at(point) {
            self.begin_resize(id, corner, client);
            return Some(id);
        }

        match self.scene.element_at(point) {
            Some(id) => {
                if modifiers.shift {
                    self.scene.selection.add(id);
                } else if !self.scene.selection.contains(id) {
                    self.scene.selection.select(id);
                }
                self.begin_drag(id, client);
                Some(id)
            }
            None => {
                if !modifiers.shift {
                    self.scene.selection.clear();
                }
                None
            }
        }
    }

    /// Corner handle of a selected element under a canvas point.
    fn handle_at(&self, point: Point) -> Option<(ElementId, Corner)> {
        let tolerance = self.transform().length_to_canvas(self.config.handle_tolerance);
        self.scene.selection.ids().iter().find_map(|&id| {
            let element = self.scene.get(id)?;
            hit_test_handles(element, point, tolerance).map(|corner| (id, corner))
        })
    }

    /// Start dragging an element body. Returns false for unknown ids.
    pub fn begin_drag(&mut self, id: ElementId, client: Point) -> bool {
        self.finish_gesture();
        let Some(element) = self.scene.get(id) else {
            log::warn!("Ignoring drag of missing element {id}");
            return false;
        };
        self.gesture = Gesture::Drag(DragState::new(id, client, element.position));
        log::debug!("Drag start: {id}");
        true
    }

    /// Start resizing an element from a corner. Returns false for unknown ids.
    pub fn begin_resize(&mut self, id: ElementId, corner: Corner, client: Point) -> bool {
        self.finish_gesture();
        let Some(element) = self.scene.get(id) else {
            log::warn!("Ignoring resize of missing element {id}");
            return false;
        };
        self.gesture = Gesture::Resize(ResizeState::new(id, corner, client, element.bounds()));
        log::debug!("Resize start: {id} from {}", corner.name());
        true
    }

    /// Apply the active drag or resize for a pointer move.
    /// The geometry is written straight into the scene without recording.
    pub fn pointer_move(&mut self, client: Point) {
        let transform = self.transform();
        let (id, position, size) = match &self.gesture {
            Gesture::Drag(drag) => (
                drag.element_id,
                drag.position_for(client, &transform, self.config.grid_size),
                None,
            ),
            Gesture::Resize(resize) => {
                let bounds = resize.bounds_for(client, &transform, self.config.min_element_size);
                (resize.element_id, bounds.origin(), Some(bounds.size()))
            }
            Gesture::Idle | Gesture::LayerDrag { .. } => return,
        };

        match self.scene.get_mut(id) {
            Some(element) => {
                element.position = position;
                if let Some(size) = size {
                    element.width = size.width;
                    element.height = size.height;
                }
            }
            None => self.abandon_gesture(),
        }
    }

    /// Pointer release. Returns whether a history record was made.
    pub fn pointer_up(&mut self) -> bool {
        self.finish_gesture()
    }

    /// Pointer tracking lost; finalized through the same commit path as release.
    pub fn pointer_cancel(&mut self) -> bool {
        self.finish_gesture()
    }

    fn abandon_gesture(&mut self) {
        if let Some(id) = self.gesture.element_id() {
            log::warn!("Dropping gesture on missing element {id}");
        }
        self.gesture = Gesture::Idle;
    }

    /// End the active gesture, committing once if it changed the scene.
    fn finish_gesture(&mut self) -> bool {
        let changed = match std::mem::take(&mut self.gesture) {
            Gesture::Idle | Gesture::LayerDrag { .. } => return false,
            Gesture::Drag(drag) => self
                .scene
                .get(drag.element_id)
                .is_some_and(|e| e.position != drag.original_position),
            Gesture::Resize(resize) => self
                .scene
                .get(resize.element_id)
                .is_some_and(|e| e.bounds() != resize.original_bounds),
        };
        log::debug!("Gesture end (changed: {changed})");
        if changed {
            self.commit();
        }
        changed
    }

    // --- Layers panel ---

    /// Start dragging a layers-panel entry.
    pub fn begin_layer_drag(&mut self, id: ElementId) -> bool {
        self.finish_gesture();
        if !self.scene.contains(id) {
            log::warn!("Ignoring layer drag of missing element {id}");
            return false;
        }
        self.gesture = Gesture::LayerDrag { element_id: id };
        true
    }

    /// Drop the dragged layer onto another entry: the dragged element
    /// takes the target's z-order slot. Returns whether the order changed.
    pub fn drop_on_layer(&mut self, target: ElementId) -> bool {
        let Gesture::LayerDrag { element_id } = self.gesture else {
            return false;
        };
        self.gesture = Gesture::Idle;

        let Some(target_index) = self.scene.index_of(target) else {
            log::warn!("Ignoring drop on missing layer {target}");
            return false;
        };
        let result = self.scene.reorder(element_id, target_index);
        self.commit_if_changed("Layer reorder", result)
    }

    /// Drop onto a position in the top-to-bottom layers list.
    pub fn drop_on_layer_position(&mut self, display_index: usize) -> bool {
        let target = display_to_storage(self.scene.len(), display_index)
            .and_then(|index| self.scene.elements().get(index))
            .map(Element::id);
        match target {
            Some(target) => self.drop_on_layer(target),
            None => {
                self.cancel_layer_drag();
                false
            }
        }
    }

    pub fn cancel_layer_drag(&mut self) {
        if matches!(self.gesture, Gesture::LayerDrag { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    // --- Selection ---

    /// Select a single element. Returns false for unknown ids.
    pub fn select(&mut self, id: ElementId) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.scene.selection.select(id);
        true
    }

    pub fn add_to_selection(&mut self, id: ElementId) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.scene.selection.add(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.scene.selection.clear();
    }

    pub fn selected(&self) -> Option<&Element> {
        self.scene.first_selected()
    }

    // --- Z-order ---

    pub fn bring_to_front(&mut self) -> bool {
        self.reorder_selected("Bring to front", Scene::bring_to_front)
    }

    pub fn send_to_back(&mut self) -> bool {
        self.reorder_selected("Send to back", Scene::send_to_back)
    }

    pub fn bring_forward(&mut self) -> bool {
        self.reorder_selected("Bring forward", Scene::bring_forward)
    }

    pub fn send_backward(&mut self) -> bool {
        self.reorder_selected("Send backward", Scene::send_backward)
    }

    fn reorder_selected(
        &mut self,
        label: &str,
        op: fn(&mut Scene, ElementId) -> SceneResult<bool>,
    ) -> bool {
        self.finish_gesture();
        let Some(id) = self.scene.selection.first() else {
            return false;
        };
        let result = op(&mut self.scene, id);
        self.commit_if_changed(label, result)
    }

    fn commit_if_changed(&mut self, label: &str, result: SceneResult<bool>) -> bool {
        match result {
            Ok(true) => {
                log::debug!("{label}");
                self.commit();
                true
            }
            Ok(false) => false,
            Err(err) => {
                log::warn!("Ignoring {label}: {err}");
                false
            }
        }
    }

    // --- Deletion ---

    /// Remove every selected element. Returns the number removed.
    pub fn delete_selected(&mut self) -> usize {
        self.finish_gesture();
        let ids = self.scene.selection.ids().to_vec();
        let removed = self.scene.remove(&ids);
        self.scene.selection.clear();
        if !removed.is_empty() {
            log::debug!("Deleted {} element(s)", removed.len());
            self.commit();
        }
        removed.len()
    }

    // --- Property panel ---

    /// Fields the property panel shows for the first selected element.
    pub fn property_fields(&self) -> Vec<PropertyField> {
        self.scene.first_selected().map(property_fields).unwrap_or_default()
    }

    /// Live edit of the first selected element; recorded by the next commit.
    pub fn preview_edit(&mut self, patch: &ElementPatch) -> bool {
        let changed = self.patch_selected(patch);
        if changed {
            self.pending_edit = true;
        }
        changed
    }

    /// Committed edit of the first selected element.
    /// Records once if this edit or an earlier preview changed anything.
    pub fn commit_edit(&mut self, patch: &ElementPatch) -> bool {
        self.finish_gesture();
        let changed = self.patch_selected(patch) || self.pending_edit;
        if changed {
            self.commit();
        }
        changed
    }

    fn patch_selected(&mut self, patch: &ElementPatch) -> bool {
        let Some(id) = self.scene.selection.first() else {
            return false;
        };
        match self.scene.update(id, patch, self.config.min_element_size) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("Ignoring property edit: {err}");
                false
            }
        }
    }

    // --- History ---

    fn commit(&mut self) {
        self.history.record(self.scene.elements());
        self.pending_edit = false;
    }

    /// Restore the previous committed state and clear the selection.
    /// An active gesture or pending preview is committed first.
    pub fn undo(&mut self) -> bool {
        self.settle();
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                log::debug!("Undo ({} left)", self.history.undo_len());
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.settle();
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                log::debug!("Redo ({} left)", self.history.redo_len());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.pending_edit
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn settle(&mut self) {
        self.finish_gesture();
        if self.pending_edit {
            self.commit();
        }
    }

    fn restore(&mut self, elements: Vec<Element>) {
        self.scene.set_elements(elements);
        self.scene.selection.clear();
    }
}
