//! Scene model: the ordered element sequence, selection and zoom.

use kurbo::{Point, Rect};
use thiserror::Error;

use crate::catalog::ElementTemplate;
use crate::element::{Element, ElementId, ElementPatch};
use crate::selection::Selection;

/// Scene errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Element not found: {0}")]
    NotFound(ElementId),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// The document being edited.
///
/// `elements` order is z-order: index 0 is bottommost, the last is topmost.
#[derive(Debug, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    /// Currently selected element ids.
    pub selection: Selection,
    /// Uniform canvas scale factor; not part of history.
    zoom: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selection: Selection::new(),
            zoom: 1.0,
        }
    }

    /// Instantiate `template` at `position` on top of the stack.
    pub fn create(
        &mut self,
        template: &ElementTemplate,
        position: Point,
        min_size: f64,
    ) -> ElementId {
        self.insert(Element::from_template(template, position, min_size))
    }

    /// Add an element on top of the stack.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.elements.push(element);
        id
    }

    /// Apply a patch to an element.
    /// Returns whether the element changed.
    pub fn update(
        &mut self,
        id: ElementId,
        patch: &ElementPatch,
        min_size: f64,
    ) -> SceneResult<bool> {
        let element = self.get_mut(id).ok_or(SceneError::NotFound(id))?;
        let before = element.clone();
        element.apply_patch(patch, min_size);
        Ok(*element != before)
    }

    /// Remove elements by id, dropping them from the selection too.
    /// Ids not in the scene are skipped. Returns the removed elements.
    pub fn remove(&mut self, ids: &[ElementId]) -> Vec<Element> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .elements
            .drain(..)
            .partition(|e| ids.contains(&e.id()));
        self.elements = kept;
        for element in &removed {
            self.selection.remove(element.id());
        }
        removed
    }

    /// Move an element to `new_index` in z-order (clamped to the top).
    /// Returns whether the order changed.
    pub fn reorder(&mut self, id: ElementId, new_index: usize) -> SceneResult<bool> {
        let from = self.index_of(id).ok_or(SceneError::NotFound(id))?;
        let element = self.elements.remove(from);
        let to = new_index.min(self.elements.len());
        self.elements.insert(to, element);
        Ok(from != to)
    }

    /// Bring an element to the front (topmost).
    pub fn bring_to_front(&mut self, id: ElementId) -> SceneResult<bool> {
        let top = self.elements.len().saturating_sub(1);
        self.reorder(id, top)
    }

    /// Send an element to the back (bottommost).
    pub fn send_to_back(&mut self, id: ElementId) -> SceneResult<bool> {
        self.reorder(id, 0)
    }

    /// Move an element one layer forward.
    /// Returns false if it was already at the front.
    pub fn bring_forward(&mut self, id: ElementId) -> SceneResult<bool> {
        let pos = self.index_of(id).ok_or(SceneError::NotFound(id))?;
        if pos + 1 < self.elements.len() {
            self.elements.swap(pos, pos + 1);
            return Ok(true);
        }
        Ok(false)
    }

    /// Move an element one layer backward.
    /// Returns false if it was already at the back.
    pub fn send_backward(&mut self, id: ElementId) -> SceneResult<bool> {
        let pos = self.index_of(id).ok_or(SceneError::NotFound(id))?;
        if pos > 0 {
            self.elements.swap(pos, pos - 1);
            return Ok(true);
        }
        Ok(false)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Position of an element in z-order.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Elements in z-order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Replace the whole element sequence (history restore).
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// The element editing operations act on.
    pub fn first_selected(&self) -> Option<&Element> {
        self.selection.first().and_then(|id| self.get(id))
    }

    /// Topmost element under a canvas point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(point))
            .map(Element::id)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom, clamped to `[min, max]`.
    /// Non-finite values and inverted bounds leave the zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f64, min: f64, max: f64) {
        if zoom.is_finite() && min <= max {
            self.zoom = zoom.clamp(min, max);
        }
    }

    /// Bottom edge of the lowest element (0 when empty).
    pub fn max_bottom(&self) -> f64 {
        self.elements.iter().map(|e| e.bounds().y1).fold(0.0, f64::max)
    }

    /// Right edge of the rightmost element (0 when empty).
    pub fn max_right(&self) -> f64 {
        self.elements.iter().map(|e| e.bounds().x1).fold(0.0, f64::max)
    }

    /// Union of all element bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
