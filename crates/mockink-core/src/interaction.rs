//! Interaction state machines: placement, drag, resize and layer reorder.
//!
//! Each machine is idle or active. Placement is armed by a catalog pick and
//! consumed by the next canvas click; the pointer gestures are mutually
//! exclusive and live in [`Gesture`].

use kurbo::{Point, Rect};

use crate::catalog::ElementTemplate;
use crate::element::ElementId;
use crate::selection::{Corner, apply_corner_resize};
use crate::snap::{round_half_up, snap_to_grid};
use crate::transform::CanvasTransform;

/// One-shot placement state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlacementState {
    #[default]
    Idle,
    /// A template is waiting for the next canvas click.
    Armed(ElementTemplate),
}

impl PlacementState {
    pub fn arm(&mut self, template: ElementTemplate) {
        *self = PlacementState::Armed(template);
    }

    pub fn cancel(&mut self) {
        *self = PlacementState::Idle;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, PlacementState::Armed(_))
    }

    pub fn armed_template(&self) -> Option<&ElementTemplate> {
        match self {
            PlacementState::Armed(t) => Some(t),
            PlacementState::Idle => None,
        }
    }

    /// Consume the armed template, returning to idle.
    pub fn take(&mut self) -> Option<ElementTemplate> {
        match std::mem::take(self) {
            PlacementState::Armed(t) => Some(t),
            PlacementState::Idle => None,
        }
    }
}

/// Top-left for a template centered on a canvas-space click.
pub fn placement_origin(click: Point, template: &ElementTemplate) -> Point {
    Point::new(
        round_half_up(click.x - template.width / 2.0),
        round_half_up(click.y - template.height / 2.0),
    )
}

/// An element body drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub element_id: ElementId,
    /// Pointer position at gesture start, client-space.
    pub start_pointer: Point,
    pub original_position: Point,
}

impl DragState {
    pub fn new(element_id: ElementId, start_pointer: Point, original_position: Point) -> Self {
        Self {
            element_id,
            start_pointer,
            original_position,
        }
    }

    /// Grid-snapped position for the current pointer.
    pub fn position_for(
        &self,
        pointer: Point,
        transform: &CanvasTransform,
        grid_size: f64,
    ) -> Point {
        let delta = transform.delta_to_canvas(pointer - self.start_pointer);
        snap_to_grid(self.original_position + delta, grid_size).point
    }
}

/// A corner-handle resize in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    pub element_id: ElementId,
    pub corner: Corner,
    /// Pointer position at gesture start, client-space.
    pub start_pointer: Point,
    pub original_bounds: Rect,
}

impl ResizeState {
    pub fn new(
        element_id: ElementId,
        corner: Corner,
        start_pointer: Point,
        original_bounds: Rect,
    ) -> Self {
        Self {
            element_id,
            corner,
            start_pointer,
            original_bounds,
        }
    }

    /// Clamped bounds for the current pointer.
    pub fn bounds_for(&self, pointer: Point, transform: &CanvasTransform, min_size: f64) -> Rect {
        let delta = transform.delta_to_canvas(pointer - self.start_pointer);
        apply_corner_resize(self.original_bounds, self.corner, delta, min_size)
    }
}

/// The active pointer gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Drag(DragState),
    Resize(ResizeState),
    /// A layers-panel entry is being dragged.
    LayerDrag { element_id: ElementId },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Gesture::Idle => None,
            Gesture::Drag(d) => Some(d.element_id),
            Gesture::Resize(r) => Some(r.element_id),
            Gesture::LayerDrag { element_id } => Some(*element_id),
        }
    }
}

/// Storage index for a position in the top-to-bottom layers list.
pub fn display_to_storage(len: usize, display_index: usize) -> Option<usize> {
    (display_index < len).then(|| len - 1 - display_index)
}
