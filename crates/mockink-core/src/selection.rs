//! Selection set and resize handle system.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};

/// Ordered set of selected element ids.
///
/// Editing operations act on the first id only; further ids are visual.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single element (clears previous selection).
    pub fn select(&mut self, id: ElementId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Add to selection, keeping the current first element.
    pub fn add(&mut self, id: ElementId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn remove(&mut self, id: ElementId) {
        self.ids.retain(|&s| s != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The element editing operations act on.
    pub fn first(&self) -> Option<ElementId> {
        self.ids.first().copied()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    /// Resize handles are shown on every selected element.
    pub fn shows_handles(&self, id: ElementId) -> bool {
        self.contains(id)
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Compass name used as a CSS class suffix by views.
    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "nw",
            Corner::TopRight => "ne",
            Corner::BottomLeft => "sw",
            Corner::BottomRight => "se",
        }
    }

    /// Whether dragging this corner moves the left edge.
    fn moves_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether dragging this corner moves the top edge.
    fn moves_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// A resize handle with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// Check if a canvas point hits this handle.
    /// `tolerance` should be adjusted for zoom.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point.x - self.position.x).abs() <= tolerance
            && (point.y - self.position.y).abs() <= tolerance
    }
}

/// The four corner handles of an element.
pub fn resize_handles(element: &Element) -> [Handle; 4] {
    let b = element.bounds();
    [
        Handle::new(Point::new(b.x0, b.y0), Corner::TopLeft),
        Handle::new(Point::new(b.x1, b.y0), Corner::TopRight),
        Handle::new(Point::new(b.x0, b.y1), Corner::BottomLeft),
        Handle::new(Point::new(b.x1, b.y1), Corner::BottomRight),
    ]
}

/// Find which corner handle (if any) is hit at the given point.
pub fn hit_test_handles(element: &Element, point: Point, tolerance: f64) -> Option<Corner> {
    resize_handles(element)
        .into_iter()
        .find(|h| h.hit_test(point, tolerance))
        .map(|h| h.corner)
}

/// Resize `original` by dragging `corner` by `delta`.
///
/// Each axis is clamped independently to `min_size` and the corner
/// opposite the dragged one stays where it was. Not grid-snapped.
pub fn apply_corner_resize(original: Rect, corner: Corner, delta: Vec2, min_size: f64) -> Rect {
    let (width, x0) = if corner.moves_left() {
        let width = (original.width() - delta.x).max(min_size);
        (width, original.x1 - width)
    } else {
        ((original.width() + delta.x).max(min_size), original.x0)
    };
    let (height, y0) = if corner.moves_top() {
        let height = (original.height() - delta.y).max(min_size);
        (height, original.y1 - height)
    } else {
        ((original.height() + delta.y).max(min_size), original.y0)
    };
    Rect::new(x0, y0, x0 + width, y0 + height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_template;
    use crate::element::ElementKind;
    use uuid::Uuid;

    #[test]
    fn test_first_selection_semantics() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut sel = Selection::new();
        assert!(sel.first().is_none());

        sel.select(a);
        sel.add(b);
        sel.add(b);
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.first(), Some(a));
        assert!(sel.shows_handles(b));

        sel.select(b);
        assert_eq!(sel.ids(), &[b]);

        sel.add(a);
        sel.remove(b);
        assert_eq!(sel.first(), Some(a));
    }

    #[test]
    fn test_handles_at_corners() {
        let el = Element::from_template(
            &builtin_template(ElementKind::Box),
            Point::new(10.0, 20.0),
            20.0,
        );
        let handles = resize_handles(&el);
        assert_eq!(handles[0].corner, Corner::TopLeft);
        assert!((handles[3].position.x - 210.0).abs() < f64::EPSILON);
        assert!((handles[3].position.y - 120.0).abs() < f64::EPSILON);

        assert_eq!(hit_test_handles(&el, Point::new(212.0, 118.0), 5.0), Some(Corner::BottomRight));
        assert_eq!(hit_test_handles(&el, Point::new(100.0, 70.0), 5.0), None);
    }

    #[test]
    fn test_bottom_right_resize_grows() {
        let r = apply_corner_resize(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Corner::BottomRight,
            Vec2::new(50.0, 25.0),
            20.0,
        );
        assert!((r.x0 - 0.0).abs() < f64::EPSILON);
        assert!((r.width() - 150.0).abs() < f64::EPSILON);
        assert!((r.height() - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_left_resize_keeps_bottom_right() {
        let r = apply_corner_resize(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Corner::TopLeft,
            Vec2::new(30.0, -10.0),
            20.0,
        );
        assert!((r.x1 - 100.0).abs() < f64::EPSILON);
        assert!((r.y1 - 100.0).abs() < f64::EPSILON);
        assert!((r.width() - 70.0).abs() < f64::EPSILON);
        assert!((r.height() - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_right_and_bottom_left_anchor_opposites() {
        let original = Rect::new(10.0, 10.0, 110.0, 60.0);

        let tr = apply_corner_resize(original, Corner::TopRight, Vec2::new(10.0, 10.0), 20.0);
        assert!((tr.x0 - 10.0).abs() < f64::EPSILON);
        assert!((tr.y1 - 60.0).abs() < f64::EPSILON);
        assert!((tr.width() - 110.0).abs() < f64::EPSILON);
        assert!((tr.height() - 40.0).abs() < f64::EPSILON);

        let bl = apply_corner_resize(original, Corner::BottomLeft, Vec2::new(-20.0, 5.0), 20.0);
        assert!((bl.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bl.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bl.width() - 120.0).abs() < f64::EPSILON);
        assert!((bl.height() - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_never_below_minimum() {
        let original = Rect::new(0.0, 0.0, 100.0, 100.0);
        for corner in Corner::ALL {
            for delta in [
                Vec2::new(1e6, 1e6),
                Vec2::new(-1e6, -1e6),
                Vec2::new(1e6, -1e6),
                Vec2::new(-1e6, 1e6),
            ] {
                let r = apply_corner_resize(original, corner, delta, 20.0);
                assert!(r.width() >= 20.0, "{corner:?} {delta:?}");
                assert!(r.height() >= 20.0, "{corner:?} {delta:?}");
            }
        }
    }

    #[test]
    fn test_clamped_top_left_stays_anchored() {
        let r = apply_corner_resize(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Corner::TopLeft,
            Vec2::new(500.0, 500.0),
            20.0,
        );
        assert!((r.x0 - 80.0).abs() < f64::EPSILON);
        assert!((r.y0 - 80.0).abs() < f64::EPSILON);
        assert!((r.x1 - 100.0).abs() < f64::EPSILON);
    }
}
