//! Pointer-to-canvas coordinate mapping.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Maps client-space pointer coordinates to canvas-space.
///
/// The canvas is drawn at `canvas_rect` on screen and scaled uniformly by
/// `zoom` around its top-left corner. Stored geometry is always canvas-space;
/// the view applies `zoom` back as a visual scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    /// On-screen bounding rectangle of the canvas in client pixels.
    pub canvas_rect: Rect,
    /// Uniform scale factor of the canvas.
    pub zoom: f64,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::ZERO,
            zoom: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn new(canvas_rect: Rect, zoom: f64) -> Self {
        Self { canvas_rect, zoom }
    }

    /// Get the transform from canvas-space to client-space.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.canvas_rect.origin().to_vec2()) * Affine::scale(self.zoom)
    }

    /// Get the transform from client-space to canvas-space.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.canvas_rect.origin().to_vec2())
    }

    /// `canvasX = (clientX - canvasRect.left) / zoom`, same for Y.
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point::new(
            (client.x - self.canvas_rect.x0) / self.zoom,
            (client.y - self.canvas_rect.y0) / self.zoom,
        )
    }

    /// Convert a canvas point to client coordinates.
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        self.transform() * canvas
    }

    /// Convert a screen-space delta into a canvas-space delta.
    pub fn delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Convert a screen-space length (e.g. a hit tolerance) to canvas units.
    pub fn length_to_canvas(&self, length: f64) -> f64 {
        length / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        let t = CanvasTransform::default();
        let p = t.client_to_canvas(Point::new(100.0, 200.0));
        assert!((p.x - 100.0).abs() < f64::EPSILON);
        assert!((p.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_client_to_canvas_with_offset_and_zoom() {
        let t = CanvasTransform::new(Rect::new(50.0, 100.0, 850.0, 700.0), 2.0);
        let p = t.client_to_canvas(Point::new(150.0, 300.0));
        assert!((p.x - 50.0).abs() < f64::EPSILON);
        assert!((p.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let t = CanvasTransform::new(Rect::new(30.0, -20.0, 500.0, 500.0), 1.5);
        let original = Point::new(123.0, 456.0);
        let canvas = t.client_to_canvas(original);
        let back = t.canvas_to_client(canvas);
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);

        let via_affine = t.inverse_transform() * original;
        assert!((via_affine.x - canvas.x).abs() < 1e-10);
        assert!((via_affine.y - canvas.y).abs() < 1e-10);
    }

    #[test]
    fn test_delta_scaled_by_zoom() {
        let t = CanvasTransform::new(Rect::ZERO, 0.5);
        let d = t.delta_to_canvas(Vec2::new(10.0, -20.0));
        assert!((d.x - 20.0).abs() < f64::EPSILON);
        assert!((d.y + 40.0).abs() < f64::EPSILON);
        assert!((t.length_to_canvas(8.0) - 16.0).abs() < f64::EPSILON);
    }
}
