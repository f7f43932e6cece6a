//! Grid snapping for placement and drag results.

use kurbo::Point;

/// Grid size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate moved.
    pub snapped_x: bool,
    /// Whether the Y coordinate moved.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Round to the nearest integer, with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Quantize a single value to the nearest multiple of `grid_size`.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    round_half_up(value / grid_size) * grid_size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> SnapResult {
    let x = snap_value(point.x, grid_size);
    let y = snap_value(point.y, grid_size);

    SnapResult {
        point: Point::new(x, y),
        snapped_x: (x - point.x).abs() > f64::EPSILON,
        snapped_y: (y - point.y).abs() > f64::EPSILON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_value() {
        assert!((snap_value(29.0, GRID_SIZE) - 20.0).abs() < f64::EPSILON);
        assert!((snap_value(31.0, GRID_SIZE) - 40.0).abs() < f64::EPSILON);
        assert!((snap_value(-29.0, GRID_SIZE) + 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_halves_round_up() {
        assert!((round_half_up(-0.5) - 0.0).abs() < f64::EPSILON);
        assert!((round_half_up(-1.5) + 1.0).abs() < f64::EPSILON);
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((snap_value(-10.0, GRID_SIZE) - 0.0).abs() < f64::EPSILON);
        assert!((snap_value(-30.0, GRID_SIZE) + 20.0).abs() < f64::EPSILON);
        assert!((snap_value(10.0, GRID_SIZE) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_to_grid() {
        let result = snap_to_grid(Point::new(47.0, 60.0), GRID_SIZE);
        assert!((result.point.x - 40.0).abs() < f64::EPSILON);
        assert!((result.point.y - 60.0).abs() < f64::EPSILON);
        assert!(result.snapped_x);
        assert!(!result.snapped_y);
        assert!(result.is_snapped());
    }

    #[test]
    fn test_zero_grid_is_identity() {
        assert!((snap_value(13.3, 0.0) - 13.3).abs() < f64::EPSILON);
        assert!(!SnapResult::none(Point::new(1.0, 2.0)).is_snapped());
    }
}
