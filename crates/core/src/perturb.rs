//! Diagonal noise displacement of points.

use crate::field::NoiseField;
use crate::geometry::Point;

/// Displaces `point` along the diagonal by the field value under it.
///
/// `dr = field.value_at(round(x), round(y)) * scale` is added to both `x`
/// and `y`. The field clamps the rounded coordinates, so points near or past
/// the canvas edge read the nearest edge sample.
pub fn perturb(point: Point, field: &NoiseField, scale: f64) -> Point {
    let dr = field.value_at(point.x.round() as i64, point.y.round() as i64) * scale;
    point + Point::splat(dr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_equal_on_both_axes() {
        let field = NoiseField::constant(10, 10, 0.5).unwrap();
        let p = perturb(Point::new(3.0, 4.0), &field, 3.0);
        assert_eq!(p, Point::new(4.5, 5.5));
    }

    #[test]
    fn samples_at_rounded_coordinates() {
        // Column x holds value x.
        let data = (0..4).flat_map(|_| (0..4).map(|x| x as f64)).collect();
        let field = NoiseField::from_data(4, 4, data).unwrap();
        let p = perturb(Point::new(1.6, 0.2), &field, 1.0);
        assert!(p.abs_diff_eq(Point::new(3.6, 2.2), 1e-12), "got {p}");
    }

    #[test]
    fn zero_scale_is_identity() {
        let field = NoiseField::seamless(16, 16, 1).unwrap();
        let p = Point::new(7.25, 9.5);
        assert_eq!(perturb(p, &field, 0.0), p);
    }

    #[test]
    fn off_canvas_points_use_edge_samples() {
        let data = (0..9).map(|i| i as f64).collect();
        let field = NoiseField::from_data(3, 3, data).unwrap();
        let p = perturb(Point::new(-40.0, 99.0), &field, 1.0);
        // Clamped to (0, 2), which holds 6.
        assert_eq!(p, Point::new(-34.0, 105.0));
    }

    #[test]
    fn non_finite_points_do_not_panic() {
        let field = NoiseField::constant(4, 4, 1.0).unwrap();
        let p = perturb(Point::new(f64::NAN, f64::INFINITY), &field, 1.0);
        assert!(p.x.is_nan());
    }
}
