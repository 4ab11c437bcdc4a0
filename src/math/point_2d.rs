use super::{Point2, NEAR_TOLERANCE};

/// Point operations used throughout the stitching kernel.
///
/// Implemented as an extension trait over [`Point2`] so callers keep the
/// plain nalgebra type. Exact equality is `PartialEq` on `Point2`; these
/// methods cover distance, fuzzy equality, and rotation.
pub trait PointOps {
    /// Euclidean distance to another point.
    fn distance_to(&self, other: &Point2) -> f64;

    /// Fuzzy equality within [`NEAR_TOLERANCE`].
    fn is_near(&self, other: &Point2) -> bool;

    /// Fuzzy equality within an explicit tolerance.
    fn is_near_within(&self, other: &Point2, tolerance: f64) -> bool;

    /// Arithmetic mean of the two points' coordinates.
    fn midpoint_between(&self, other: &Point2) -> Point2;

    /// Rotates this point around `center` by `angle` radians.
    ///
    /// Positive angles rotate counter-clockwise in a standard math frame.
    /// Screen coordinate systems with an inverted Y axis will render this
    /// as clockwise; that is a rendering concern, not a geometry one.
    fn rotate_around(&self, center: &Point2, angle: f64) -> Point2;
}

impl PointOps for Point2 {
    fn distance_to(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_near(&self, other: &Point2) -> bool {
        self.is_near_within(other, NEAR_TOLERANCE)
    }

    fn is_near_within(&self, other: &Point2, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }

    fn midpoint_between(&self, other: &Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    fn rotate_around(&self, center: &Point2, angle: f64) -> Point2 {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        let cos = angle.cos();
        let sin = angle.sin();
        Point2::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn distance_is_euclidean() {
        assert_abs_diff_eq!(p(0.0, 0.0).distance_to(&p(3.0, 4.0)), 5.0);
    }

    #[test]
    fn is_near_uses_default_tolerance() {
        assert!(p(0.0, 0.0).is_near(&p(0.0005, 0.0)));
        assert!(!p(0.0, 0.0).is_near(&p(0.002, 0.0)));
    }

    #[test]
    fn midpoint_is_mean() {
        let m = p(0.0, 0.0).midpoint_between(&p(10.0, 4.0));
        assert_abs_diff_eq!(m.x, 5.0);
        assert_abs_diff_eq!(m.y, 2.0);
    }

    #[test]
    fn rotate_quarter_turn_around_origin() {
        let r = p(1.0, 0.0).rotate_around(&p(0.0, 0.0), FRAC_PI_2);
        assert!(r.is_near_within(&p(0.0, 1.0), 1e-12));
    }

    #[test]
    fn rotate_around_offset_center() {
        let r = p(2.0, 1.0).rotate_around(&p(1.0, 1.0), PI);
        assert!(r.is_near_within(&p(0.0, 1.0), 1e-12));
    }

    #[test]
    fn rotation_composes_to_identity() {
        let center = p(3.0, -2.0);
        let original = p(7.5, 4.25);
        let back = original
            .rotate_around(&center, 1.234)
            .rotate_around(&center, -1.234);
        assert!(back.is_near_within(&original, 1e-9));
    }
}
