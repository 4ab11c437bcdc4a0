use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given infinite lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)`
/// if the lines are not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection point of the infinite lines through `a0→a1` and `b0→b1`.
///
/// Returns `None` for parallel or coincident lines.
#[must_use]
pub fn lines_intersection_point(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);
    let (t, _) = line_line_intersect_2d(a0, &da, b0, &db)?;
    Some(Point2::new(a0.x + da.x * t, a0.y + da.y * t))
}

/// Linear interpolation between two points: `a + t * (b - a)`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::PointOps;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_diagonals_meet_at_center() {
        let hit = lines_intersection_point(
            &p(0.0, 0.0),
            &p(10.0, 10.0),
            &p(0.0, 10.0),
            &p(10.0, 0.0),
        )
        .unwrap();
        assert!(hit.is_near_within(&p(5.0, 5.0), 1e-9));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let hit = lines_intersection_point(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(0.0, 1.0),
            &p(10.0, 1.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn coincident_lines_do_not_intersect() {
        let hit =
            lines_intersection_point(&p(0.0, 0.0), &p(4.0, 4.0), &p(1.0, 1.0), &p(3.0, 3.0));
        assert!(hit.is_none());
    }

    #[test]
    fn parametric_form_reports_both_parameters() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(2.0, -1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((t - 2.0).abs() < 1e-12);
        assert!((u - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_hits_endpoints_and_middle() {
        let a = p(2.0, 4.0);
        let b = p(6.0, 8.0);
        assert!(lerp(&a, &b, 0.0).is_near_within(&a, 1e-12));
        assert!(lerp(&a, &b, 1.0).is_near_within(&b, 1e-12));
        assert!(lerp(&a, &b, 0.5).is_near_within(&p(4.0, 6.0), 1e-12));
    }
}
