//! Circular arcs through two points, bulge-encoded.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge > 0`: counter-clockwise arc, center on the left of the chord
//! - `bulge < 0`: clockwise arc, center on the right of the chord
//! - `|bulge| = 1`: semicircle
//!
//! The bulge sign is the tie-break between the two circle centers that fit
//! a chord and radius; there is no arbitrary pick.

use crate::error::{GeometryError, Result};

use super::{Point2, TOLERANCE};

/// Center, radius, start angle, and sweep of the arc from `start` to `end`
/// with the given bulge.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] when the chord has zero length,
/// and [`GeometryError::ZeroVector`] when the bulge is (numerically) zero;
/// a zero bulge is a straight segment, not an arc.
pub fn arc_through(start: &Point2, end: &Point2, bulge: f64) -> Result<(Point2, f64, f64, f64)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let chord_len = dx.hypot(dy);

    if chord_len < TOLERANCE {
        return Err(GeometryError::DegenerateLine.into());
    }
    if bulge.abs() < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }

    let mid_x = (start.x + end.x) * 0.5;
    let mid_y = (start.y + end.y) * 0.5;

    // Left-pointing chord normal; positive bulge puts the center this way.
    let nx = -dy / chord_len;
    let ny = dx / chord_len;

    // Distance from chord midpoint to center, signed by the bulge.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let center = Point2::new(
        mid_x + sagitta_ratio * (chord_len * 0.5) * nx,
        mid_y + sagitta_ratio * (chord_len * 0.5) * ny,
    );

    // r = d*(1+b²)/(4*|b|), from r = d/(2*sin(θ/2)) with θ = 4*atan(b).
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let sweep = 4.0 * bulge.atan();

    Ok((center, radius, start_angle, sweep))
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Samples `steps + 1` points along the arc from `start` to `end`.
///
/// The first and last samples are the exact endpoints. `steps == 0` yields
/// an empty vector, matching the straight-line sampler.
///
/// # Errors
///
/// Propagates the degenerate-chord and zero-bulge errors of [`arc_through`].
pub fn pts_on_arc(start: &Point2, end: &Point2, bulge: f64, steps: usize) -> Result<Vec<Point2>> {
    if steps == 0 {
        return Ok(Vec::new());
    }
    let (center, radius, start_angle, sweep) = arc_through(start, end, bulge)?;

    let mut pts = Vec::with_capacity(steps + 1);
    pts.push(*start);
    for i in 1..steps {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / steps as f64;
        pts.push(arc_point_at(&center, radius, start_angle, sweep, t));
    }
    pts.push(*end);
    Ok(pts)
}
