use std::f64::consts::FRAC_PI_2;

use crate::config::{FigureConfig, LineTransform};
use crate::geometry::Line;
use crate::math::{arc_2d, Point2, TOLERANCE};

/// Samples `num_steps + 1` points along `line`, applying the config's
/// transform.
///
/// `num_steps == 0` yields an empty arm. The deflected transforms split
/// the steps floor/ceil between the two halves and drop the duplicated
/// middle sample, so every transform yields the same count.
/// An `ArcThrough` whose arc is degenerate (zero bulge or coincident
/// endpoints) falls back to straight sampling.
#[must_use]
pub fn pts_on_line(config: &FigureConfig, line: &Line) -> Vec<Point2> {
    let steps = config.num_steps;
    if steps == 0 {
        return Vec::new();
    }

    match config.line_transform {
        LineTransform::Straight => pts_on_straight(&line.start, &line.end, steps),
        LineTransform::FlexAtMiddle { angle } => {
            // Deflect the midpoint sideways; endpoints stay fixed.
            let mid = line.midpoint();
            let base_angle = (line.end.y - line.start.y).atan2(line.end.x - line.start.x);
            let half_len = line.length() / 2.0;
            let bend = deflect(&mid, base_angle + FRAC_PI_2, half_len * angle.sin());
            join_halves(
                pts_on_straight(&line.start, &bend, steps / 2),
                pts_on_straight(&bend, &line.end, steps.div_ceil(2)),
            )
        }
        LineTransform::BendAtMid { angle } => {
            // The deflected point replaces the far endpoint.
            let mid = line.midpoint();
            let base_angle = (line.end.y - line.start.y).atan2(line.end.x - line.start.x);
            let half_len = line.length() / 2.0;
            let bend = deflect(&mid, base_angle + angle, half_len);
            join_halves(
                pts_on_straight(&line.start, &mid, steps / 2),
                pts_on_straight(&mid, &bend, steps.div_ceil(2)),
            )
        }
        LineTransform::ArcThrough { bulge } => {
            if bulge.abs() < TOLERANCE {
                return pts_on_straight(&line.start, &line.end, steps);
            }
            match arc_2d::pts_on_arc(&line.start, &line.end, bulge, steps) {
                Ok(pts) => pts,
                Err(_) => pts_on_straight(&line.start, &line.end, steps),
            }
        }
    }
}

/// `steps + 1` evenly interpolated points from `p1` to `p2`.
fn pts_on_straight(p1: &Point2, p2: &Point2, steps: usize) -> Vec<Point2> {
    if steps == 0 {
        return vec![*p1];
    }
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / steps as f64;
            Point2::new(p1.x + (p2.x - p1.x) * t, p1.y + (p2.y - p1.y) * t)
        })
        .collect()
}

/// Projects `distance` from `origin` along `angle`.
fn deflect(origin: &Point2, angle: f64, distance: f64) -> Point2 {
    Point2::new(
        origin.x + distance * angle.cos(),
        origin.y + distance * angle.sin(),
    )
}

/// Concatenates two half-arms, dropping the second's duplicated first
/// sample.
fn join_halves(first: Vec<Point2>, second: Vec<Point2>) -> Vec<Point2> {
    let mut pts = first;
    pts.extend(second.into_iter().skip(1));
    pts
}
