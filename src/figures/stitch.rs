use crate::geometry::Line;
use crate::math::Point2;

use super::Arm;

/// Pairs two arms into the connecting segments that create the
/// curve-stitch envelope.
///
/// The arms are ordered so the first is the shorter (swapped if needed),
/// then each point `i` on the shorter arm connects to point `i + 1` on the
/// longer: the offset-by-one pairing whose envelope reads as a parabola.
/// Returns `short.len() - 1` segments; fewer than 2 points on either arm
/// yields none.
#[must_use]
pub fn stitcher(arm_a: &[Point2], arm_b: &[Point2]) -> Vec<Line> {
    let (short, long) = if arm_a.len() > arm_b.len() {
        (arm_b, arm_a)
    } else {
        (arm_a, arm_b)
    };
    if short.len() < 2 {
        return Vec::new();
    }
    (0..short.len() - 1)
        .map(|i| Line::new(short[i], long[i + 1]))
        .collect()
}

/// Stitches two arm lists pairwise, flattened in order.
///
/// The shorter list leads, as with individual arms.
pub(super) fn stitch_pairwise(arms_a: &[Arm], arms_b: &[Arm]) -> Vec<Line> {
    let (lead, trail) = if arms_a.len() > arms_b.len() {
        (arms_b, arms_a)
    } else {
        (arms_a, arms_b)
    };
    lead.iter()
        .zip(trail)
        .flat_map(|(a, b)| stitcher(a, b))
        .collect()
}
