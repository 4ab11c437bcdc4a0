use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How sample points are distributed along an ellipse perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpacingMode {
    /// Equal angular increments. Clusters points near the major-axis ends
    /// of an elongated ellipse.
    Angle,
    /// Equal true arc length, via dense chord sampling and binary-search
    /// interpolation.
    #[default]
    ArcLength,
}

/// An axis-extent ellipse in the plane, rotated about its own center.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point2,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates a new ellipse from full extents.
    ///
    /// * `width`/`height` - Full axis extents (must be positive)
    /// * `rotation` - Rotation about the center, radians
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is non-positive.
    pub fn new(center: Point2, width: f64, height: f64, rotation: f64) -> Result<Self> {
        if width < TOLERANCE {
            return Err(GeometryError::Degenerate("ellipse width must be positive".into()).into());
        }
        if height < TOLERANCE {
            return Err(GeometryError::Degenerate("ellipse height must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius_x: width / 2.0,
            radius_y: height / 2.0,
            rotation,
        })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-axis along the (unrotated) X direction.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Returns the semi-axis along the (unrotated) Y direction.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    /// Evaluates the perimeter point at parametric angle `theta`, carried
    /// through the ellipse's own rotation.
    #[must_use]
    pub fn point_at_angle(&self, theta: f64) -> Point2 {
        let raw_x = self.radius_x * theta.cos();
        let raw_y = self.radius_y * theta.sin();
        let cos_r = self.rotation.cos();
        let sin_r = self.rotation.sin();
        Point2::new(
            self.center.x + raw_x * cos_r - raw_y * sin_r,
            self.center.y + raw_x * sin_r + raw_y * cos_r,
        )
    }

    /// Returns `num_points` points around the perimeter.
    ///
    /// `SpacingMode::Angle` spaces by parametric angle; `ArcLength` spaces
    /// by true distance along the curve, which keeps spacing visually even
    /// on elongated ellipses.
    #[must_use]
    pub fn sample(&self, num_points: usize, mode: SpacingMode) -> Vec<Point2> {
        if num_points == 0 {
            return Vec::new();
        }
        match mode {
            SpacingMode::Angle => self.sample_by_angle(num_points),
            SpacingMode::ArcLength => self.sample_by_arc_length(num_points),
        }
    }

    fn sample_by_angle(&self, num_points: usize) -> Vec<Point2> {
        (0..num_points)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = std::f64::consts::TAU * i as f64 / num_points as f64;
                self.point_at_angle(theta)
            })
            .collect()
    }

    fn sample_by_arc_length(&self, num_points: usize) -> Vec<Point2> {
        let dense = 2048.max(num_points * 16);

        // Dense perimeter pass: points plus cumulative chord length.
        let mut sample_points: Vec<Point2> = Vec::with_capacity(dense + 1);
        let mut cumulative = Vec::with_capacity(dense + 1);
        let mut total = 0.0;
        for i in 0..=dense {
            #[allow(clippy::cast_precision_loss)]
            let theta = std::f64::consts::TAU * i as f64 / dense as f64;
            let pt = self.point_at_angle(theta);
            if let Some(prev) = sample_points.last() {
                total += (pt.x - prev.x).hypot(pt.y - prev.y);
            }
            sample_points.push(pt);
            cumulative.push(total);
        }

        #[allow(clippy::cast_precision_loss)]
        let segment = total / num_points as f64;

        (0..num_points)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let target = segment * i as f64;
                point_at_arc_length(target, &cumulative, &sample_points)
            })
            .collect()
    }
}

/// Interpolates the point at `target` arc length along a densely sampled
/// curve.
///
/// Binary-searches `cumulative` (monotonically non-decreasing) for the
/// smallest index `k` with `cumulative[k] >= target`, then lerps between
/// samples `k-1` and `k`. The bracket width gets an epsilon floor so
/// repeated samples cannot divide by zero.
fn point_at_arc_length(target: f64, cumulative: &[f64], samples: &[Point2]) -> Point2 {
    let mut low = 1;
    let mut high = cumulative.len() - 1;
    while low < high {
        let mid = (low + high) / 2;
        if cumulative[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    let k = low;

    let prev_len = cumulative[k - 1];
    let next_len = cumulative[k];
    let prev = samples[k - 1];
    let next = samples[k];

    let t = (target - prev_len) / (next_len - prev_len).max(1e-9);
    Point2::new(prev.x + t * (next.x - prev.x), prev.y + t * (next.y - prev.y))
}
