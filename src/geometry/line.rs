use crate::error::{GeometryError, Result};
use crate::math::{intersect_2d, Point2, PointOps, Vector2, TOLERANCE};

/// Pivot choice for [`Line::rotate_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAnchor {
    Start,
    End,
    Midpoint,
    /// An explicit pivot point.
    At(Point2),
}

/// A directed line segment from `start` to `end`.
///
/// Direction matters: `start → end` defines the orientation used by the
/// perpendicular and rotation operations. The optional label survives
/// reversal and rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
    pub label: Option<String>,
}

impl Line {
    /// Creates a new unlabeled line.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    /// Creates a new labeled line.
    #[must_use]
    pub fn labeled(start: Point2, end: Point2, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: Some(label.into()),
        }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.start.midpoint_between(&self.end)
    }

    /// Translates the segment so its midpoint lands on `new_midpoint`,
    /// preserving length and orientation.
    pub fn move_midpoint_to(&mut self, new_midpoint: &Point2) {
        let current = self.midpoint();
        let dx = new_midpoint.x - current.x;
        let dy = new_midpoint.y - current.y;
        self.start.x += dx;
        self.start.y += dy;
        self.end.x += dx;
        self.end.y += dy;
    }

    /// Returns a new line with swapped endpoints.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            label: self.label.clone(),
        }
    }

    /// Swaps the endpoints in place.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        std::mem::swap(&mut self.start, &mut self.end);
        self
    }

    /// Rotates both endpoints around the chosen anchor.
    #[must_use]
    pub fn rotate_at(&self, anchor: LineAnchor, angle: f64) -> Self {
        let pivot = match anchor {
            LineAnchor::Start => self.start,
            LineAnchor::End => self.end,
            LineAnchor::Midpoint => self.midpoint(),
            LineAnchor::At(pt) => pt,
        };
        self.rotate_around(&pivot, angle)
    }

    /// Rotates both endpoints around an explicit pivot.
    #[must_use]
    pub fn rotate_around(&self, pivot: &Point2, angle: f64) -> Self {
        Self {
            start: self.start.rotate_around(pivot, angle),
            end: self.end.rotate_around(pivot, angle),
            label: self.label.clone(),
        }
    }

    /// New line with `start` fixed and `end` rotated around it.
    #[must_use]
    pub fn rotate_at_start(&self, angle: f64) -> Self {
        Self {
            start: self.start,
            end: self.end.rotate_around(&self.start, angle),
            label: self.label.clone(),
        }
    }

    /// New line with `end` fixed and `start` rotated around it.
    #[must_use]
    pub fn rotate_at_end(&self, angle: f64) -> Self {
        Self {
            start: self.start.rotate_around(&self.end, angle),
            end: self.end,
            label: self.label.clone(),
        }
    }

    /// Moves `end` toward `start` by `amount` absolute distance.
    ///
    /// No clamping: an `amount` larger than the length pushes the endpoint
    /// past `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the endpoints are
    /// coincident.
    pub fn shorten_end(&self, amount: f64) -> Result<Self> {
        let dir = self.unit_from_end_to_start()?;
        Ok(Self {
            start: self.start,
            end: Point2::new(self.end.x + dir.x * amount, self.end.y + dir.y * amount),
            label: self.label.clone(),
        })
    }

    /// Moves `start` toward `end` by `amount` absolute distance.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the endpoints are
    /// coincident.
    pub fn shorten_start(&self, amount: f64) -> Result<Self> {
        let dir = self.unit_from_end_to_start()?;
        Ok(Self {
            start: Point2::new(self.start.x - dir.x * amount, self.start.y - dir.y * amount),
            end: self.end,
            label: self.label.clone(),
        })
    }

    /// Splits the line at its midpoint and rotates the second half by
    /// `angle / 2` around the midpoint.
    ///
    /// The halves are not guaranteed to stay continuous; the gap is the
    /// intended visual bend.
    #[must_use]
    pub fn bend_at_midpoint(&self, angle: f64) -> [Self; 2] {
        let mid = self.midpoint();
        let first = Self::new(self.start, mid);
        let second = Self::new(mid, self.end).rotate_at_start(angle / 2.0);
        [first, second]
    }

    /// Unit-length line from `start`, perpendicular to this line's
    /// direction (90° counter-clockwise).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the endpoints are
    /// coincident.
    pub fn perpendicular(&self) -> Result<Self> {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let mag = dx.hypot(dy);
        if mag < TOLERANCE {
            return Err(GeometryError::DegenerateLine.into());
        }
        let nx = -dy / mag;
        let ny = dx / mag;
        Ok(Self::new(
            self.start,
            Point2::new(self.start.x + nx, self.start.y + ny),
        ))
    }

    /// Line of the given `length` centered at this line's midpoint,
    /// perpendicular to this line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the endpoints are
    /// coincident.
    pub fn perpendicular_at_midpoint(&self, length: f64) -> Result<Self> {
        let mid = self.midpoint();
        let perp = self.perpendicular()?;
        let dx = perp.end.x - perp.start.x;
        let dy = perp.end.y - perp.start.y;
        let half = length / 2.0;
        Ok(Self::new(
            Point2::new(mid.x + dx * half, mid.y + dy * half),
            Point2::new(mid.x - dx * half, mid.y - dy * half),
        ))
    }

    /// Intersection of the infinite lines through both segments.
    ///
    /// Returns `None` for parallel or coincident lines.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> Option<Point2> {
        intersect_2d::lines_intersection_point(&self.start, &self.end, &other.start, &other.end)
    }

    /// Unit vector pointing from `end` toward `start`.
    fn unit_from_end_to_start(&self) -> Result<Vector2> {
        let dx = self.start.x - self.end.x;
        let dy = self.start.y - self.end.y;
        let mag = dx.hypot(dy);
        if mag < TOLERANCE {
            return Err(GeometryError::DegenerateLine.into());
        }
        Ok(Vector2::new(dx / mag, dy / mag))
    }
}
