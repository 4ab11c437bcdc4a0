use log::debug;

use crate::config::{FigureConfig, LineTransform};
use crate::error::Result;
use crate::geometry::{Coord, Line, PointTable};

use super::arm::pts_on_line;
use super::stitch::stitcher;
use super::Figure;

/// A single stitched parabola between two arbitrary lines.
///
/// Endpoints are [`Coord`]s, so interactively dragged points can be shared
/// through a [`PointTable`] while fixed ones stay literal. The first line's
/// arm is always sampled straight; the second honors the config's
/// transform, which is what lets one side of the curve bend while the
/// other stays anchored.
pub struct Parabola {
    config: FigureConfig,
    line1: [Coord; 2],
    line2: [Coord; 2],
}

impl Parabola {
    /// Creates a new `Parabola` composer between two endpoint pairs.
    #[must_use]
    pub fn new(config: FigureConfig, line1: [Coord; 2], line2: [Coord; 2]) -> Self {
        Self {
            config,
            line1,
            line2,
        }
    }

    /// A parabola whose two lines share the middle point.
    #[must_use]
    pub fn from_three_points(config: FigureConfig, points: [Coord; 3]) -> Self {
        Self::new(config, [points[0], points[1]], [points[1], points[2]])
    }

    /// Composes the figure, resolving endpoint references through `table`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the config
    /// fails validation, or
    /// [`GeometryError::UnknownPointRef`](crate::error::GeometryError) if an
    /// endpoint reference is stale.
    pub fn execute(&self, table: &PointTable) -> Result<Figure> {
        self.config.validate()?;

        let line1 = Line::new(
            self.line1[0].resolve(table)?,
            self.line1[1].resolve(table)?,
        );
        let line2 = Line::new(
            self.line2[0].resolve(table)?,
            self.line2[1].resolve(table)?,
        );

        let straight = FigureConfig {
            line_transform: LineTransform::Straight,
            ..self.config.clone()
        };
        let arm1 = pts_on_line(&straight, &line1);
        let arm2 = pts_on_line(&self.config, &line2);

        let segments = stitcher(&arm1, &arm2);
        debug!("parabola: {} segments", segments.len());
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}
