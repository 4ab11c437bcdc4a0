mod arm;
mod circular_parabola;
mod inverse_star;
mod nodes;
mod parabola;
mod polygon_corner;
mod polygon_touch;
mod regular_polygon;
mod stitch;
mod woven_star;

pub use arm::pts_on_line;
pub use circular_parabola::CircularParabola;
pub use inverse_star::InverseStar;
pub use nodes::{create_arms, create_nodes, lines_from_nodes_middle, lines_from_nodes_outer};
pub use parabola::Parabola;
pub use polygon_corner::RegularPolygonCorner;
pub use polygon_touch::RegularPolygonTouch;
pub use regular_polygon::RegularPolygon;
pub use stitch::stitcher;
pub use woven_star::WovenStar;

use crate::config::FigureConfig;
use crate::error::Result;
use crate::geometry::Line;
use crate::math::Point2;
use crate::render::{Renderer, StrokeStyle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of points sampled along one line, used as one side
/// of a stitched pair.
pub type Arm = Vec<Point2>;

/// The output artifact of a figure composer: stitch segments in drawing
/// order plus the stroke style they share.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Segments in drawing order.
    pub segments: Vec<Line>,
    /// Stroke parameters for every segment.
    pub style: StrokeStyle,
}

impl Figure {
    /// Creates a figure from segments and a style.
    #[must_use]
    pub fn new(segments: Vec<Line>, style: StrokeStyle) -> Self {
        Self { segments, style }
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Strokes every segment, in order, through the given renderer.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for segment in &self.segments {
            renderer.draw_segment(&segment.start, &segment.end, &self.style);
        }
    }
}

/// The node-ring figures this kernel can compose from a [`FigureConfig`]
/// alone.
///
/// [`Parabola`] is not listed; it needs explicit endpoint coordinates on
/// top of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FigureKind {
    RegularPolygon,
    RegularPolygonCorner,
    RegularPolygonTouch,
    InverseStar,
    CircularParabola,
    WovenStar,
}

impl FigureKind {
    /// Composes the figure for this kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the config
    /// fails validation.
    pub fn build(self, config: &FigureConfig) -> Result<Figure> {
        match self {
            Self::RegularPolygon => RegularPolygon::new(config.clone()).execute(),
            Self::RegularPolygonCorner => RegularPolygonCorner::new(config.clone()).execute(),
            Self::RegularPolygonTouch => RegularPolygonTouch::new(config.clone()).execute(),
            Self::InverseStar => InverseStar::new(config.clone()).execute(),
            Self::CircularParabola => CircularParabola::new(config.clone()).execute(),
            Self::WovenStar => WovenStar::new(config.clone()).execute(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::SegmentBuffer;

    #[test]
    fn every_kind_builds_from_defaults() {
        let config = FigureConfig::builder().build().unwrap();
        for kind in [
            FigureKind::RegularPolygon,
            FigureKind::RegularPolygonCorner,
            FigureKind::RegularPolygonTouch,
            FigureKind::InverseStar,
            FigureKind::CircularParabola,
            FigureKind::WovenStar,
        ] {
            let figure = kind.build(&config).unwrap();
            assert!(!figure.segments.is_empty(), "{kind:?} produced nothing");
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_composing() {
        let mut config = FigureConfig::builder().build().unwrap();
        config.num_nodes = 2;
        assert!(FigureKind::RegularPolygon.build(&config).is_err());
    }

    #[test]
    fn render_strokes_every_segment_in_order() {
        let config = FigureConfig::builder().num_steps(5).build().unwrap();
        let figure = FigureKind::InverseStar.build(&config).unwrap();
        let mut buffer = SegmentBuffer::new();
        figure.render(&mut buffer);
        assert_eq!(buffer.len(), figure.segment_count());
        assert_eq!(buffer.segments()[0].0, figure.segments[0].start);
    }
}
