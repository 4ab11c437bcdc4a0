use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;
use crate::geometry::Line;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_outer};
use super::stitch::stitcher;
use super::Figure;

/// A regular polygon with a corner-cutting parabola at every node.
///
/// Each edge is bisected at its midpoint; every half-arm is stitched
/// against the half-arm immediately before it in sequence (wrapping), so
/// the curves sit in the corners instead of spanning whole edges.
pub struct RegularPolygonCorner {
    config: FigureConfig,
}

impl RegularPolygonCorner {
    /// Creates a new `RegularPolygonCorner` composer.
    #[must_use]
    pub fn new(config: FigureConfig) -> Self {
        Self { config }
    }

    /// Composes the figure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the config
    /// fails validation.
    pub fn execute(&self) -> Result<Figure> {
        self.config.validate()?;

        let nodes = create_nodes(&self.config);
        let edges = lines_from_nodes_outer(&nodes);

        let mut half_lines = Vec::with_capacity(edges.len() * 2);
        for edge in &edges {
            let mid = edge.midpoint();
            half_lines.push(Line::new(edge.start, mid));
            half_lines.push(Line::new(mid, edge.end));
        }

        let arms = create_arms(&self.config, &half_lines);

        let mut segments = Vec::new();
        for i in (0..arms.len()).step_by(2) {
            let prev = if i == 0 { arms.len() - 1 } else { i - 1 };
            segments.extend(stitcher(&arms[i], &arms[prev]));
        }

        debug!(
            "polygon corner: {} half-edges, {} segments",
            half_lines.len(),
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, PointOps};

    fn config(num_nodes: usize, num_steps: usize) -> FigureConfig {
        FigureConfig::builder()
            .midpoint(Point2::new(0.0, 0.0))
            .radius(100.0)
            .num_nodes(num_nodes)
            .num_steps(num_steps)
            .build()
            .unwrap()
    }

    #[test]
    fn one_parabola_per_corner() {
        for (n, s) in [(3, 10), (5, 20)] {
            let figure = RegularPolygonCorner::new(config(n, s)).execute().unwrap();
            assert_eq!(figure.segment_count(), n * s);
        }
    }

    #[test]
    fn first_parabola_spans_the_wraparound_corner() {
        // The first stitched pair is (first half of edge 0, second half of
        // the last edge), the corner at node 0.
        let cfg = config(4, 10);
        let figure = RegularPolygonCorner::new(cfg.clone()).execute().unwrap();
        let nodes = create_nodes(&cfg);
        assert!(figure.segments[0].start.is_near_within(&nodes[0], 1e-9));
    }

    #[test]
    fn zero_steps_yields_empty_figure() {
        let figure = RegularPolygonCorner::new(config(4, 0)).execute().unwrap();
        assert!(figure.segments.is_empty());
    }
}
