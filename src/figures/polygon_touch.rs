use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_outer};
use super::stitch::stitcher;
use super::Figure;

/// A regular polygon stitched across non-overlapping edge pairs.
///
/// Edges are paired consecutively (`0-1`, `2-3`, …); with an odd node
/// count the final unpaired edge is left undrawn.
pub struct RegularPolygonTouch {
    config: FigureConfig,
}

impl RegularPolygonTouch {
    /// Creates a new `RegularPolygonTouch` composer.
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
        let arms = create_arms(&self.config, &edges);

        // Round down to an even number of edges.
        let paired = arms.len() & !1;

        let mut segments = Vec::new();
        for i in (0..paired).step_by(2) {
            segments.extend(stitcher(&arms[i], &arms[i + 1]));
        }

        debug!(
            "polygon touch: {} edges ({} paired), {} segments",
            arms.len(),
            paired,
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}
