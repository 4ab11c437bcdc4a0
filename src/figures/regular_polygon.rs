use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_outer};
use super::stitch::stitcher;
use super::Figure;

/// A regular polygon with a stitched parabola spanning every pair of
/// adjacent edges.
pub struct RegularPolygon {
    config: FigureConfig,
}

impl RegularPolygon {
    /// Creates a new `RegularPolygon` composer.
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

        let mut segments = Vec::new();
        for i in 0..arms.len() {
            let j = (i + 1) % arms.len();
            segments.extend(stitcher(&arms[i], &arms[j]));
        }

        debug!(
            "regular polygon: {} nodes, {} segments",
            nodes.len(),
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}
