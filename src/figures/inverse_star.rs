use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_middle};
use super::stitch::stitcher;
use super::Figure;

/// A star stitched from the center outward.
///
/// Each spoke's arm is stitched against the *reverse* of the next spoke's
/// arm; the reversal is what makes the curves bow inward instead of
/// outward.
pub struct InverseStar {
    config: FigureConfig,
}

impl InverseStar {
    /// Creates a new `InverseStar` composer.
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
        let spokes = lines_from_nodes_middle(&nodes, &self.config.midpoint);
        let arms = create_arms(&self.config, &spokes);

        let mut segments = Vec::new();
        for i in 0..arms.len() {
            let j = (i + 1) % arms.len();
            let mut neighbor = arms[j].clone();
            neighbor.reverse();
            segments.extend(stitcher(&arms[i], &neighbor));
        }

        debug!(
            "inverse star: {} spokes, {} segments",
            spokes.len(),
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}
