use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_middle, lines_from_nodes_outer};
use super::stitch::stitch_pairwise;
use super::Figure;

/// Spokes woven against the outer rim, swept in both directions.
///
/// The first pass stitches each spoke's arm against its edge's arm; the
/// second reverses every rim edge and cyclically rotates the edge list by
/// one before stitching again, mirroring the sweep so the two layers
/// interleave.
pub struct WovenStar {
    config: FigureConfig,
}

impl WovenStar {
    /// Creates a new `WovenStar` composer.
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
        let mut rim = lines_from_nodes_outer(&nodes);

        let spoke_arms = create_arms(&self.config, &spokes);
        let rim_arms = create_arms(&self.config, &rim);

        let mut segments = stitch_pairwise(&spoke_arms, &rim_arms);

        // Opposite sweep: walk each rim edge backwards and shift the edge
        // list by one so the weave closes on itself.
        for edge in &mut rim {
            edge.reverse_in_place();
        }
        let mut reversed_arms = create_arms(&self.config, &rim);
        reversed_arms.rotate_right(1);
        segments.extend(stitch_pairwise(&spoke_arms, &reversed_arms));

        debug!(
            "woven star: {} spokes, {} segments",
            spokes.len(),
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}
