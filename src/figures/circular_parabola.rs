use log::debug;

use crate::config::FigureConfig;
use crate::error::Result;

use super::nodes::{create_arms, create_nodes, lines_from_nodes_middle, ring};
use super::stitch::stitch_pairwise;
use super::{Arm, Figure};

/// Parabolas swept around a circle, in both directions.
///
/// Spokes provide one side of each stitch; the other side is an arc of a
/// finer node ring (`num_nodes * num_steps` points, sliced per spoke).
/// A second pass with the arcs reversed and cyclically rotated by one
/// position draws the opposite sweep, so the clockwise pattern lines up
/// with the counter-clockwise one.
pub struct CircularParabola {
    config: FigureConfig,
}

impl CircularParabola {
    /// Creates a new `CircularParabola` composer.
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

        let steps = self.config.num_steps;
        if steps == 0 {
            return Ok(Figure::new(Vec::new(), self.config.style.clone()));
        }

        let nodes = create_nodes(&self.config);
        let spokes = lines_from_nodes_middle(&nodes, &self.config.midpoint);
        let spoke_arms = create_arms(&self.config, &spokes);

        // Outer arcs: a finer ring sliced into one chunk per spoke.
        let fine = ring(&self.config, self.config.num_nodes * steps);
        let mut arcs: Vec<Arm> = fine.chunks(steps).map(<[_]>::to_vec).collect();

        // Counter-clockwise sweep.
        let mut segments = stitch_pairwise(&spoke_arms, &arcs);

        // Clockwise sweep: reverse each arc and shift the list by one so
        // the two sweeps stay visually continuous.
        for arc in &mut arcs {
            arc.reverse();
        }
        arcs.rotate_right(1);
        segments.extend(stitch_pairwise(&spoke_arms, &arcs));

        debug!(
            "circular parabola: {} spokes, {} arc points, {} segments",
            spokes.len(),
            fine.len(),
            segments.len()
        );
        Ok(Figure::new(segments, self.config.style.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(num_nodes: usize, num_steps: usize) -> FigureConfig {
        FigureConfig::builder()
            .num_nodes(num_nodes)
            .num_steps(num_steps)
            .build()
            .unwrap()
    }

    #[test]
    fn both_sweeps_are_drawn() {
        // Each sweep stitches num_nodes pairs; the arc side has num_steps
        // points, so each pair yields num_steps - 1 segments.
        for (n, s) in [(4, 20), (6, 8)] {
            let figure = CircularParabola::new(config(n, s)).execute().unwrap();
            assert_eq!(figure.segment_count(), 2 * n * (s - 1));
        }
    }

    #[test]
    fn zero_steps_yields_empty_figure() {
        let figure = CircularParabola::new(config(4, 0)).execute().unwrap();
        assert!(figure.segments.is_empty());
    }

    #[test]
    fn single_step_yields_empty_figure() {
        // One-point arcs cannot be stitched.
        let figure = CircularParabola::new(config(4, 1)).execute().unwrap();
        assert!(figure.segments.is_empty());
    }
}
