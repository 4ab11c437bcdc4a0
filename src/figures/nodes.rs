use crate::config::FigureConfig;
use crate::geometry::Line;
use crate::math::Point2;

use super::{pts_on_line, Arm};

/// Places the config's `num_nodes` points evenly around the (scaled,
/// rotated) node circle, in increasing-angle order.
#[must_use]
pub fn create_nodes(config: &FigureConfig) -> Vec<Point2> {
    ring(config, config.num_nodes)
}

/// Node ring with an explicit count, for figures that need a finer ring
/// than the configured one.
pub(super) fn ring(config: &FigureConfig, count: usize) -> Vec<Point2> {
    let mut nodes = Vec::with_capacity(count);
    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let angle = std::f64::consts::TAU * i as f64 / count as f64 + config.rotate;

        // Circular coordinates before elliptical distortion.
        let dx = angle.cos() * config.radius;
        let dy = angle.sin() * config.radius;

        nodes.push(Point2::new(
            config.midpoint.x + dx * config.x_scale,
            config.midpoint.y + dy * config.y_scale,
        ));
    }
    nodes
}

/// One spoke per node: `center → node`.
#[must_use]
pub fn lines_from_nodes_middle(nodes: &[Point2], center: &Point2) -> Vec<Line> {
    nodes.iter().map(|node| Line::new(*center, *node)).collect()
}

/// One edge per adjacent node pair, wrapping the last back to the first.
#[must_use]
pub fn lines_from_nodes_outer(nodes: &[Point2]) -> Vec<Line> {
    (0..nodes.len())
        .map(|i| Line::new(nodes[i], nodes[(i + 1) % nodes.len()]))
        .collect()
}

/// Samples an arm along each line.
#[must_use]
pub fn create_arms(config: &FigureConfig, lines: &[Line]) -> Vec<Arm> {
    lines.iter().map(|line| pts_on_line(config, line)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::math::PointOps;

    fn config(num_nodes: usize, radius: f64) -> FigureConfig {
        FigureConfig::builder()
            .midpoint(Point2::new(0.0, 0.0))
            .radius(radius)
            .num_nodes(num_nodes)
            .build()
            .unwrap()
    }

    #[test]
    fn node_count_matches_config() {
        for n in [3, 4, 7, 16] {
            assert_eq!(create_nodes(&config(n, 100.0)).len(), n);
        }
    }

    #[test]
    fn triangle_nodes_land_on_known_coordinates() {
        let nodes = create_nodes(&config(3, 10.0));
        assert!(nodes[0].is_near_within(&Point2::new(10.0, 0.0), 1e-6));
        assert!(nodes[1].is_near_within(&Point2::new(-5.0, 8.660_254), 1e-6));
        assert!(nodes[2].is_near_within(&Point2::new(-5.0, -8.660_254), 1e-6));
    }

    #[test]
    fn angular_separation_is_uniform() {
        let nodes = create_nodes(&config(5, 100.0));
        let step = TAU / 5.0;
        for (i, node) in nodes.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64;
            let expected = Point2::new(100.0 * angle.cos(), 100.0 * angle.sin());
            assert!(node.is_near_within(&expected, 1e-9));
        }
    }

    #[test]
    fn rotate_offsets_every_node() {
        let rotated = FigureConfig::builder()
            .midpoint(Point2::new(0.0, 0.0))
            .radius(10.0)
            .num_nodes(4)
            .rotate(TAU / 8.0)
            .build()
            .unwrap();
        let nodes = create_nodes(&rotated);
        let d = 10.0 * (TAU / 8.0).cos();
        assert!(nodes[0].is_near_within(&Point2::new(d, d), 1e-9));
    }

    #[test]
    fn scales_distort_the_ring() {
        let squashed = FigureConfig::builder()
            .midpoint(Point2::new(0.0, 0.0))
            .radius(10.0)
            .num_nodes(4)
            .x_scale(2.0)
            .y_scale(0.5)
            .build()
            .unwrap();
        let nodes = create_nodes(&squashed);
        assert!(nodes[0].is_near_within(&Point2::new(20.0, 0.0), 1e-9));
        assert!(nodes[1].is_near_within(&Point2::new(0.0, 5.0), 1e-9));
    }

    #[test]
    fn spokes_run_center_to_node() {
        let nodes = create_nodes(&config(4, 100.0));
        let center = Point2::new(0.0, 0.0);
        let spokes = lines_from_nodes_middle(&nodes, &center);
        assert_eq!(spokes.len(), 4);
        for (spoke, node) in spokes.iter().zip(&nodes) {
            assert_eq!(spoke.start, center);
            assert_eq!(spoke.end, *node);
        }
    }

    #[test]
    fn outer_edges_wrap_around() {
        let nodes = create_nodes(&config(4, 100.0));
        let edges = lines_from_nodes_outer(&nodes);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start, nodes[3]);
        assert_eq!(edges[3].end, nodes[0]);
    }

    #[test]
    fn arms_have_one_point_per_step_plus_one() {
        let cfg = config(4, 100.0);
        let nodes = create_nodes(&cfg);
        let arms = create_arms(&cfg, &lines_from_nodes_outer(&nodes));
        assert_eq!(arms.len(), 4);
        for arm in &arms {
            assert_eq!(arm.len(), cfg.num_steps + 1);
        }
    }
}
