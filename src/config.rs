use crate::error::{ConfigError, Result};
use crate::math::Point2;
use crate::render::StrokeStyle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How [`pts_on_line`](crate::figures::pts_on_line) distributes its samples.
///
/// All angles are radians; the bulge follows the convention of
/// [`math::arc_2d`](crate::math::arc_2d).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineTransform {
    /// Evenly spaced samples from start to end.
    #[default]
    Straight,
    /// The midpoint is deflected perpendicular to the line by
    /// `half_length * sin(angle)`; both endpoints stay fixed.
    FlexAtMiddle { angle: f64 },
    /// The far endpoint is replaced by a point projected from the midpoint
    /// at `base_angle + angle` for half the line's length.
    BendAtMid { angle: f64 },
    /// Samples follow the circular arc from start to end with the given
    /// bulge. A near-zero bulge degrades to `Straight`.
    ArcThrough { bulge: f64 },
}

/// The parameter record controlling a figure's geometry and style.
///
/// Built once through [`FigureConfig::builder`], which merges overrides
/// onto the defaults and validates. Control layers that edit parameters
/// build a fresh snapshot per redraw instead of mutating shared state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FigureConfig {
    /// Center of the drawn figure.
    pub midpoint: Point2,
    /// Node-circle radius before scaling.
    pub radius: f64,
    /// Number of nodes placed around the figure (at least 3).
    pub num_nodes: usize,
    /// Number of interpolation steps per arm; an arm has `num_steps + 1`
    /// points. Zero produces empty figures.
    pub num_steps: usize,
    /// Rotation of the whole node ring, radians.
    pub rotate: f64,
    /// Elliptical distortion along X.
    pub x_scale: f64,
    /// Elliptical distortion along Y.
    pub y_scale: f64,
    /// Arm sampling transform.
    pub line_transform: LineTransform,
    /// Stroke parameters handed to the renderer.
    pub style: StrokeStyle,
}

impl FigureConfig {
    /// Starts a builder preloaded with the defaults: midpoint (200, 200),
    /// radius 200, 4 nodes, 20 steps, no rotation, unit scales, straight
    /// transform, black stroke of width 1.
    #[must_use]
    pub fn builder() -> FigureConfigBuilder {
        FigureConfigBuilder::default()
    }

    /// Checks the record against the composer preconditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for fewer than 3 nodes or a non-positive
    /// radius.
    pub fn validate(&self) -> Result<()> {
        if self.num_nodes < 3 {
            return Err(ConfigError::TooFewNodes {
                actual: self.num_nodes,
            }
            .into());
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius { value: self.radius }.into());
        }
        Ok(())
    }
}

/// Builder for [`FigureConfig`]; `build` validates.
#[derive(Debug, Clone)]
pub struct FigureConfigBuilder {
    config: FigureConfig,
}

impl Default for FigureConfigBuilder {
    fn default() -> Self {
        Self {
            config: FigureConfig {
                midpoint: Point2::new(200.0, 200.0),
                radius: 200.0,
                num_nodes: 4,
                num_steps: 20,
                rotate: 0.0,
                x_scale: 1.0,
                y_scale: 1.0,
                line_transform: LineTransform::Straight,
                style: StrokeStyle::default(),
            },
        }
    }
}

impl FigureConfigBuilder {
    #[must_use]
    pub fn midpoint(mut self, midpoint: Point2) -> Self {
        self.config.midpoint = midpoint;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    #[must_use]
    pub fn num_nodes(mut self, num_nodes: usize) -> Self {
        self.config.num_nodes = num_nodes;
        self
    }

    #[must_use]
    pub fn num_steps(mut self, num_steps: usize) -> Self {
        self.config.num_steps = num_steps;
        self
    }

    /// Rotation of the node ring, radians.
    #[must_use]
    pub fn rotate(mut self, rotate: f64) -> Self {
        self.config.rotate = rotate;
        self
    }

    #[must_use]
    pub fn x_scale(mut self, x_scale: f64) -> Self {
        self.config.x_scale = x_scale;
        self
    }

    #[must_use]
    pub fn y_scale(mut self, y_scale: f64) -> Self {
        self.config.y_scale = y_scale;
        self
    }

    #[must_use]
    pub fn line_transform(mut self, transform: LineTransform) -> Self {
        self.config.line_transform = transform;
        self
    }

    #[must_use]
    pub fn style(mut self, style: StrokeStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Finishes the record.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the merged record fails
    /// [`FigureConfig::validate`].
    pub fn build(self) -> Result<FigureConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
