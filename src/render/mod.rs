use crate::error::{ConfigError, Result};
use crate::math::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stroke parameters shared by every segment of a figure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrokeStyle {
    color: String,
    width: f64,
}

impl StrokeStyle {
    /// Creates a new stroke style.
    ///
    /// The color is an opaque name or hex string passed through to the
    /// renderer untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(color: impl Into<String>, width: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(ConfigError::NonPositiveLineWidth { value: width }.into());
        }
        Ok(Self {
            color: color.into(),
            width,
        })
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "black".to_owned(),
            width: 1.0,
        }
    }
}

/// The rendering collaborator injected into figure consumers.
///
/// The kernel knows nothing about the target (canvas, SVG, plotter); it
/// only hands over segments in drawing order. Implementations are passed
/// explicitly; there is no global drawing context.
pub trait Renderer {
    /// Strokes one segment.
    fn draw_segment(&mut self, start: &Point2, end: &Point2, style: &StrokeStyle);
}

/// A [`Renderer`] that records segments instead of drawing them.
///
/// Used by tests and headless consumers.
#[derive(Debug, Default)]
pub struct SegmentBuffer {
    segments: Vec<(Point2, Point2)>,
}

impl SegmentBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded segments, in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[(Point2, Point2)] {
        &self.segments
    }

    /// Number of recorded segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Renderer for SegmentBuffer {
    fn draw_segment(&mut self, start: &Point2, end: &Point2, _style: &StrokeStyle) {
        self.segments.push((*start, *end));
    }
}
