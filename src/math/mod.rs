pub mod arc_2d;
pub mod intersect_2d;
pub mod point_2d;

pub use point_2d::PointOps;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Looser tolerance for "visually the same point" proximity queries.
pub const NEAR_TOLERANCE: f64 = 1e-3;
