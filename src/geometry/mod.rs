pub mod ellipse;
pub mod line;
pub mod point_table;

pub use ellipse::{Ellipse, SpacingMode};
pub use line::{Line, LineAnchor};
pub use point_table::{Coord, PointId, PointTable};
