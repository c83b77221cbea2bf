pub mod arc_2d;
pub mod tangent;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Threshold below which slopes and angle spans count as degenerate.
pub const EPSILON: f64 = 1e-6;
