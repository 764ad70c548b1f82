mod aabb;
pub mod indexing;
pub use aabb::*;

/// Signed pixel coordinate `[x, y]`, used for offset arithmetic
/// where a neighbor may fall off the image.
pub type Coord = nalgebra::Vector2<i32>;

/// Inclusive bounds, one row per axis, columns are `[min, max]`.
pub type Bounds = nalgebra::Matrix2<i32>;
