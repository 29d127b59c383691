//! 2D primitives for the QuickHull engine.
//!
//! Purpose
//! - Value types `Point`, `Line`, `Side` and the pure predicates built on
//!   them (`signed_offset`, `distance`, `side`).
//! - Arithmetic is exact in the sense that no tolerance is applied: a point is
//!   `On` a line only when the offset is exactly `0.0`. Nearly collinear
//!   floating-point input can therefore classify either way.
//!
//! Code cross-refs: `quickhull::QuickHull`, `rand::draw_points`.

mod predicates;
pub mod rand;
mod types;

pub use predicates::{distance, side, signed_offset};
pub use types::{lexicographic_cmp, Line, Point, Side};
