//! QuickHull engine for 2D point sets.
//!
//! Model
//! - Anchor a baseline between the points of minimum and maximum `x`, then
//!   grow each half-hull by splitting at the farthest point strictly outside
//!   the current segment until no such point remains.
//! - Every terminal segment contributes both endpoints to the hull and itself
//!   to the edge list; shared endpoints are removed by one sort + dedup pass.
//!
//! Output contract
//! - `hull()` is sorted by `(x, y)` and free of repeated coordinates.
//! - `edges()` keeps discovery order and may repeat a segment (degenerate
//!   inputs record the baseline once per side).
//!
//! Code cross-refs: `geom2::{signed_offset, side}`, `output::{write_dot, write_hull}`.

mod engine;

pub use engine::{baseline, canonicalize_hull, x_bounds, HullError, QuickHull};
