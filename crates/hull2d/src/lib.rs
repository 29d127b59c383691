//! QuickHull convex hulls for 2D point sets.
//!
//! Layers (leaves first)
//! - `geom2`: `Point`/`Line`/`Side` and the exact side-of-line predicates.
//! - `quickhull`: the hull engine (`QuickHull`), owning the input points and
//!   the accumulated hull vertices and boundary edges.
//! - `input`/`output`: the plain-text point format and the graph/hull writers
//!   used by the `quickhull` binary.

pub mod geom2;
pub mod input;
pub mod output;
pub mod quickhull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Line, Point, Side};
pub use quickhull::{HullError, QuickHull};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{distance, side, signed_offset, Line, Point, Side};
    pub use crate::input::{parse_points, read_points, strip_comments, ParseError};
    pub use crate::output::{write_dot, write_hull, FormatCfg};
    pub use crate::quickhull::{HullError, QuickHull};
}
