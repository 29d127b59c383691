//! Text serializers for a computed hull.
//!
//! - `write_dot`: undirected graph with one pinned node per input point and
//!   one edge per recorded hull segment (Graphviz `neato -n` friendly).
//! - `write_hull`: hull size followed by the hull points, tab-separated.
//!
//! Coordinates are right-aligned to `FormatCfg::width` with
//! `FormatCfg::precision` decimals.

use std::io::{self, Write};

use crate::geom2::Point;
use crate::quickhull::QuickHull;

/// Numeric layout for coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatCfg {
    pub width: usize,
    pub precision: usize,
}

impl Default for FormatCfg {
    fn default() -> Self {
        Self {
            width: 3,
            precision: 0,
        }
    }
}

impl FormatCfg {
    #[inline]
    fn coord(&self, v: f64) -> String {
        format!("{:>w$.p$}", v, w = self.width, p = self.precision)
    }
}

/// Write the graph description. Returns the number of edges skipped
/// because an endpoint was not found among the input points.
pub fn write_dot<W: Write>(qh: &QuickHull, out: &mut W, cfg: FormatCfg) -> io::Result<usize> {
    writeln!(out, "graph{{")?;
    writeln!(out)?;
    for (i, p) in qh.points().iter().enumerate() {
        writeln!(out, " {} [pos = \"{},{}!\"]", i, cfg.coord(p.x), cfg.coord(p.y))?;
    }
    let mut skipped = 0;
    for pair in qh.edge_indices() {
        match pair {
            Some((i, j)) => writeln!(out, " {} -- {}", i, j)?,
            None => skipped += 1,
        }
    }
    writeln!(out, "}}")?;
    Ok(skipped)
}

/// Write the hull size, then one `x<TAB>y` line per hull point.
pub fn write_hull<W: Write>(qh: &QuickHull, out: &mut W, cfg: FormatCfg) -> io::Result<()> {
    write_points(qh.hull(), out, cfg)
}

fn write_points<W: Write>(points: &[Point], out: &mut W, cfg: FormatCfg) -> io::Result<()> {
    writeln!(out, "{}", points.len())?;
    for p in points {
        writeln!(out, "{}\t{}", cfg.coord(p.x), cfg.coord(p.y))?;
    }
    Ok(())
}
