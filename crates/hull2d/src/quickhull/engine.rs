use thiserror::Error;

use crate::geom2::{distance, lexicographic_cmp, side, Line, Point, Side};

/// Failure to construct a hull.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// No points were given, so there are no x-bounds to anchor the baseline.
    #[error("cannot build a convex hull from an empty point set")]
    EmptyInput,
}

/// Convex hull of a fixed 2D point set, computed once at construction.
///
/// The input sequence is kept verbatim (order and duplicates preserved) and
/// is used to resolve hull edges back to input indices via [`find_index`].
///
/// [`find_index`]: QuickHull::find_index
#[derive(Clone, Debug)]
pub struct QuickHull {
    points: Vec<Point>,
    hull: Vec<Point>,
    edges: Vec<Line>,
}

impl QuickHull {
    /// Take ownership of `points` and run QuickHull to completion.
    pub fn new(points: Vec<Point>) -> Result<Self, HullError> {
        let base = baseline(&points).ok_or(HullError::EmptyInput)?;
        let mut qh = Self {
            points,
            hull: Vec::new(),
            edges: Vec::new(),
        };
        qh.grow(base, Side::Left);
        qh.grow(base, Side::Right);
        canonicalize_hull(&mut qh.hull);
        Ok(qh)
    }

    #[inline]
    pub fn from_points(points: &[Point]) -> Result<Self, HullError> {
        Self::new(points.to_vec())
    }

    /// Input points in their original order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Hull vertices, deduplicated and sorted by `(x, y)`.
    #[inline]
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    /// Boundary segments in discovery order. Not deduplicated.
    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Index of the first input point exactly equal to `p`.
    pub fn find_index(&self, p: &Point) -> Option<usize> {
        self.points.iter().position(|q| q == p)
    }

    /// Each edge as a pair of input indices; `None` where a lookup misses.
    pub fn edge_indices(&self) -> impl Iterator<Item = Option<(usize, usize)>> + '_ {
        self.edges
            .iter()
            .map(|e| Some((self.find_index(&e.a)?, self.find_index(&e.b)?)))
    }

    /// Farthest input point strictly on `side` of `line`. Ties keep the first seen.
    ///
    /// The endpoints of `line` are never candidates: in `f64` the offset of
    /// `line.b` need not be exactly zero.
    pub fn farthest_point(&self, line: &Line, side_wanted: Side) -> Option<Point> {
        self.scan_outside(line, side_wanted, 0..self.points.len()).0
    }

    /// Farthest candidate strictly on `side_wanted` of `line`, plus the indices
    /// of every candidate on that side (input order kept).
    fn scan_outside(
        &self,
        line: &Line,
        side_wanted: Side,
        candidates: impl IntoIterator<Item = usize>,
    ) -> (Option<Point>, Vec<usize>) {
        let mut best: Option<Point> = None;
        let mut max_d = 0.0;
        let mut outside = Vec::new();
        for i in candidates {
            let p = &self.points[i];
            if *p == line.a || *p == line.b || side(line, p) != side_wanted {
                continue;
            }
            outside.push(i);
            let d = distance(line, p);
            if d > max_d {
                max_d = d;
                best = Some(*p);
            }
        }
        (best, outside)
    }

    /// Grow the hull outward from `line` on `side_wanted`.
    ///
    /// Each frame either terminates (no point strictly outside: both endpoints
    /// and the segment are recorded) or splits at the farthest point `f` into
    /// `(a, f)` and `(f, b)`. The points seen outside are handed to at most one
    /// child, so siblings search disjoint sets that never contain `f` again;
    /// there are at most `n` splits even when rounding misclassifies
    /// near-collinear points. Frames live on an explicit stack; the second
    /// child is pushed first so edges come out in depth-first order.
    fn grow(&mut self, line: Line, side_wanted: Side) {
        let all: Vec<usize> = (0..self.points.len()).collect();
        let mut stack = vec![(line, side_wanted, all)];
        while let Some((l, s, candidates)) = stack.pop() {
            match self.scan_outside(&l, s, candidates) {
                (Some(f), outside) => {
                    let left = Line::new(l.a, f);
                    let right = Line::new(f, l.b);
                    let left_side = -side(&left, &l.b);
                    let right_side = -side(&right, &l.a);
                    let (left_set, right_set): (Vec<usize>, Vec<usize>) = outside
                        .into_iter()
                        .partition(|&i| side(&left, &self.points[i]) == left_side);
                    stack.push((right, right_side, right_set));
                    stack.push((left, left_side, left_set));
                }
                (None, _) => {
                    self.hull.push(l.a);
                    self.hull.push(l.b);
                    self.edges.push(l);
                }
            }
        }
    }
}

/// Points with minimum and maximum `x`. The first point reaching a bound
/// keeps it unless strictly exceeded. `None` for an empty slice.
pub fn x_bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    let (mut min_x, mut max_x) = (first, first);
    for p in points {
        if p.x < min_x.x {
            min_x = *p;
        } else if p.x > max_x.x {
            max_x = *p;
        }
    }
    Some((min_x, max_x))
}

/// Initial splitting line `min_x → max_x`.
///
/// When every point shares one `x` the x-bounds collapse onto the first
/// point, which would hide a vertical segment; the anchors then fall back to
/// the lowest and highest point (first seen on ties).
pub fn baseline(points: &[Point]) -> Option<Line> {
    let (min_x, max_x) = x_bounds(points)?;
    if min_x.x != max_x.x {
        return Some(Line::new(min_x, max_x));
    }
    let (mut lo, mut hi) = (min_x, min_x);
    for p in points {
        if p.y < lo.y {
            lo = *p;
        } else if p.y > hi.y {
            hi = *p;
        }
    }
    Some(Line::new(lo, hi))
}

/// Sort by `(x, y)` and drop adjacent exact duplicates.
pub fn canonicalize_hull(hull: &mut Vec<Point>) {
    hull.sort_by(lexicographic_cmp);
    hull.dedup();
}
