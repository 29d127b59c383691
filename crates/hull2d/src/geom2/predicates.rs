use super::types::{Line, Point, Side};

/// Implicit line equation `A x + B y − C` evaluated at `p`.
///
/// `A = b.y − a.y`, `B = a.x − b.x`, `C = A a.x + B a.y`. The value is
/// proportional to the signed perpendicular distance of `p` from the line
/// through `a → b`; it is exactly zero on the line and for every `p` when
/// the line is degenerate.
#[inline]
pub fn signed_offset(line: &Line, p: &Point) -> f64 {
    let a = line.b.y - line.a.y;
    let b = line.a.x - line.b.x;
    let c = a * line.a.x + b * line.a.y;
    a * p.x + b * p.y - c
}

/// Unnormalized distance, only meaningful for comparisons against the same line.
#[inline]
pub fn distance(line: &Line, p: &Point) -> f64 {
    signed_offset(line, p).abs()
}

/// Side of `p` relative to `line`, no epsilon.
#[inline]
pub fn side(line: &Line, p: &Point) -> Side {
    Side::from_sign(signed_offset(line, p))
}
