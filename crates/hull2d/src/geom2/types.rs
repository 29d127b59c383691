//! Basic 2D types used by the hull engine.
//!
//! - `Point`: a finite coordinate pair, compared exactly (no tolerance).
//! - `Line`: directed segment `a → b`; direction decides the sign of `Side`.
//! - `Side`: half-plane classification relative to a directed line.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Directed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Both endpoints coincide; no point can lie strictly off such a line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Which half-plane a point occupies relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = -1,
    On = 0,
    Right = 1,
}

impl Side {
    /// Strict sign test: only an exact zero maps to `On`.
    #[inline]
    pub fn from_sign(v: f64) -> Self {
        if v < 0.0 {
            Side::Left
        } else if v > 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }
    /// Opposite half-plane; `On` stays `On`.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::On => Side::On,
            Side::Right => Side::Left,
        }
    }
}

impl std::ops::Neg for Side {
    type Output = Side;
    #[inline]
    fn neg(self) -> Side {
        self.flip()
    }
}

/// Order by `x`, then `y`. Total for finite coordinates; `-0.0 == 0.0`.
#[inline]
pub fn lexicographic_cmp(p: &Point, q: &Point) -> Ordering {
    match p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
