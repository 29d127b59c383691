//! Plain-text point reader.
//!
//! Format: lines starting with `#` are comments. The remaining text is a
//! whitespace-separated count `n` followed by `n` records of two reals `x y`.
//! Tokens after the last record are ignored.

use std::io::{BufRead, Read};

use thiserror::Error;

use crate::geom2::Point;

/// A point file that could not be turned into a point sequence.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing point count")]
    MissingCount,
    #[error("invalid point count {token:?}")]
    BadCount { token: String },
    #[error("record {record}: invalid coordinate {token:?}")]
    BadCoordinate { record: usize, token: String },
    #[error("record {record}: coordinates must be finite")]
    NonFinite { record: usize },
    #[error("expected {expected} points, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("reading input")]
    Io(#[from] std::io::Error),
}

/// Drop comment lines; every kept line is newline-terminated.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().filter(|l| !l.starts_with('#')) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Parse comment-free text into points, preserving order and duplicates.
pub fn parse_points(text: &str) -> Result<Vec<Point>, ParseError> {
    let mut tokens = text.split_whitespace();
    let count_tok = tokens.next().ok_or(ParseError::MissingCount)?;
    let n: usize = count_tok.parse().map_err(|_| ParseError::BadCount {
        token: count_tok.to_string(),
    })?;
    let mut points = Vec::with_capacity(n.min(1 << 20));
    for record in 0..n {
        let mut coord = || -> Result<f64, ParseError> {
            let tok = tokens.next().ok_or(ParseError::Truncated {
                expected: n,
                found: record,
            })?;
            tok.parse::<f64>().map_err(|_| ParseError::BadCoordinate {
                record,
                token: tok.to_string(),
            })
        };
        let x = coord()?;
        let y = coord()?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(ParseError::NonFinite { record });
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Read a whole point file: strip comments, then parse.
pub fn read_points<R: BufRead>(mut reader: R) -> Result<Vec<Point>, ParseError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_points(&strip_comments(&raw))
}
