//! `MULTILINESTRING` well-known text for glyph geometry.
//!
//! Closed rings are written with their first vertex repeated at the end and,
//! when read back, a linestring of four or more vertices ending on its start
//! becomes a closed ring again.

use crate::glyph::{Point, SubPath};
use std::fmt::Write;
use thiserror::Error;

const MULTILINESTRING: &str = "MULTILINESTRING";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WktError {
    #[error("Expected MULTILINESTRING")]
    NotMultiLineString,

    #[error("Unbalanced parentheses")]
    Unbalanced,

    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

/// Write subpaths as `MULTILINESTRING ((x y, ...), ...)`.
pub fn to_wkt(paths: &[SubPath]) -> String {
    let paths: Vec<&SubPath> = paths.iter().filter(|p| !p.points.is_empty()).collect();
    if paths.is_empty() {
        return format!("{} EMPTY", MULTILINESTRING);
    }

    let mut out = String::from(MULTILINESTRING);
    out.push_str(" (");
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('(');
        let closing = if path.closed { path.points.first() } else { None };
        for (j, p) in path.points.iter().chain(closing).enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}", p.x, p.y);
        }
        out.push(')');
    }
    out.push(')');
    out
}

/// Parse `MULTILINESTRING` text back into subpaths.
pub fn parse_multilinestring(text: &str) -> Result<Vec<SubPath>, WktError> {
    let text = text.trim();
    let body = text
        .get(..MULTILINESTRING.len())
        .filter(|head| head.eq_ignore_ascii_case(MULTILINESTRING))
        .map(|_| text[MULTILINESTRING.len()..].trim())
        .ok_or(WktError::NotMultiLineString)?;

    if body.eq_ignore_ascii_case("EMPTY") {
        return Ok(Vec::new());
    }

    let inner = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .ok_or(WktError::Unbalanced)?;

    let mut paths = Vec::new();
    let mut rest = inner.trim();
    while !rest.is_empty() {
        let open = rest.strip_prefix('(').ok_or(WktError::Unbalanced)?;
        let close = open.find(')').ok_or(WktError::Unbalanced)?;
        paths.push(parse_linestring(&open[..close])?);

        rest = open[close + 1..].trim_start();
        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
            if rest.is_empty() {
                return Err(WktError::Unbalanced);
            }
        } else if !rest.is_empty() {
            return Err(WktError::Unbalanced);
        }
    }
    Ok(paths)
}

fn parse_linestring(text: &str) -> Result<SubPath, WktError> {
    let mut points = text
        .split(',')
        .map(|pair| {
            let mut coords = pair.split_whitespace();
            match (coords.next(), coords.next(), coords.next()) {
                (Some(x), Some(y), None) => {
                    let x = x.parse::<f64>();
                    let y = y.parse::<f64>();
                    match (x, y) {
                        (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
                        _ => Err(WktError::InvalidCoordinate(pair.trim().to_string())),
                    }
                }
                _ => Err(WktError::InvalidCoordinate(pair.trim().to_string())),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() >= 4 && points.first() == points.last() {
        points.pop();
        Ok(SubPath::closed(points))
    } else {
        Ok(SubPath::open(points))
    }
}
