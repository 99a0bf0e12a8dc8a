//! Immutable vector glyphs.
//!
//! A glyph is an ordered list of subpaths in a local frame: shaft base at the
//! origin, tip along +Y. Subpaths are open polylines or closed rings; a closed
//! ring stores its vertices once and is implicitly closed back to the first.

use crate::classify::BarbDecomposition;
use serde::Serialize;
use std::fmt::Write;

/// A point in the glyph frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An open polyline or a closed ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl SubPath {
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// A single segment.
    pub fn segment(from: Point, to: Point) -> Self {
        Self::open(vec![from, to])
    }
}

/// What a glyph depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlyphKind {
    Calm,
    NoData,
    Barbs(BarbDecomposition),
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A wind barb shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    kind: GlyphKind,
    paths: Vec<SubPath>,
}

impl Glyph {
    pub fn new(kind: GlyphKind, paths: Vec<SubPath>) -> Self {
        Self { kind, paths }
    }

    pub fn kind(&self) -> GlyphKind {
        self.kind
    }

    pub fn paths(&self) -> &[SubPath] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.iter().all(|p| p.points.is_empty())
    }

    /// All vertices in drawing order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.paths.iter().flat_map(|p| p.points.iter())
    }

    /// Bounding box, `None` for an empty glyph.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let first = points.next()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Largest distance of any vertex from the origin.
    pub fn radius(&self) -> f64 {
        self.points().map(|p| p.x.hypot(p.y)).fold(0.0, f64::max)
    }

    /// New glyph with every vertex transformed by `f`.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        let paths = self
            .paths
            .iter()
            .map(|path| SubPath {
                points: path.points.iter().map(|p| f(*p)).collect(),
                closed: path.closed,
            })
            .collect();
        Self::new(self.kind, paths)
    }

    /// SVG path data in the glyph frame (`M`, `L`, `Z`).
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        for path in &self.paths {
            for (i, p) in path.points.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{}{} {}", command, p.x, p.y);
            }
            if path.closed && !path.points.is_empty() {
                d.push('Z');
            }
        }
        d
    }

    /// Well-known text (`MULTILINESTRING`) representation.
    pub fn to_wkt(&self) -> String {
        crate::wkt::to_wkt(&self.paths)
    }

    /// Same geometry, ignoring the kind tag.
    pub fn same_geometry(&self, paths: &[SubPath]) -> bool {
        self.paths == paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Glyph {
        Glyph::new(
            GlyphKind::Barbs(BarbDecomposition {
                pennants: 1,
                long_barbs: 0,
                short_barbs: 0,
            }),
            vec![
                SubPath::segment(Point::new(0.0, 0.0), Point::new(0.0, 40.0)),
                SubPath::closed(vec![
                    Point::new(0.0, 40.0),
                    Point::new(20.0, 37.0),
                    Point::new(0.0, 34.0),
                ]),
            ],
        )
    }

    #[test]
    fn test_bounds() {
        let b = sample().bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 20.0, 40.0));
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 40.0);
    }

    #[test]
    fn test_empty_glyph_has_no_bounds() {
        let glyph = Glyph::new(GlyphKind::Calm, Vec::new());
        assert!(glyph.is_empty());
        assert!(glyph.bounds().is_none());
        assert_eq!(glyph.radius(), 0.0);
    }

    #[test]
    fn test_svg_path() {
        assert_eq!(sample().to_svg_path(), "M0 0L0 40M0 40L20 37L0 34Z");
    }

    #[test]
    fn test_map_points_keeps_structure() {
        let moved = sample().map_points(|p| Point::new(p.x + 1.0, p.y));
        assert_eq!(moved.kind(), sample().kind());
        assert_eq!(moved.paths().len(), 2);
        assert!(moved.paths()[1].closed);
        assert_eq!(moved.paths()[1].points[1], Point::new(21.0, 37.0));
    }

    #[test]
    fn test_radius() {
        assert_eq!(sample().radius(), 40.0);
    }
}
