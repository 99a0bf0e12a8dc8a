//! Deterministic glyph construction.
//!
//! The shaft runs from the origin to `(0, vector_length)`. Elements are laid
//! out walking from the tip toward the origin in the order pennants, long
//! barbs, short barb, with `elements_spacing` of bare shaft between two
//! successive elements:
//!
//! ```text
//!   tip  (0,40) ●──────── long barb  (0 40, 20 42.5)
//!               │
//!        (0,35) ●──── short barb     (0 35, 10 36.25)
//!               │
//!               │
//!  base  (0,0)  ●
//! ```
//!
//! Barbs lean toward the tip by one eighth of their length. A pennant is a
//! triangle whose base (`base_pennant_length`) lies on the shaft and whose
//! apex sits `long_barb_length` off the shaft, level with the middle of the base.

use crate::classify::BarbDecomposition;
use crate::definition::WindBarbDefinition;
use crate::glyph::{Glyph, GlyphKind, Point, SubPath};
use std::f64::consts::TAU;

/// Rise of a barb's free end toward the tip, relative to its length.
const BARB_RISE_RATIO: f64 = 0.125;

/// Vertices of the closed ring approximating the calm circle.
const CALM_CIRCLE_SEGMENTS: usize = 36;

/// What to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphInput {
    Barbs(BarbDecomposition),
    Calm,
    NoData,
}

/// Builds one glyph from a definition. All state is local to the builder.
pub struct GlyphBuilder<'a> {
    definition: &'a WindBarbDefinition,
    paths: Vec<SubPath>,
}

impl<'a> GlyphBuilder<'a> {
    pub fn new(definition: &'a WindBarbDefinition) -> Self {
        Self {
            definition,
            paths: Vec::new(),
        }
    }

    /// Build the glyph for `input`. An empty decomposition draws calm.
    pub fn build(self, input: GlyphInput) -> Glyph {
        match input {
            GlyphInput::Calm => self.calm(),
            GlyphInput::NoData => self.no_data(),
            GlyphInput::Barbs(d) if d.is_empty() => self.calm(),
            GlyphInput::Barbs(d) => self.barbs(d),
        }
    }

    fn calm(mut self) -> Glyph {
        let radius = self.definition.zero_wind_radius / 2.0;
        let ring = (0..CALM_CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f64 / CALM_CIRCLE_SEGMENTS as f64;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        self.paths.push(SubPath::closed(ring));
        Glyph::new(GlyphKind::Calm, self.paths)
    }

    fn no_data(mut self) -> Glyph {
        self.shaft();

        // X centered on the tip
        let tip = self.definition.vector_length;
        let half = self.definition.zero_wind_radius / 2.0;
        self.paths.push(SubPath::segment(
            Point::new(half, tip + half),
            Point::new(-half, tip - half),
        ));
        self.paths.push(SubPath::segment(
            Point::new(-half, tip + half),
            Point::new(half, tip - half),
        ));
        Glyph::new(GlyphKind::NoData, self.paths)
    }

    fn barbs(mut self, decomposition: BarbDecomposition) -> Glyph {
        let def = self.definition;
        self.shaft();

        let (elements, _) = layout(def, decomposition);
        for (element, offset) in elements {
            match element {
                Element::Pennant => self.pennant(offset),
                Element::LongBarb => self.barb(offset, def.long_barb_length),
                Element::ShortBarb => self.barb(offset, def.short_barb_length),
            }
        }

        Glyph::new(GlyphKind::Barbs(decomposition), self.paths)
    }

    fn shaft(&mut self) {
        self.paths.push(SubPath::segment(
            Point::new(0.0, 0.0),
            Point::new(0.0, self.definition.vector_length),
        ));
    }

    /// Pennant starting `offset` below the tip.
    fn pennant(&mut self, offset: f64) {
        let def = self.definition;
        let top = def.vector_length - offset;
        let half_base = def.base_pennant_length / 2.0;
        self.paths.push(SubPath::closed(vec![
            Point::new(0.0, top),
            Point::new(def.long_barb_length, top - half_base),
            Point::new(0.0, top - def.base_pennant_length),
        ]));
    }

    /// Barb of `length` anchored `offset` below the tip.
    fn barb(&mut self, offset: f64, length: f64) {
        let anchor = self.definition.vector_length - offset;
        self.paths.push(SubPath::segment(
            Point::new(0.0, anchor),
            Point::new(length, anchor + length * BARB_RISE_RATIO),
        ));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Pennant,
    LongBarb,
    ShortBarb,
}

/// Elements in drawing order with their offsets from the tip, and the
/// length of shaft they occupy in total.
fn layout(def: &WindBarbDefinition, d: BarbDecomposition) -> (Vec<(Element, f64)>, f64) {
    // A lone short barb is kept off the tip
    let lone_short = d.pennants == 0 && d.long_barbs == 0;
    let mut cursor = ShaftCursor::new(
        if lone_short { def.elements_spacing } else { 0.0 },
        def.elements_spacing,
    );

    let elements = std::iter::repeat(Element::Pennant)
        .take(d.pennants as usize)
        .chain(std::iter::repeat(Element::LongBarb).take(d.long_barbs as usize))
        .chain(std::iter::repeat(Element::ShortBarb).take(d.short_barbs as usize))
        .map(|element| {
            let extent = match element {
                Element::Pennant => def.base_pennant_length,
                Element::LongBarb | Element::ShortBarb => 0.0,
            };
            (element, cursor.place(extent))
        })
        .collect();

    (elements, cursor.position)
}

/// Length of shaft, measured from the tip, that a decomposition occupies.
///
/// A glyph fits its profile when this does not exceed `vector_length`.
pub fn shaft_extent(definition: &WindBarbDefinition, decomposition: BarbDecomposition) -> f64 {
    layout(definition, decomposition).1
}

/// Walks down the shaft from the tip, leaving `spacing` between elements.
struct ShaftCursor {
    position: f64,
    spacing: f64,
    started: bool,
}

impl ShaftCursor {
    fn new(start: f64, spacing: f64) -> Self {
        Self {
            position: start,
            spacing,
            started: false,
        }
    }

    /// Reserve `extent` of shaft for the next element; returns its offset from the tip.
    fn place(&mut self, extent: f64) -> f64 {
        if self.started {
            self.position += self.spacing;
        }
        self.started = true;
        let offset = self.position;
        self.position += extent;
        offset
    }
}
