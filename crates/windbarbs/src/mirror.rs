//! Southern hemisphere mirroring.
//!
//! Barbs are drawn on the right of the shaft in the northern hemisphere and
//! on the left in the southern one. Mirroring reflects a glyph across the
//! shaft axis (x → -x).

use crate::glyph::{Glyph, Point};
use std::collections::HashMap;

/// Query keys selecting the hemisphere. `emisphere` is the legacy spelling.
const HEMISPHERE_KEYS: [&str; 2] = ["hemisphere", "emisphere"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    /// Southern when any hemisphere key is `s`/`S`; northern otherwise.
    ///
    /// Keys are expected lower-cased, as stored by the locator parser.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let south = HEMISPHERE_KEYS.iter().any(|key| {
            params
                .get(*key)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("s"))
        });
        if south {
            Self::South
        } else {
            Self::North
        }
    }

    pub fn is_south(&self) -> bool {
        matches!(self, Self::South)
    }
}

/// Reflect a glyph across its shaft axis.
pub fn mirror(glyph: &Glyph) -> Glyph {
    glyph.map_points(|p| Point::new(-p.x, p.y))
}
