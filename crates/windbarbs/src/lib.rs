//! Wind barb symbol synthesis.
//!
//! Turns a textual symbol locator such as `windbarbs://default(15)[kts]?hemisphere=s`
//! into an immutable vector glyph:
//! - Locator parsing (scheme, symbol set, speed, unit, query parameters)
//! - Speed normalization to knots
//! - Classification into 5-knot symbol families
//! - Deterministic glyph construction (shaft, pennants, barbs, calm and no-data sentinels)
//! - Eagerly built, read-only glyph caches per symbol set
//! - Southern hemisphere mirroring
//!
//! The glyph is produced in a local frame with the shaft base at the origin and the
//! tip along +Y. Positioning, rotation and painting on a map are left to the caller.

pub mod builder;
pub mod cache;
pub mod classify;
pub mod definition;
pub mod error;
pub mod expression;
pub mod factory;
pub mod glyph;
pub mod locator;
pub mod mirror;
pub mod registry;
pub mod units;
pub mod wkt;

pub use builder::{shaft_extent, GlyphBuilder, GlyphInput};
pub use cache::GlyphCache;
pub use classify::{BarbDecomposition, Bucket, DEFAULT_MAX_FAMILY, MAX_SUPPORTED_FAMILY};
pub use definition::WindBarbDefinition;
pub use error::{BarbError, BarbResult, ParseError};
pub use expression::{Feature, SymbolExpression};
pub use factory::{ResolvedSymbol, WindBarbFactory};
pub use glyph::{Bounds, Glyph, GlyphKind, Point, SubPath};
pub use locator::{SymbolLocator, WINDBARBS_PREFIX, WINDBARBS_SCHEME};
pub use mirror::{mirror, Hemisphere};
pub use registry::{SymbolSet, SymbolSetRegistry, DEFAULT_SYMBOL_SET};
pub use units::{to_knots, SpeedUnit};
