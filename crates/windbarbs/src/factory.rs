//! Symbol resolution pipeline.
//!
//! `parse → convert units → classify → cache lookup → mirror`. Every stage
//! either advances or aborts; [`WindBarbFactory::get_shape`] collapses any
//! abort into `None` after logging the diagnostic, so a bad symbol never
//! interrupts the rendering of other features.

use crate::classify::Bucket;
use crate::error::{BarbError, BarbResult};
use crate::expression::{Feature, SymbolExpression};
use crate::glyph::Glyph;
use crate::locator::SymbolLocator;
use crate::mirror::{mirror, Hemisphere};
use crate::registry::SymbolSetRegistry;
use crate::units::SpeedUnit;
use std::borrow::Cow;
use tracing::{debug, info};

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct ResolvedSymbol<'r> {
    pub locator: SymbolLocator,
    pub knots: f64,
    pub bucket: Bucket,
    pub hemisphere: Hemisphere,
    /// Borrowed from the cache, or owned when mirrored.
    pub glyph: Cow<'r, Glyph>,
}

/// Resolves wind barb locators against a symbol set registry.
#[derive(Debug, Clone, Copy)]
pub struct WindBarbFactory<'r> {
    registry: &'r SymbolSetRegistry,
}

impl Default for WindBarbFactory<'static> {
    fn default() -> Self {
        Self::new(SymbolSetRegistry::global())
    }
}

impl<'r> WindBarbFactory<'r> {
    pub fn new(registry: &'r SymbolSetRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r SymbolSetRegistry {
        self.registry
    }

    /// Shape for a symbol evaluated against a feature, or `None`.
    pub fn get_shape(
        &self,
        symbol: Option<&SymbolExpression>,
        feature: Option<&Feature>,
    ) -> Option<Cow<'r, Glyph>> {
        match self.resolve(symbol, feature) {
            Ok(resolved) => Some(resolved.glyph),
            Err(e) => {
                info!(
                    symbol = ?symbol.map(SymbolExpression::source),
                    error = %e,
                    "Unable to resolve wind barb symbol"
                );
                None
            }
        }
    }

    /// Shape for a literal locator, or `None`.
    pub fn shape(&self, locator: &str) -> Option<Cow<'r, Glyph>> {
        match self.resolve_locator(locator) {
            Ok(resolved) => Some(resolved.glyph),
            Err(e) => {
                info!(locator, error = %e, "Unable to resolve wind barb symbol");
                None
            }
        }
    }

    /// Evaluate `symbol` against `feature` and run the pipeline.
    pub fn resolve(
        &self,
        symbol: Option<&SymbolExpression>,
        feature: Option<&Feature>,
    ) -> BarbResult<ResolvedSymbol<'r>> {
        let symbol = symbol.ok_or(BarbError::MissingSymbol)?;
        let feature = feature.ok_or(BarbError::MissingFeature)?;
        let text = symbol.evaluate(feature)?;
        self.resolve_locator(&text)
    }

    /// Run the pipeline on a locator string.
    pub fn resolve_locator(&self, text: &str) -> BarbResult<ResolvedSymbol<'r>> {
        debug!(locator = text, "Trying to resolve symbol");
        let locator = SymbolLocator::parse(text)?;
        debug!(
            symbol_set = %locator.symbol_set,
            speed = locator.speed,
            unit = %locator.unit,
            "Parsed wind barb locator"
        );

        let knots = SpeedUnit::parse(&locator.unit)?.to_knots(locator.speed);
        self.resolve_knots(locator, knots)
    }

    fn resolve_knots(&self, locator: SymbolLocator, knots: f64) -> BarbResult<ResolvedSymbol<'r>> {
        let set = self.registry.get(&locator.symbol_set)?;

        let bucket = Bucket::classify_with_limit(knots, set.max_family());
        if bucket.is_invalid() {
            return Err(BarbError::OutOfRange { knots });
        }

        let cached = set
            .cache()
            .lookup(bucket)
            .ok_or(BarbError::OutOfRange { knots })?;

        let hemisphere = Hemisphere::from_params(&locator.params);
        let glyph = if hemisphere.is_south() {
            Cow::Owned(mirror(cached))
        } else {
            Cow::Borrowed(cached)
        };
        debug!(knots, ?bucket, ?hemisphere, "Resolved wind barb");

        Ok(ResolvedSymbol {
            locator,
            knots,
            bucket,
            hemisphere,
            glyph,
        })
    }
}
