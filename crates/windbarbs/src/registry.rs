//! Named symbol sets.
//!
//! A symbol set pairs a geometry profile with its eagerly built glyph cache.
//! The process-wide registry holds only `default`; embedders wanting other
//! profiles build their own registry with [`SymbolSetRegistry::with_symbol_set`].

use crate::builder::shaft_extent;
use crate::cache::GlyphCache;
use crate::classify::{
    BarbDecomposition, DEFAULT_MAX_FAMILY, FAMILY_STEP_KNOTS, MAX_SUPPORTED_FAMILY,
};
use crate::definition::WindBarbDefinition;
use crate::error::{BarbError, BarbResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{error, info};

/// Name of the built-in symbol set.
pub const DEFAULT_SYMBOL_SET: &str = "default";

/// Built once on first use; read-only afterwards.
static DEFAULT_REGISTRY: Lazy<SymbolSetRegistry> = Lazy::new(SymbolSetRegistry::new);

/// A geometry profile with its cached glyphs.
#[derive(Debug, Clone)]
pub struct SymbolSet {
    name: String,
    definition: WindBarbDefinition,
    cache: GlyphCache,
}

impl SymbolSet {
    /// Validate the definition and build every glyph up to `max_family`.
    ///
    /// Every family up to `max_family` must fit on the shaft.
    pub fn build(
        name: &str,
        definition: WindBarbDefinition,
        max_family: u32,
    ) -> BarbResult<Self> {
        let invalid = |e: String| BarbError::InvalidDefinition(format!("{}: {}", name, e));
        definition.validate().map_err(invalid)?;

        if max_family > MAX_SUPPORTED_FAMILY {
            return Err(invalid(format!(
                "max family {} exceeds {}",
                max_family, MAX_SUPPORTED_FAMILY
            )));
        }
        for knots in (0..=max_family).step_by(FAMILY_STEP_KNOTS as usize) {
            let Some(d) = BarbDecomposition::from_knots(knots) else {
                continue;
            };
            let extent = shaft_extent(&definition, d);
            if extent > definition.vector_length {
                return Err(invalid(format!(
                    "{} kts needs {} of shaft, vector_length is {}",
                    knots, extent, definition.vector_length
                )));
            }
        }

        let cache = GlyphCache::build(&definition, max_family);
        info!(
            symbol_set = name,
            glyphs = cache.glyph_count(),
            max_family = cache.max_family(),
            "Built wind barb glyph cache"
        );

        Ok(Self {
            name: name.to_lowercase(),
            definition,
            cache,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &WindBarbDefinition {
        &self.definition
    }

    pub fn cache(&self) -> &GlyphCache {
        &self.cache
    }

    pub fn max_family(&self) -> u32 {
        self.cache.max_family()
    }
}

/// Symbol sets by case-insensitive name.
#[derive(Debug, Clone)]
pub struct SymbolSetRegistry {
    sets: HashMap<String, SymbolSet>,
}

impl SymbolSetRegistry {
    /// A registry with no symbol sets.
    pub fn empty() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// A registry holding only the `default` symbol set.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        match SymbolSet::build(
            DEFAULT_SYMBOL_SET,
            WindBarbDefinition::default(),
            DEFAULT_MAX_FAMILY,
        ) {
            Ok(set) => {
                registry.sets.insert(set.name.clone(), set);
            }
            Err(e) => error!(error = %e, "Default wind barb symbol set rejected"),
        }
        registry
    }

    /// The shared process-wide registry.
    pub fn global() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    /// Add (or replace) a named symbol set.
    pub fn with_symbol_set(
        mut self,
        name: &str,
        definition: WindBarbDefinition,
        max_family: u32,
    ) -> BarbResult<Self> {
        let set = SymbolSet::build(name, definition, max_family)?;
        self.sets.insert(set.name.clone(), set);
        Ok(self)
    }

    /// Look up a symbol set by name.
    pub fn get(&self, name: &str) -> BarbResult<&SymbolSet> {
        self.sets
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| BarbError::NotSupported(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SymbolSetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bucket;

    #[test]
    fn test_global_has_default_only() {
        let registry = SymbolSetRegistry::global();
        assert_eq!(registry.names(), vec!["default"]);
        assert!(registry.get("DEFAULT").is_ok());
        assert_eq!(
            registry.get("pippo").unwrap_err(),
            BarbError::NotSupported("pippo".to_string())
        );
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(
            SymbolSetRegistry::global(),
            SymbolSetRegistry::global()
        ));
    }

    #[test]
    fn test_custom_symbol_set() {
        let registry = SymbolSetRegistry::new()
            .with_symbol_set("Large", WindBarbDefinition::new(60.0, 8.0, 6.0, 24.0, 14.0), 150)
            .unwrap();
        let set = registry.get("large").unwrap();
        assert_eq!(set.name(), "large");
        assert_eq!(set.max_family(), 150);
        assert!(set.cache().lookup(Bucket::Family(150)).is_some());
        assert_eq!(registry.names(), vec!["default", "large"]);
    }

    #[test]
    fn test_default_set_is_validated_build() {
        let registry = SymbolSetRegistry::new();
        let set = registry.get(DEFAULT_SYMBOL_SET).unwrap();
        assert_eq!(set.definition(), &WindBarbDefinition::default());
        assert_eq!(set.max_family(), DEFAULT_MAX_FAMILY);
        assert!(SymbolSetRegistry::empty().names().is_empty());
    }

    #[test]
    fn test_oversized_max_family_rejected() {
        for max_family in [MAX_SUPPORTED_FAMILY + 5, u32::MAX] {
            let result = SymbolSetRegistry::new().with_symbol_set(
                "huge",
                WindBarbDefinition::new(10_000.0, 6.0, 5.0, 20.0, 10.0),
                max_family,
            );
            assert!(matches!(result, Err(BarbError::InvalidDefinition(_))));
        }
    }

    #[test]
    fn test_families_must_fit_the_shaft() {
        // 95 kts needs 31 units of shaft
        let short_shaft = WindBarbDefinition::new(20.0, 6.0, 5.0, 20.0, 10.0);
        let result = SymbolSetRegistry::new().with_symbol_set("stubby", short_shaft, 100);
        assert!(matches!(result, Err(BarbError::InvalidDefinition(_))));

        // default shaft is too short for three pennants
        let result =
            SymbolSetRegistry::new().with_symbol_set("fast", WindBarbDefinition::default(), 200);
        assert!(matches!(result, Err(BarbError::InvalidDefinition(_))));

        // but fine up to where the elements still fit
        assert!(SymbolSetRegistry::new()
            .with_symbol_set("stubby", short_shaft, 40)
            .is_ok());
    }

    #[test]
    fn test_invalid_definition_rejected() {
        let result = SymbolSetRegistry::new().with_symbol_set(
            "broken",
            WindBarbDefinition::new(-1.0, 8.0, 6.0, 24.0, 14.0),
            100,
        );
        assert!(matches!(result, Err(BarbError::InvalidDefinition(_))));
    }
}
