//! Eagerly built glyph cache for one symbol set.
//!
//! Every glyph a symbol set can produce is built when the cache is created;
//! afterwards the cache is only read, so a shared reference can be used from
//! any number of threads without locking.

use crate::builder::{GlyphBuilder, GlyphInput};
use crate::classify::{BarbDecomposition, Bucket, FAMILY_STEP_KNOTS};
use crate::definition::WindBarbDefinition;
use crate::glyph::Glyph;

#[derive(Debug, Clone)]
pub struct GlyphCache {
    /// Indexed by `family / FAMILY_STEP_KNOTS`.
    families: Vec<Glyph>,
    calm: Glyph,
    no_data: Glyph,
    max_family: u32,
}

impl GlyphCache {
    /// Build glyphs for `Family(0) ..= Family(max_family)`, calm and no-data.
    pub fn build(definition: &WindBarbDefinition, max_family: u32) -> Self {
        let max_family = max_family - max_family % FAMILY_STEP_KNOTS;
        let families = (0..=max_family)
            .step_by(FAMILY_STEP_KNOTS as usize)
            .filter_map(BarbDecomposition::from_knots)
            .map(|d| GlyphBuilder::new(definition).build(GlyphInput::Barbs(d)))
            .collect();

        Self {
            families,
            calm: GlyphBuilder::new(definition).build(GlyphInput::Calm),
            no_data: GlyphBuilder::new(definition).build(GlyphInput::NoData),
            max_family,
        }
    }

    /// Cached glyph for a bucket; `None` for `Invalid` or a family not in the cache.
    pub fn lookup(&self, bucket: Bucket) -> Option<&Glyph> {
        match bucket {
            Bucket::Calm => Some(&self.calm),
            Bucket::NoData => Some(&self.no_data),
            Bucket::Family(knots) if knots % FAMILY_STEP_KNOTS == 0 => {
                self.families.get((knots / FAMILY_STEP_KNOTS) as usize)
            }
            Bucket::Family(_) | Bucket::Invalid => None,
        }
    }

    /// Largest cached family.
    pub fn max_family(&self) -> u32 {
        self.max_family
    }

    /// Number of cached glyphs, sentinels included.
    pub fn glyph_count(&self) -> usize {
        self.families.len() + 2
    }

    /// Every cached bucket with its glyph, families first.
    pub fn entries(&self) -> impl Iterator<Item = (Bucket, &Glyph)> {
        self.families
            .iter()
            .enumerate()
            .map(|(i, glyph)| (Bucket::Family(i as u32 * FAMILY_STEP_KNOTS), glyph))
            .chain([(Bucket::Calm, &self.calm), (Bucket::NoData, &self.no_data)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::DEFAULT_MAX_FAMILY;
    use crate::glyph::GlyphKind;

    fn default_cache() -> GlyphCache {
        GlyphCache::build(&WindBarbDefinition::default(), DEFAULT_MAX_FAMILY)
    }

    #[test]
    fn test_holds_every_default_bucket() {
        let cache = default_cache();
        assert_eq!(cache.glyph_count(), 21 + 2);
        for knots in (0..=100).step_by(5) {
            assert!(cache.lookup(Bucket::Family(knots)).is_some(), "{} kts", knots);
        }
        assert!(cache.lookup(Bucket::Calm).is_some());
        assert!(cache.lookup(Bucket::NoData).is_some());
    }

    #[test]
    fn test_misses() {
        let cache = default_cache();
        assert!(cache.lookup(Bucket::Invalid).is_none());
        assert!(cache.lookup(Bucket::Family(105)).is_none());
        assert!(cache.lookup(Bucket::Family(12)).is_none());
    }

    #[test]
    fn test_family_glyph_matches_decomposition() {
        let cache = default_cache();
        for (bucket, glyph) in cache.entries() {
            match bucket {
                Bucket::Family(0) => assert_eq!(glyph.kind(), GlyphKind::Calm),
                Bucket::Family(knots) => match glyph.kind() {
                    GlyphKind::Barbs(d) => assert_eq!(d.knots(), knots),
                    other => panic!("unexpected kind {:?} for {} kts", other, knots),
                },
                Bucket::Calm => assert_eq!(glyph.kind(), GlyphKind::Calm),
                Bucket::NoData => assert_eq!(glyph.kind(), GlyphKind::NoData),
                Bucket::Invalid => panic!("invalid bucket cached"),
            }
        }
    }

    #[test]
    fn test_max_family_rounded_down_to_step() {
        let cache = GlyphCache::build(&WindBarbDefinition::default(), 52);
        assert_eq!(cache.max_family(), 50);
        assert_eq!(cache.entries().count(), 11 + 2);
    }
}
