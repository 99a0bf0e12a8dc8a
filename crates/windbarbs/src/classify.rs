//! Classification of speeds (knots) into wind barb symbol families.

use serde::{Deserialize, Serialize};

/// Speeds below this are drawn as calm.
pub const CALM_THRESHOLD_KNOTS: f64 = 3.0;

/// Resolution of a symbol family in knots.
pub const FAMILY_STEP_KNOTS: u32 = 5;

/// Largest family of the default symbol set.
pub const DEFAULT_MAX_FAMILY: u32 = 100;

/// Largest family a symbol set may cache.
pub const MAX_SUPPORTED_FAMILY: u32 = 1000;

pub const PENNANT_KNOTS: u32 = 50;
pub const LONG_BARB_KNOTS: u32 = 10;
pub const SHORT_BARB_KNOTS: u32 = 5;

/// Result of classifying a speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "knots", rename_all = "snake_case")]
pub enum Bucket {
    /// Below 3 knots.
    Calm,
    /// Explicit "no data" (NaN speed).
    NoData,
    /// A 5-knot symbol family, e.g. `Family(15)` for speeds in [13, 18).
    Family(u32),
    /// Infinite speed or beyond the largest supported family.
    Invalid,
}

impl Bucket {
    /// Classify a speed against the default symbol set.
    pub fn classify(knots: f64) -> Self {
        Self::classify_with_limit(knots, DEFAULT_MAX_FAMILY)
    }

    /// Classify a speed against a symbol set whose largest family is `max_family`.
    ///
    /// Speeds in `[3, 8)` snap to the 5-knot family, `[8, 13)` to the 10-knot
    /// family, and so on.
    pub fn classify_with_limit(knots: f64, max_family: u32) -> Self {
        if knots.is_nan() {
            return Self::NoData;
        }
        if knots.is_infinite() {
            return Self::Invalid;
        }
        if knots < CALM_THRESHOLD_KNOTS {
            return Self::Calm;
        }

        let step = FAMILY_STEP_KNOTS as f64;
        let family = step * ((knots - CALM_THRESHOLD_KNOTS) / step + 1.0).floor();
        if family > max_family as f64 {
            Self::Invalid
        } else {
            Self::Family(family as u32)
        }
    }

    /// Barb decomposition for a family bucket.
    pub fn decompose(&self) -> Option<BarbDecomposition> {
        match self {
            Self::Family(knots) => BarbDecomposition::from_knots(*knots),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Count of pennants (50 kts), long barbs (10 kts) and short barbs (5 kts)
/// making up a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BarbDecomposition {
    pub pennants: u32,
    pub long_barbs: u32,
    pub short_barbs: u32,
}

impl BarbDecomposition {
    /// Greedy decomposition (50, then 10, then 5). Only multiples of 5 decompose.
    pub fn from_knots(knots: u32) -> Option<Self> {
        if knots % FAMILY_STEP_KNOTS != 0 {
            return None;
        }

        let pennants = knots / PENNANT_KNOTS;
        let rest = knots - pennants * PENNANT_KNOTS;
        let long_barbs = rest / LONG_BARB_KNOTS;
        let short_barbs = (rest - long_barbs * LONG_BARB_KNOTS) / SHORT_BARB_KNOTS;

        let decomposition = Self {
            pennants,
            long_barbs,
            short_barbs,
        };
        debug_assert_eq!(decomposition.knots(), knots);
        debug_assert!(decomposition.short_barbs <= 1);
        Some(decomposition)
    }

    /// Speed represented by this decomposition.
    pub fn knots(&self) -> u32 {
        self.pennants * PENNANT_KNOTS
            + self.long_barbs * LONG_BARB_KNOTS
            + self.short_barbs * SHORT_BARB_KNOTS
    }

    /// Number of elements drawn on the shaft.
    pub fn element_count(&self) -> u32 {
        self.pennants + self.long_barbs + self.short_barbs
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_no_data() {
        assert_eq!(Bucket::classify(f64::NAN), Bucket::NoData);
    }

    #[test]
    fn test_infinities_are_invalid() {
        assert_eq!(Bucket::classify(f64::INFINITY), Bucket::Invalid);
        assert_eq!(Bucket::classify(f64::NEG_INFINITY), Bucket::Invalid);
    }

    #[test]
    fn test_calm_boundary() {
        assert_eq!(Bucket::classify(0.0), Bucket::Calm);
        assert_eq!(Bucket::classify(2.999999999999), Bucket::Calm);
        assert_eq!(Bucket::classify(3.0), Bucket::Family(5));
    }

    #[test]
    fn test_negative_speed_is_calm() {
        assert_eq!(Bucket::classify(-12.0), Bucket::Calm);
    }

    #[test]
    fn test_family_snapping() {
        assert_eq!(Bucket::classify(7.999), Bucket::Family(5));
        assert_eq!(Bucket::classify(8.0), Bucket::Family(10));
        assert_eq!(Bucket::classify(12.9), Bucket::Family(10));
        assert_eq!(Bucket::classify(13.0), Bucket::Family(15));
        assert_eq!(Bucket::classify(15.0), Bucket::Family(15));
        assert_eq!(Bucket::classify(50.0), Bucket::Family(50));
        assert_eq!(Bucket::classify(102.99), Bucket::Family(100));
    }

    #[test]
    fn test_beyond_max_family_is_invalid() {
        assert_eq!(Bucket::classify(103.0), Bucket::Invalid);
        assert_eq!(Bucket::classify(110.0), Bucket::Invalid);
        assert_eq!(Bucket::classify(f64::MAX), Bucket::Invalid);
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(Bucket::classify_with_limit(110.0, 150), Bucket::Family(110));
        assert_eq!(Bucket::classify_with_limit(48.0, 45), Bucket::Invalid);
    }

    #[test]
    fn test_decomposition_totals() {
        for knots in (0..=DEFAULT_MAX_FAMILY).step_by(5) {
            let d = BarbDecomposition::from_knots(knots).unwrap();
            assert_eq!(
                d.pennants * 50 + d.long_barbs * 10 + d.short_barbs * 5,
                knots
            );
            assert!(d.short_barbs <= 1);
            assert!(d.long_barbs <= 4);
        }
    }

    #[test]
    fn test_decomposition_examples() {
        let d = BarbDecomposition::from_knots(75).unwrap();
        assert_eq!((d.pennants, d.long_barbs, d.short_barbs), (1, 2, 1));

        let d = BarbDecomposition::from_knots(100).unwrap();
        assert_eq!((d.pennants, d.long_barbs, d.short_barbs), (2, 0, 0));

        assert!(BarbDecomposition::from_knots(0).unwrap().is_empty());
        assert!(BarbDecomposition::from_knots(12).is_none());
    }

    #[test]
    fn test_bucket_decompose_only_for_families() {
        assert!(Bucket::Family(35).decompose().is_some());
        assert!(Bucket::Calm.decompose().is_none());
        assert!(Bucket::NoData.decompose().is_none());
        assert!(Bucket::Invalid.decompose().is_none());
    }
}
