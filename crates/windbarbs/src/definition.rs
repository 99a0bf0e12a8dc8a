//! Geometry profile of a wind barb symbol set.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VECTOR_LENGTH: f64 = 40.0;
pub const DEFAULT_BASE_PENNANT_LENGTH: f64 = 6.0;
pub const DEFAULT_ELEMENTS_SPACING: f64 = 5.0;
pub const DEFAULT_BARB_LENGTH: f64 = 20.0;
pub const DEFAULT_ZERO_WIND_RADIUS: f64 = 10.0;

/// Structural values used to build wind barbs (all in glyph units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindBarbDefinition {
    /// Length of the shaft.
    pub vector_length: f64,

    /// Length of the pennant base along the shaft.
    pub base_pennant_length: f64,

    /// Bare shaft left between successive elements.
    pub elements_spacing: f64,

    /// Length of a long (10 kts) barb.
    pub long_barb_length: f64,

    /// Length of a short (5 kts) barb, half a long barb.
    pub short_barb_length: f64,

    /// Diameter of the calm circle.
    pub zero_wind_radius: f64,
}

impl WindBarbDefinition {
    /// Create a definition; the short barb is always half the long barb.
    pub fn new(
        vector_length: f64,
        base_pennant_length: f64,
        elements_spacing: f64,
        long_barb_length: f64,
        zero_wind_radius: f64,
    ) -> Self {
        Self {
            vector_length,
            base_pennant_length,
            elements_spacing,
            long_barb_length,
            short_barb_length: long_barb_length / 2.0,
            zero_wind_radius,
        }
    }

    /// Check every length is finite and positive, and the short barb is
    /// half the long barb.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("vector_length", self.vector_length),
            ("base_pennant_length", self.base_pennant_length),
            ("elements_spacing", self.elements_spacing),
            ("long_barb_length", self.long_barb_length),
            ("short_barb_length", self.short_barb_length),
            ("zero_wind_radius", self.zero_wind_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be finite and positive, got {}", name, value));
            }
        }

        let half_long = self.long_barb_length / 2.0;
        if (self.short_barb_length - half_long).abs() > half_long * 1e-9 {
            return Err(format!(
                "short_barb_length must be half of long_barb_length ({}), got {}",
                half_long, self.short_barb_length
            ));
        }
        Ok(())
    }
}

impl Default for WindBarbDefinition {
    fn default() -> Self {
        Self::new(
            DEFAULT_VECTOR_LENGTH,
            DEFAULT_BASE_PENNANT_LENGTH,
            DEFAULT_ELEMENTS_SPACING,
            DEFAULT_BARB_LENGTH,
            DEFAULT_ZERO_WIND_RADIUS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let def = WindBarbDefinition::default();
        assert_eq!(def.vector_length, 40.0);
        assert_eq!(def.long_barb_length, 20.0);
        assert_eq!(def.short_barb_length, 10.0);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_lengths() {
        let mut def = WindBarbDefinition::default();
        def.elements_spacing = 0.0;
        assert!(def.validate().is_err());

        let def = WindBarbDefinition::new(f64::NAN, 6.0, 5.0, 20.0, 10.0);
        assert!(def.validate().unwrap_err().contains("vector_length"));
    }

    #[test]
    fn test_validate_short_barb_is_half_long() {
        let mut def = WindBarbDefinition::default();
        def.short_barb_length = 12.0;
        assert!(def.validate().unwrap_err().contains("short_barb_length"));

        let json = r#"{
            "vector_length": 40.0,
            "base_pennant_length": 6.0,
            "elements_spacing": 5.0,
            "long_barb_length": 20.0,
            "short_barb_length": 15.0,
            "zero_wind_radius": 10.0
        }"#;
        let def: WindBarbDefinition = serde_json::from_str(json).unwrap();
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "vector_length": 60.0,
            "base_pennant_length": 8.0,
            "elements_spacing": 6.0,
            "long_barb_length": 24.0,
            "short_barb_length": 12.0,
            "zero_wind_radius": 14.0
        }"#;
        let def: WindBarbDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def, WindBarbDefinition::new(60.0, 8.0, 6.0, 24.0, 14.0));
    }
}
