//! Tests for end-to-end locator resolution against the default symbol set.
//!
//! Each scenario resolves a locator through the process-wide registry and
//! compares the resulting geometry with its `MULTILINESTRING` oracle.

use test_utils::fixtures::{locators, profile, shapes, LITERAL_SCENARIOS, UNRESOLVABLE_LOCATORS};
use test_utils::{
    assert_approx_eq, assert_coords_approx_eq, family_representatives, out_of_range_speeds,
    speed_sweep,
};
use windbarbs::wkt::parse_multilinestring;
use windbarbs::{
    mirror, BarbError, Bucket, Feature, Glyph, GlyphKind, SymbolExpression, SymbolSetRegistry,
    WindBarbDefinition, WindBarbFactory, DEFAULT_MAX_FAMILY,
};

fn shape(locator: &str) -> Option<Glyph> {
    WindBarbFactory::default()
        .shape(locator)
        .map(|glyph| glyph.into_owned())
}

fn assert_shape(locator: &str, expected: &str) {
    let glyph = shape(locator).unwrap_or_else(|| panic!("no shape for {}", locator));
    let expected_paths = parse_multilinestring(expected).unwrap();
    assert!(
        glyph.same_geometry(&expected_paths),
        "{}\n  got: {}\n want: {}",
        locator,
        glyph.to_wkt(),
        expected
    );
}

// ============================================================================
// Literal scenarios
// ============================================================================

#[test]
fn test_no_data_shape() {
    assert_shape(locators::NO_DATA, shapes::NO_DATA);
    let glyph = shape(locators::NO_DATA).unwrap();
    assert_eq!(glyph.kind(), GlyphKind::NoData);
}

#[test]
fn test_calm_is_round() {
    let glyph = shape(locators::CALM).unwrap();
    assert_eq!(glyph.kind(), GlyphKind::Calm);

    let bounds = glyph.bounds().unwrap();
    assert_approx_eq!(bounds.width(), bounds.height(), 1e-9);
    assert_approx_eq!(bounds.width(), 10.0, 1e-9);
}

#[test]
fn test_five_knots_shape() {
    assert_shape(locators::FIVE_KNOTS, shapes::FIVE_KNOTS);
}

#[test]
fn test_five_knots_southern_hemisphere_is_mirror() {
    let north = shape(locators::FIVE_KNOTS).unwrap();
    let south = shape(locators::FIVE_KNOTS_SOUTH).unwrap();
    assert_eq!(south, mirror(&north));
    assert_ne!(south, north);
}

#[test]
fn test_fifteen_knots_shape() {
    assert_shape(locators::FIFTEEN_KNOTS, shapes::FIFTEEN_KNOTS);
}

#[test]
fn test_twenty_five_knots_shape() {
    assert_shape(locators::TWENTY_FIVE_KNOTS, shapes::TWENTY_FIVE_KNOTS);
}

#[test]
fn test_fifty_knots_shape() {
    assert_shape(locators::FIFTY_KNOTS, shapes::FIFTY_KNOTS);
}

#[test]
fn test_literal_scenarios_round_trip_through_wkt() {
    for (locator, expected) in LITERAL_SCENARIOS {
        let glyph = shape(locator).unwrap();
        let reparsed = parse_multilinestring(&glyph.to_wkt()).unwrap();
        assert!(glyph.same_geometry(&reparsed), "{}", locator);
        assert_shape(locator, expected);
    }
}

// ============================================================================
// No shape
// ============================================================================

#[test]
fn test_unresolvable_locators() {
    for locator in UNRESOLVABLE_LOCATORS {
        assert!(shape(locator).is_none(), "{} should not resolve", locator);
    }
}

#[test]
fn test_missing_symbol_or_feature() {
    let factory = WindBarbFactory::default();
    let symbol = SymbolExpression::literal(locators::FIFTEEN_KNOTS);
    let feature = Feature::new();

    assert!(factory.get_shape(None, Some(&feature)).is_none());
    assert!(factory.get_shape(Some(&symbol), None).is_none());
    assert!(factory.get_shape(None, None).is_none());
    assert!(factory.get_shape(Some(&symbol), Some(&feature)).is_some());
}

#[test]
fn test_expression_driven_by_feature() {
    let factory = WindBarbFactory::default();
    let symbol =
        SymbolExpression::parse("windbarbs://default(${speed})[${unit}]?hemisphere=${hemi}")
            .unwrap();

    let feature = Feature::new()
        .with("speed", 25)
        .with("unit", "kts")
        .with("hemi", "n");
    let glyph = factory.get_shape(Some(&symbol), Some(&feature)).unwrap();
    let expected = parse_multilinestring(shapes::TWENTY_FIVE_KNOTS).unwrap();
    assert!(glyph.same_geometry(&expected));

    // attribute missing from the feature
    let partial = Feature::new().with("speed", 25);
    assert!(factory.get_shape(Some(&symbol), Some(&partial)).is_none());
}

// ============================================================================
// Classification boundaries
// ============================================================================

#[test]
fn test_calm_boundary() {
    assert_eq!(Bucket::classify(2.999999999999), Bucket::Calm);
    assert_eq!(Bucket::classify(3.0), Bucket::Family(5));
}

#[test]
fn test_sentinels_and_rejections() {
    assert_eq!(Bucket::classify(f64::NAN), Bucket::NoData);
    assert_eq!(Bucket::classify(110.0), Bucket::Invalid);
    assert_eq!(Bucket::classify(f64::INFINITY), Bucket::Invalid);
    assert_eq!(Bucket::classify(f64::NEG_INFINITY), Bucket::Invalid);

    let no_data = shape(locators::NO_DATA).unwrap();
    let calm = shape(locators::CALM).unwrap();
    assert!(!no_data.is_empty());
    assert_ne!(no_data, calm);
}

#[test]
fn test_decomposition_totals() {
    for (knots, speed) in family_representatives(DEFAULT_MAX_FAMILY) {
        let bucket = Bucket::classify(speed);
        assert_eq!(bucket, Bucket::Family(knots));

        let d = bucket.decompose().unwrap();
        assert_eq!(d.knots(), knots);
        assert!(d.long_barbs <= 4);
        assert!(d.short_barbs <= 1);
    }
}

#[test]
fn test_unit_conversion_end_to_end() {
    // 7.7 m/s ~ 14.97 kts
    let glyph = shape("windbarbs://default(7.7)[m/s]").unwrap();
    let expected = parse_multilinestring(shapes::FIFTEEN_KNOTS).unwrap();
    assert!(glyph.same_geometry(&expected));

    assert!(shape("windbarbs://default(NaN)[m/s]").is_some());
    assert!(shape("windbarbs://default(Infinity)[km/h]").is_none());
}

#[test]
fn test_out_of_range_speeds_have_no_shape() {
    let factory = WindBarbFactory::default();
    let symbol = SymbolExpression::parse("windbarbs://default(${speed})[kts]").unwrap();

    for speed in out_of_range_speeds(DEFAULT_MAX_FAMILY) {
        let feature = Feature::new().with("speed", speed);
        assert!(
            matches!(
                factory.resolve(Some(&symbol), Some(&feature)),
                Err(BarbError::OutOfRange { .. })
            ),
            "{} kts",
            speed
        );
        assert!(factory.get_shape(Some(&symbol), Some(&feature)).is_none());
    }
}

#[test]
fn test_speed_sweep_families_never_decrease() {
    let factory = WindBarbFactory::default();
    let mut previous = 0;

    for speed in speed_sweep(0.0, 102.75, 0.25) {
        let resolved = factory
            .resolve_locator(&format!("windbarbs://default({})[kts]", speed))
            .unwrap();
        let family = match resolved.bucket {
            Bucket::Calm => 0,
            Bucket::Family(knots) => knots,
            other => panic!("{} kts classified as {:?}", speed, other),
        };
        assert!(family >= previous && family - previous <= 5, "{} kts", speed);
        previous = family;
    }
    assert_eq!(previous, DEFAULT_MAX_FAMILY);
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn test_default_profile_values() {
    let def = *SymbolSetRegistry::global()
        .get("default")
        .unwrap()
        .definition();
    assert_eq!(def.vector_length, profile::VECTOR_LENGTH);
    assert_eq!(def.base_pennant_length, profile::BASE_PENNANT_LENGTH);
    assert_eq!(def.elements_spacing, profile::ELEMENTS_SPACING);
    assert_eq!(def.long_barb_length, profile::LONG_BARB_LENGTH);
    assert_eq!(def.short_barb_length, profile::SHORT_BARB_LENGTH);
    assert_eq!(def.zero_wind_radius, profile::ZERO_WIND_RADIUS);
}

#[test]
fn test_custom_profile_geometry() {
    let registry = SymbolSetRegistry::new()
        .with_symbol_set(
            "tall",
            WindBarbDefinition::new(80.0, 6.0, 5.0, 20.0, 10.0),
            150,
        )
        .unwrap();
    let factory = WindBarbFactory::new(&registry);

    let glyph = factory.shape("windbarbs://tall(15)[kts]").unwrap();
    let paths = glyph.paths();
    assert_eq!(paths.len(), 3);
    assert_coords_approx_eq!((paths[0].points[1].x, paths[0].points[1].y), (0.0, 80.0), 1e-9);
    assert_coords_approx_eq!((paths[1].points[1].x, paths[1].points[1].y), (20.0, 82.5), 1e-9);
    assert_coords_approx_eq!((paths[2].points[0].x, paths[2].points[0].y), (0.0, 75.0), 1e-9);
    assert_coords_approx_eq!((paths[2].points[1].x, paths[2].points[1].y), (10.0, 76.25), 1e-9);

    // mirrored in the southern hemisphere
    let south = factory.shape("windbarbs://tall(15)[kts]?hemisphere=S").unwrap();
    let tip = south.paths()[1].points[1];
    assert_coords_approx_eq!((tip.x, tip.y), (-20.0, 82.5), 1e-9);
}

// ============================================================================
// Cache properties
// ============================================================================

#[test]
fn test_mirror_idempotence_for_every_cached_glyph() {
    let set = SymbolSetRegistry::global().get("default").unwrap();
    for (bucket, glyph) in set.cache().entries() {
        assert_eq!(&mirror(&mirror(glyph)), glyph, "{:?}", bucket);
    }
}

#[test]
fn test_repeated_resolution_is_stable() {
    let factory = WindBarbFactory::default();
    let first = factory.shape(locators::FIFTY_KNOTS).unwrap();
    let second = factory.shape(locators::FIFTY_KNOTS).unwrap();
    assert!(std::ptr::eq(&*first, &*second));
}
