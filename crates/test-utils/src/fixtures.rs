//! Common test fixtures for wind barb tests.
//!
//! Locators paired with the shapes the default symbol set must produce for
//! them, written as `MULTILINESTRING` text.

/// Locators with a known default-profile shape.
pub mod locators {
    pub const NO_DATA: &str = "windbarbs://default(NaN)[kts]";
    pub const CALM: &str = "windbarbs://default(1)[kts]";
    pub const FIVE_KNOTS: &str = "windbarbs://default(3)[kts]";
    pub const FIVE_KNOTS_SOUTH: &str = "windbarbs://default(3)[kts]?emisphere=S";
    pub const FIFTEEN_KNOTS: &str = "windbarbs://default(15)[kts]";
    pub const TWENTY_FIVE_KNOTS: &str = "windbarbs://default(25)[kts]";
    pub const FIFTY_KNOTS: &str = "windbarbs://default(50)[kts]";
}

/// Expected shapes for [`locators`].
pub mod shapes {
    pub const NO_DATA: &str = "MULTILINESTRING ((0 -0, 0 40), (5 45, -5 35), (-5 45, 5 35))";
    pub const FIVE_KNOTS: &str = "MULTILINESTRING ((0 -0, 0 40), (0 35, 10 36.25))";
    pub const FIFTEEN_KNOTS: &str =
        "MULTILINESTRING ((0 -0, 0 40), (0 40, 20 42.5), (0 35, 10 36.25))";
    pub const TWENTY_FIVE_KNOTS: &str =
        "MULTILINESTRING ((0 -0, 0 40), (0 40, 20 42.5), (0 35, 20 37.5), (0 30, 10 31.25))";
    pub const FIFTY_KNOTS: &str = "MULTILINESTRING ((0 -0, 0 40), (0 40, 20 37, 0 34, 0 40))";
}

/// Locator/shape pairs for table-driven tests.
pub const LITERAL_SCENARIOS: &[(&str, &str)] = &[
    (locators::NO_DATA, shapes::NO_DATA),
    (locators::FIVE_KNOTS, shapes::FIVE_KNOTS),
    (locators::FIFTEEN_KNOTS, shapes::FIFTEEN_KNOTS),
    (locators::TWENTY_FIVE_KNOTS, shapes::TWENTY_FIVE_KNOTS),
    (locators::FIFTY_KNOTS, shapes::FIFTY_KNOTS),
];

/// Locators that must never resolve to a shape.
pub const UNRESOLVABLE_LOCATORS: &[&str] = &[
    "windbarbs://pippo(110)[kts]",
    "windbarbs://(110)[kts]",
    "wrong://default(110)[kts]",
    "windbarbs://default(110)",
    "windbarbs://default110[kts]",
    "windbarbs://default(110)[kts]",
    "windbarbs://default(Infinity)[kts]",
    "windbarbs://default(-Infinity)[kts]",
    "windbarbs://default(10)[furlongs]",
    "",
];

/// Default geometry profile values.
pub mod profile {
    pub const VECTOR_LENGTH: f64 = 40.0;
    pub const BASE_PENNANT_LENGTH: f64 = 6.0;
    pub const ELEMENTS_SPACING: f64 = 5.0;
    pub const LONG_BARB_LENGTH: f64 = 20.0;
    pub const SHORT_BARB_LENGTH: f64 = 10.0;
    pub const ZERO_WIND_RADIUS: f64 = 10.0;
}
