//! Speed normalization to knots.
//!
//! The common tokens (`kn`, `kts`, `knots`, `m/s`, `km/h`, `mph`) are matched
//! directly. Anything else is resolved as a small UCUM-style unit expression
//! (`m.s-1`, `[ft_i]/s`, `cm/s`, `[mi_i]/h`, ...) that must reduce to a
//! length divided by a time.
//!
//! Conversion is a single multiplication by a finite positive factor, so NaN
//! and infinities pass through unchanged.

use crate::error::{BarbError, BarbResult};
use serde::Serialize;

const SECONDS_IN_HOUR: f64 = 3600.0;
const METERS_IN_KILOMETER: f64 = 1000.0;
const METERS_IN_NAUTICAL_MILE: f64 = 1852.0;

pub const METERS_PER_SECOND_TO_KNOTS: f64 = SECONDS_IN_HOUR / METERS_IN_NAUTICAL_MILE;
pub const KILOMETERS_PER_HOUR_TO_KNOTS: f64 = METERS_IN_KILOMETER / METERS_IN_NAUTICAL_MILE;
pub const MILES_PER_HOUR_TO_KNOTS: f64 = 0.868976;

/// A speed unit with a known linear factor to knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    /// Resolved from a unit expression.
    Derived { factor: f64 },
}

impl SpeedUnit {
    /// Resolve a unit token (case-insensitive for the common tokens).
    pub fn parse(token: &str) -> BarbResult<Self> {
        let token = token.trim();
        if ["kn", "kts", "knots"]
            .iter()
            .any(|t| token.eq_ignore_ascii_case(t))
        {
            return Ok(Self::Knots);
        }
        if token.eq_ignore_ascii_case("m/s") {
            return Ok(Self::MetersPerSecond);
        }
        if token.eq_ignore_ascii_case("km/h") {
            return Ok(Self::KilometersPerHour);
        }
        if token.eq_ignore_ascii_case("mph") {
            return Ok(Self::MilesPerHour);
        }

        // Slower path: unit algebra
        let quantity = parse_expression(token)
            .ok_or_else(|| BarbError::UnsupportedUnit(token.to_string()))?;
        if quantity.length != 1 || quantity.time != -1 {
            return Err(BarbError::UnsupportedUnit(token.to_string()));
        }
        let factor = quantity.factor * METERS_PER_SECOND_TO_KNOTS;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BarbError::UnsupportedUnit(token.to_string()));
        }
        Ok(Self::Derived { factor })
    }

    /// Multiplicative factor from this unit to knots.
    pub fn knots_factor(&self) -> f64 {
        match self {
            Self::Knots => 1.0,
            Self::MetersPerSecond => METERS_PER_SECOND_TO_KNOTS,
            Self::KilometersPerHour => KILOMETERS_PER_HOUR_TO_KNOTS,
            Self::MilesPerHour => MILES_PER_HOUR_TO_KNOTS,
            Self::Derived { factor } => *factor,
        }
    }

    /// Convert a speed in this unit to knots.
    pub fn to_knots(&self, speed: f64) -> f64 {
        match self {
            Self::Knots => speed,
            _ => speed * self.knots_factor(),
        }
    }
}

/// Convert `speed` expressed in `unit` to knots.
pub fn to_knots(speed: f64, unit: &str) -> BarbResult<f64> {
    Ok(SpeedUnit::parse(unit)?.to_knots(speed))
}

// ============================================================================
// Unit expressions
// ============================================================================

/// A scale in SI base units with length and time exponents.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Quantity {
    factor: f64,
    length: i32,
    time: i32,
}

impl Quantity {
    const ONE: Self = Self::new(1.0, 0, 0);

    const fn new(factor: f64, length: i32, time: i32) -> Self {
        Self {
            factor,
            length,
            time,
        }
    }

    fn times(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.factor * other.factor,
            self.length.checked_add(other.length)?,
            self.time.checked_add(other.time)?,
        ))
    }

    fn powi(self, exponent: i32) -> Option<Self> {
        Some(Self::new(
            self.factor.powi(exponent),
            self.length.checked_mul(exponent)?,
            self.time.checked_mul(exponent)?,
        ))
    }
}

/// Atoms accepting a metric prefix.
const METRIC_ATOMS: &[(&str, Quantity)] = &[
    ("m", Quantity::new(1.0, 1, 0)),
    ("s", Quantity::new(1.0, 0, 1)),
];

/// Atoms used as-is.
const PLAIN_ATOMS: &[(&str, Quantity)] = &[
    ("min", Quantity::new(60.0, 0, 1)),
    ("h", Quantity::new(SECONDS_IN_HOUR, 0, 1)),
    ("hr", Quantity::new(SECONDS_IN_HOUR, 0, 1)),
    ("d", Quantity::new(86_400.0, 0, 1)),
    ("[in_i]", Quantity::new(0.0254, 1, 0)),
    ("[ft_i]", Quantity::new(0.3048, 1, 0)),
    ("ft", Quantity::new(0.3048, 1, 0)),
    ("[yd_i]", Quantity::new(0.9144, 1, 0)),
    ("[mi_i]", Quantity::new(1609.344, 1, 0)),
    ("mi", Quantity::new(1609.344, 1, 0)),
    ("[nmi_i]", Quantity::new(METERS_IN_NAUTICAL_MILE, 1, 0)),
    ("nmi", Quantity::new(METERS_IN_NAUTICAL_MILE, 1, 0)),
    (
        "[kn_i]",
        Quantity::new(METERS_IN_NAUTICAL_MILE / SECONDS_IN_HOUR, 1, -1),
    ),
    (
        "kt",
        Quantity::new(METERS_IN_NAUTICAL_MILE / SECONDS_IN_HOUR, 1, -1),
    ),
];

/// Largest magnitude accepted for a term exponent.
const MAX_EXPONENT: i32 = 4;

const PREFIXES: &[(&str, f64)] = &[
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("µ", 1e-6),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Multiply,
    Divide,
}

/// Parse `term (('.' | '*' | '/') term)*` where each term is an atom with an
/// optional signed integer exponent.
fn parse_expression(expr: &str) -> Option<Quantity> {
    if expr.is_empty() {
        return None;
    }

    let mut result = Quantity::ONE;
    for (index, (op, term)) in split_terms(expr)?.into_iter().enumerate() {
        if term.is_empty() {
            // UCUM allows a leading division such as "/s"
            if index == 0 {
                continue;
            }
            return None;
        }
        let quantity = parse_term(term)?;
        result = match op {
            Op::Multiply => result.times(quantity)?,
            Op::Divide => result.times(quantity.powi(-1)?)?,
        };
    }
    Some(result)
}

fn split_terms(expr: &str) -> Option<Vec<(Op, &str)>> {
    let mut terms = Vec::new();
    let mut op = Op::Multiply;
    let mut start = 0;
    let mut depth = 0u32;

    for (i, c) in expr.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            '.' | '*' | '/' if depth == 0 => {
                terms.push((op, &expr[start..i]));
                op = if c == '/' { Op::Divide } else { Op::Multiply };
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    terms.push((op, &expr[start..]));
    Some(terms)
}

fn parse_term(term: &str) -> Option<Quantity> {
    let digits_start = term
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(term.len());

    let (mut atom, digits) = term.split_at(digits_start);
    let mut exponent = 1i32;
    if !digits.is_empty() {
        exponent = digits.parse().ok()?;
        if let Some(stripped) = atom.strip_suffix('-') {
            atom = stripped;
            exponent = -exponent;
        } else if let Some(stripped) = atom.strip_suffix('+') {
            atom = stripped;
        }
    }

    lookup_atom(atom)?.powi(exponent)
}

fn lookup_atom(atom: &str) -> Option<Quantity> {
    let exact = |table: &[(&str, Quantity)], name: &str| {
        table
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|(_, quantity)| *quantity)
    };

    if let Some(quantity) = exact(METRIC_ATOMS, atom).or_else(|| exact(PLAIN_ATOMS, atom)) {
        return Some(quantity);
    }

    PREFIXES.iter().find_map(|(prefix, scale)| {
        let base = atom.strip_prefix(prefix)?;
        let quantity = exact(METRIC_ATOMS, base)?;
        Some(Quantity::new(
            quantity.factor * scale,
            quantity.length,
            quantity.time,
        ))
    })
}
