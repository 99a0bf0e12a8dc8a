//! Symbol locator parsing.
//!
//! Grammar:
//!
//! ```text
//! windbarbs://<name>(<speed>)[<unit>][?<key>=<value>&<key>=<value>...]
//! ```
//!
//! The scheme and name are case-insensitive. `<speed>` is a decimal or
//! hexadecimal floating-point literal (optionally suffixed `d`/`f`), or one of
//! `NaN`, `Infinity`, `-Infinity`. Query keys are stored lower-cased;
//! pairs without `=` are skipped.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

pub const WINDBARBS_SCHEME: &str = "windbarbs";
pub const WINDBARBS_PREFIX: &str = "windbarbs://";

/// A parsed wind barb locator.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLocator {
    /// Symbol set name as written (compared case-insensitively).
    pub symbol_set: String,
    /// Raw speed in `unit`; may be NaN or infinite.
    pub speed: f64,
    /// Unit token as written.
    pub unit: String,
    /// Query parameters, keys lower-cased.
    pub params: HashMap<String, String>,
}

impl SymbolLocator {
    /// Parse a locator string.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();

        let (scheme, rest) = text.split_once("://").ok_or(ParseError::MissingScheme)?;
        if !scheme.trim().eq_ignore_ascii_case(WINDBARBS_SCHEME) {
            return Err(ParseError::UnknownScheme(scheme.to_string()));
        }

        let (body, query) = match rest.split_once('?') {
            Some((body, query)) => (body, Some(query)),
            None => (rest, None),
        };

        // name(speed)
        let open = body.find('(').ok_or(ParseError::MissingParentheses)?;
        let name = body[..open].trim();
        let after_open = &body[open + 1..];
        let close = after_open.find(')').ok_or(ParseError::MissingParentheses)?;
        if name.is_empty() {
            return Err(ParseError::MissingName);
        }
        let speed = parse_speed(&after_open[..close])?;

        // [unit]
        let after_speed = after_open[close + 1..].trim_start();
        let unit_group = after_speed
            .strip_prefix('[')
            .ok_or(ParseError::MissingBrackets)?;
        let unit_end = unit_group.find(']').ok_or(ParseError::MissingBrackets)?;
        let unit = unit_group[..unit_end].trim();
        if unit.is_empty() {
            return Err(ParseError::EmptyUnit);
        }

        let trailing = unit_group[unit_end + 1..].trim();
        if !trailing.is_empty() {
            return Err(ParseError::TrailingInput(trailing.to_string()));
        }

        Ok(Self {
            symbol_set: name.to_string(),
            speed,
            unit: unit.to_string(),
            params: query.map(parse_params).unwrap_or_default(),
        })
    }

    /// Look up a query parameter (key compared lower-cased).
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_lowercase()).map(String::as_str)
    }
}

impl fmt::Display for SymbolLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}({})[{}]",
            WINDBARBS_PREFIX,
            self.symbol_set,
            format_speed(self.speed),
            self.unit
        )?;

        let mut keys: Vec<&String> = self.params.keys().collect();
        keys.sort();
        for (i, key) in keys.into_iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", separator, key, self.params[key])?;
        }
        Ok(())
    }
}

/// Parse a speed literal.
///
/// Accepts decimal literals (`12`, `-3.5`, `.5`, `1e3`), hexadecimal
/// floating-point literals (`0x1.8p3`), an optional trailing `d`/`D`/`f`/`F`
/// type suffix, and the words `NaN` and `Infinity` with an optional sign.
/// Rust-only spellings such as `inf` or `nan` are rejected.
fn parse_speed(text: &str) -> Result<f64, ParseError> {
    let unparsable = || ParseError::UnparsableSpeed(text.to_string());

    let literal = text.trim();
    let (negative, body) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let signed = |value: f64| if negative { -value } else { value };

    match body {
        "NaN" => return Ok(f64::NAN),
        "Infinity" => return Ok(signed(f64::INFINITY)),
        _ => {}
    }

    let body = match body.strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F')) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => body,
    };

    if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        return parse_hex_float(hex).map(signed).ok_or_else(unparsable);
    }

    let decimal = body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return Err(unparsable());
    }
    body.parse::<f64>().map(signed).map_err(|_| unparsable())
}

/// `<hex digits>[.<hex digits>]p<decimal exponent>`; the exponent is required.
fn parse_hex_float(text: &str) -> Option<f64> {
    let (mantissa, exponent) = text.split_once(|c: char| c == 'p' || c == 'P')?;
    let exponent: i32 = exponent.parse().ok()?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for c in int_part.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        value += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    Some(value * 2f64.powi(exponent))
}

fn format_speed(speed: f64) -> String {
    if speed.is_nan() {
        "NaN".to_string()
    } else if speed.is_infinite() {
        if speed > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        speed.to_string()
    }
}

fn parse_params(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&').filter(|p| !p.trim().is_empty()) {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                params.insert(key.trim().to_lowercase(), value.trim().to_string());
            }
            _ => debug!(pair, "Skipping malformed query pair"),
        }
    }
    params
}
