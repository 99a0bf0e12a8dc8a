//! Error types for wind barb symbol resolution.
//!
//! Every variant is recoverable: the factory collapses them into "no shape"
//! and only the diagnostic differs.

use thiserror::Error;

/// Result type alias using BarbError.
pub type BarbResult<T> = Result<T, BarbError>;

/// Grammar violations found while parsing a symbol locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing scheme separator '://'")]
    MissingScheme,

    #[error("Unknown scheme '{0}', expected 'windbarbs'")]
    UnknownScheme(String),

    #[error("Missing symbol set name")]
    MissingName,

    #[error("Missing '(speed)' group")]
    MissingParentheses,

    #[error("Missing '[unit]' group")]
    MissingBrackets,

    #[error("Empty unit of measure")]
    EmptyUnit,

    #[error("Unable to parse speed from '{0}'")]
    UnparsableSpeed(String),

    #[error("Unexpected input after unit group: '{0}'")]
    TrailingInput(String),
}

/// Primary error type for symbol resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarbError {
    #[error("Invalid symbol locator: {0}")]
    Parse(#[from] ParseError),

    #[error("The supplied unit isn't currently supported: {0}")]
    UnsupportedUnit(String),

    #[error("Unable to find a wind barb symbol for speed {knots} kn")]
    OutOfRange { knots: f64 },

    #[error("Symbol set not supported: {0}")]
    NotSupported(String),

    #[error("Invalid wind barb definition: {0}")]
    InvalidDefinition(String),

    #[error("No symbol provided")]
    MissingSymbol,

    #[error("No feature provided")]
    MissingFeature,

    #[error("Unable to resolve attribute '{0}' in symbol expression")]
    UnresolvedAttribute(String),
}
