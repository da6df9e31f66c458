use thiserror::Error;

/// Validation and contract errors exposed by `tickline-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid date '{value}', expected {expected}")]
    InvalidDate {
        value: String,
        expected: &'static str,
    },
    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,

    #[error("holdout fraction {value} must lie strictly between 0 and 1")]
    InvalidHoldoutFraction { value: f64 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
}
