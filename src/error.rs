//! Error types for patterns, locale configuration and amount parsing.

use thiserror::Error;

/// Errors that can occur when parsing a format pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("unexpected token at position {position}: found '{found}'")]
    UnexpectedToken { position: usize, found: char },

    #[error("unterminated bracket at position {position}")]
    UnterminatedBracket { position: usize },

    #[error("unterminated quote at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("second decimal point at position {position}")]
    DuplicateDecimalPoint { position: usize },

    #[error("pattern has no digit placeholder")]
    NoDigitPlaceholder,

    #[error("empty format pattern")]
    EmptyPattern,
}

/// Errors raised by the locale registry.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("locale '{requested}' not found and default locale '{default}' is not registered")]
    UnknownDefault { requested: String, default: String },

    #[error("locale '{locale}' uses '{separator}' as both decimal and thousands separator")]
    AmbiguousSeparators { locale: String, separator: char },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("locale table error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when reading an amount back from a display string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no digits in '{input}'")]
    NoDigits { input: String },
}

/// Any error returned by the crate-level convenience functions.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
