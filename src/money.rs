//! A formatter bound to one resolved locale.

use crate::amount::parse_amount;
use crate::cache;
use crate::error::{ParseError, PatternError};
use crate::locale::LocaleDefinition;

/// Formats and parses amounts for one locale.
///
/// Created by [`LocaleRegistry::money`](crate::LocaleRegistry::money). The
/// instance is immutable; [`Money::with_pattern`] returns a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    locale: String,
    definition: LocaleDefinition,
    pattern: Option<String>,
}

impl Money {
    pub fn new(locale: impl Into<String>, definition: LocaleDefinition) -> Self {
        Money {
            locale: locale.into(),
            definition,
            pattern: None,
        }
    }

    /// Use `pattern` instead of the locale's default pattern.
    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        Money {
            pattern: Some(pattern.into()),
            ..self
        }
    }

    /// The locale identifier actually in use (after fallback).
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn definition(&self) -> &LocaleDefinition {
        &self.definition
    }

    /// The pattern override, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The pattern `format` applies: the override or the locale default.
    pub fn active_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(&self.definition.format)
    }

    /// Format a value, e.g. `1010.99` as `$1,010.99` for `en_US`.
    pub fn format(&self, value: f64) -> Result<String, PatternError> {
        self.format_with(value, self.active_pattern())
    }

    /// Format a value with an explicit pattern.
    pub fn format_with(&self, value: f64, pattern: &str) -> Result<String, PatternError> {
        let parsed = cache::get_or_parse(pattern)?;
        Ok(parsed.format(value, &self.definition))
    }

    /// Read an amount back from a display string.
    pub fn parse(&self, input: &str) -> Result<f64, ParseError> {
        parse_amount(input, &self.definition)
    }
}
