//! Locale definitions and locale table rows.

pub mod builtin;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Pattern, SymbolPosition};
use crate::cache;
use crate::error::{ConfigurationError, PatternError};

/// Decimal separator used when no entry supplies one.
pub const BASE_DECIMAL: char = '.';
/// Thousands separator used when no entry supplies one.
pub const BASE_THOUSANDS: char = ',';
/// Currency symbol used when no entry supplies one.
pub const BASE_SYMBOL: &str = "$";
/// Format pattern used when no entry supplies one.
pub const BASE_FORMAT: &str = "$0,0.00";

/// A locale table, keyed by locale identifier (`en_US`) or currency code.
pub type LocaleTable = BTreeMap<String, LocaleEntry>;

/// One row of a locale table, as loaded. Every field may be missing.
///
/// The JSON keys are `decimal`, `comma` (the thousands separator), `symbol`
/// and `format`. Separators must be single characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comma: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl LocaleEntry {
    pub fn new(decimal: char, comma: char, symbol: &str, format: &str) -> Self {
        Self {
            decimal: Some(decimal),
            comma: Some(comma),
            symbol: Some(symbol.to_string()),
            format: Some(format.to_string()),
        }
    }

    /// An entry that only sets the currency symbol.
    pub fn with_symbol(symbol: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            ..Self::default()
        }
    }

    /// Fill every missing field from `fallback`.
    pub fn or(&self, fallback: &LocaleEntry) -> LocaleEntry {
        LocaleEntry {
            decimal: self.decimal.or(fallback.decimal),
            comma: self.comma.or(fallback.comma),
            symbol: self.symbol.clone().or_else(|| fallback.symbol.clone()),
            format: self.format.clone().or_else(|| fallback.format.clone()),
        }
    }
}

/// The complete display conventions of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDefinition {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub currency_symbol: String,
    /// Default format pattern, written with neutral markers
    pub format: String,
}

impl Default for LocaleDefinition {
    fn default() -> Self {
        Self::from_entry(&LocaleEntry::default())
    }
}

impl LocaleDefinition {
    /// Complete an entry with the base values.
    pub fn from_entry(entry: &LocaleEntry) -> Self {
        LocaleDefinition {
            decimal_separator: entry.decimal.unwrap_or(BASE_DECIMAL),
            thousands_separator: entry.comma.unwrap_or(BASE_THOUSANDS),
            currency_symbol: entry.symbol.clone().unwrap_or_else(|| BASE_SYMBOL.to_string()),
            format: entry.format.clone().unwrap_or_else(|| BASE_FORMAT.to_string()),
        }
    }

    /// Check that the two separators can be told apart.
    pub fn validate(self, locale: &str) -> Result<Self, ConfigurationError> {
        if self.decimal_separator == self.thousands_separator {
            return Err(ConfigurationError::AmbiguousSeparators {
                locale: locale.to_string(),
                separator: self.decimal_separator,
            });
        }
        Ok(self)
    }

    /// The parsed default pattern.
    pub fn pattern(&self) -> Result<Pattern, PatternError> {
        cache::get_or_parse(&self.format)
    }

    /// Where the default pattern puts the currency symbol.
    pub fn symbol_position(&self) -> Result<Option<SymbolPosition>, PatternError> {
        Ok(self.pattern()?.symbol_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_or_is_field_level() {
        let custom = LocaleEntry::with_symbol("CAD ");
        let merged = custom.or(&LocaleEntry::new(',', '.', "€", "0,0.00$"));
        assert_eq!(merged, LocaleEntry::new(',', '.', "CAD ", "0,0.00$"));
    }

    #[test]
    fn test_definition_base_values() {
        let definition = LocaleDefinition::default();
        assert_eq!(definition.decimal_separator, '.');
        assert_eq!(definition.thousands_separator, ',');
        assert_eq!(definition.currency_symbol, "$");
        assert_eq!(definition.format, "$0,0.00");
    }

    #[test]
    fn test_validate_rejects_equal_separators() {
        let definition = LocaleDefinition::from_entry(&LocaleEntry {
            decimal: Some(','),
            ..LocaleEntry::default()
        });
        let err = definition.validate("xx_XX").unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::AmbiguousSeparators { separator: ',', .. }
        ));
    }

    #[test]
    fn test_entry_from_json() {
        let entry: LocaleEntry =
            serde_json::from_str(r#"{"decimal": ",", "comma": ".", "symbol": "€"}"#).unwrap();
        assert_eq!(entry.decimal, Some(','));
        assert_eq!(entry.comma, Some('.'));
        assert_eq!(entry.format, None);
    }

    #[test]
    fn test_entry_rejects_multi_char_separator() {
        let result = serde_json::from_str::<LocaleEntry>(r#"{"decimal": ",,"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_symbol_position() {
        let definition = LocaleDefinition::from_entry(&LocaleEntry::new(',', '.', "€", "0,0.00$"));
        assert_eq!(definition.symbol_position(), Ok(Some(SymbolPosition::After)));
    }
}
