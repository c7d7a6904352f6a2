//! moneyfmt - locale-aware formatting and parsing of monetary values
//!
//! Patterns are written once with neutral markers (`$0,0.00`) and rendered
//! with the separators and currency symbol of whichever locale the
//! [`LocaleRegistry`] resolves.

pub mod amount;
pub mod ast;
pub mod binding;
pub mod error;
pub mod locale;
pub mod money;
pub mod options;
pub mod registry;

mod cache;
mod formatter;
pub mod parser;

pub use amount::parse_amount;
pub use ast::{NegativeStyle, Pattern, SymbolPosition};
pub use binding::{set_locale, LocaleBinding, MoneyFormatFn};
pub use error::{ConfigurationError, Error, ParseError, PatternError};
pub use formatter::{substitute, Glyph};
pub use locale::{LocaleDefinition, LocaleEntry, LocaleTable};
pub use money::Money;
pub use options::FormatOptions;
pub use registry::{locales_from_json, LocaleRegistry, SharedRegistry};

/// Format a value for the locale and pattern named in `opts`.
pub fn format(registry: &LocaleRegistry, value: f64, opts: &FormatOptions) -> Result<String, Error> {
    let mut money = registry.money(&opts.locale)?;
    if let Some(pattern) = &opts.pattern {
        money = money.with_pattern(pattern.as_str());
    }
    Ok(money.format(value)?)
}

/// Format a value with the locale's default pattern.
pub fn localize(registry: &LocaleRegistry, value: f64, locale_id: &str) -> Result<String, Error> {
    Ok(registry.money(locale_id)?.format(value)?)
}

/// Read an amount from a display string written for `locale_id`.
pub fn parse(registry: &LocaleRegistry, input: &str, locale_id: &str) -> Result<f64, Error> {
    Ok(registry.money(locale_id)?.parse(input)?)
}
