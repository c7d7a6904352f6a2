//! Reading amounts back from display strings.
//!
//! Parsing is pattern independent: only the locale's separators and symbol
//! matter. The last decimal separator in the string starts the fraction, and
//! the fraction is read as cents (first two digits, right padded with `0`).

use crate::error::ParseError;
use crate::locale::LocaleDefinition;

/// Parse a display string such as `$1,234.01` or `1.234,01€`.
pub fn parse_amount(input: &str, locale: &LocaleDefinition) -> Result<f64, ParseError> {
    if !input.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::NoDigits {
            input: input.to_string(),
        });
    }

    let unsymboled = if locale.currency_symbol.is_empty() {
        input.to_string()
    } else {
        input.replace(locale.currency_symbol.as_str(), "")
    };
    let negative = is_negative(&unsymboled, locale);

    let cleaned: String = unsymboled
        .chars()
        .filter(|c| {
            c.is_ascii_digit() || *c == locale.decimal_separator || *c == locale.thousands_separator
        })
        .collect();

    let (integer_part, fraction_part) = match cleaned.rfind(locale.decimal_separator) {
        Some(index) => (
            &cleaned[..index],
            &cleaned[index + locale.decimal_separator.len_utf8()..],
        ),
        None => (cleaned.as_str(), ""),
    };

    let whole: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let whole = if whole.is_empty() { "0" } else { whole.as_str() };
    let cents = cents_digits(fraction_part);
    // Digits only, so the decimal literal is always well formed
    let amount: f64 = format!("{whole}.{cents}").parse().unwrap_or(0.0);

    Ok(if negative { -amount } else { amount })
}

/// A `-` just before the first digit or just after the last one, or an
/// amount wrapped in parentheses.
fn is_negative(s: &str, locale: &LocaleDefinition) -> bool {
    let separator = |c: char| c == locale.decimal_separator || c == locale.thousands_separator;
    let (Some(first), Some(last)) = (
        s.find(|c: char| c.is_ascii_digit()),
        s.rfind(|c: char| c.is_ascii_digit()),
    ) else {
        return false;
    };

    let leading = s[..first].trim_end_matches(|c: char| c.is_whitespace() || separator(c));
    let minus = !separator('-') && (leading.ends_with('-') || s[last + 1..].starts_with('-'));
    let parens = !separator('(') && s.trim_start().starts_with('(') && s.trim_end().ends_with(')');
    minus || parens
}

/// First two fraction digits, right padded with `0`: the cents.
fn cents_digits(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit())
        .chain(std::iter::repeat('0'))
        .take(2)
        .collect()
}
