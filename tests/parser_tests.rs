//! Tests for the format pattern parser.

use moneyfmt::ast::{DigitPlaceholder, PatternPart};
use moneyfmt::{NegativeStyle, Pattern, PatternError, SymbolPosition};

#[test]
fn test_parse_locale_default_patterns() {
    let before = Pattern::parse("$0,0.00").unwrap();
    assert!(before.has_grouping());
    assert!(before.has_currency());
    assert_eq!(before.decimal_places(), 2);
    assert_eq!(before.symbol_position(), Some(SymbolPosition::Before));

    let after = Pattern::parse("0,0.00$").unwrap();
    assert_eq!(after.symbol_position(), Some(SymbolPosition::After));
}

#[test]
fn test_parse_escaped_currency_is_literal() {
    let pattern = Pattern::parse("\\$0").unwrap();
    assert!(!pattern.has_currency());
    assert_eq!(pattern.parts()[0], PatternPart::Literal("$".into()));
    assert_eq!(pattern.format_neutral(5.0), "$5");
}

#[test]
fn test_parse_quoted_text() {
    let pattern = Pattern::parse("0.00 \"EUR\"").unwrap();
    assert_eq!(
        pattern.parts().last(),
        Some(&PatternPart::Literal("EUR".into()))
    );
    assert_eq!(pattern.format_neutral(5.0), "5.00 EUR");
}

#[test]
fn test_parse_hash_placeholders() {
    let pattern = Pattern::parse("#,###.##").unwrap();
    assert_eq!(
        pattern.parts()[0],
        PatternPart::Digit(DigitPlaceholder::Hash)
    );
    assert_eq!(pattern.format_neutral(1234.5), "1,234.5");
    assert_eq!(pattern.format_neutral(1234.0), "1,234");
}

#[test]
fn test_parse_parentheses() {
    let pattern = Pattern::parse("($0,0.00)").unwrap();
    assert_eq!(pattern.negative_style(), NegativeStyle::Parentheses);
    assert_eq!(pattern.format_neutral(-1234.5), "($1,234.50)");
}

#[test]
fn test_parse_padding_without_grouping() {
    let pattern = Pattern::parse("000.00").unwrap();
    assert_eq!(pattern.format_neutral(5.0), "005.00");
}

#[test]
fn test_parse_errors() {
    assert_eq!(Pattern::parse(""), Err(PatternError::EmptyPattern));
    assert_eq!(Pattern::parse("$ ."), Err(PatternError::NoDigitPlaceholder));
    assert_eq!(
        Pattern::parse("0.0.0"),
        Err(PatternError::DuplicateDecimalPoint { position: 3 })
    );
    assert_eq!(
        Pattern::parse("0.[0[0]]"),
        Err(PatternError::UnexpectedToken {
            position: 4,
            found: '['
        })
    );
    assert_eq!(
        Pattern::parse("0 \"EUR"),
        Err(PatternError::UnterminatedQuote { position: 2 })
    );
}
