use moneyfmt::{format, localize, parse, FormatOptions, LocaleRegistry};

#[test]
fn test_localize_en_us() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 10.99, "en_US").unwrap(), "$10.99");
    assert_eq!(localize(&registry, 1010.99, "en_US").unwrap(), "$1,010.99");
}

#[test]
fn test_localize_en_gb() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 10.99, "en_GB").unwrap(), "£10.99");
    assert_eq!(localize(&registry, 1010.99, "en_GB").unwrap(), "£1,010.99");
}

#[test]
fn test_localize_fr_fr() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 10.99, "fr_FR").unwrap(), "10,99€");
    assert_eq!(localize(&registry, 1010.99, "fr_FR").unwrap(), "1.010,99€");
}

#[test]
fn test_large_values_group_every_three_digits() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(
        localize(&registry, 1234567890.5, "fr_FR").unwrap(),
        "1.234.567.890,50€"
    );
    assert_eq!(
        localize(&registry, 1234567890.5, "en_US").unwrap(),
        "$1,234,567,890.50"
    );
}

#[test]
fn test_negative_values_keep_sign() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, -1010.99, "en_US").unwrap(), "-$1,010.99");
    assert_eq!(localize(&registry, -1010.99, "fr_FR").unwrap(), "-1.010,99€");
}

#[test]
fn test_currency_codes_resolve_like_locales() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 1010.99, "EUR").unwrap(), "1.010,99 €");
    assert_eq!(localize(&registry, 1010.99, "CHF").unwrap(), "CHF 1'010.99");
}

#[test]
fn test_zero_decimal_currency_rounds_to_whole_units() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 1234.5, "JPY").unwrap(), "¥1,235");
    assert_eq!(localize(&registry, -10.99, "JPY").unwrap(), "-¥11");
    assert_eq!(localize(&registry, 0.4, "JPY").unwrap(), "¥0");
}

#[test]
fn test_values_beyond_integer_range_keep_every_digit() {
    let registry = LocaleRegistry::builtin();
    let formatted = localize(&registry, 1e40, "en_US").unwrap();
    assert_eq!(formatted, format!("$10{}.00", ",000".repeat(13)));
    assert_eq!(parse(&registry, &formatted, "en_US").unwrap(), 1e40);
}

#[test]
fn test_long_fraction_pattern() {
    let registry = LocaleRegistry::builtin();
    let pattern = format!("0.{}", "0".repeat(39));
    let options = FormatOptions::new("fr_FR").with_pattern(pattern);
    assert_eq!(
        format(&registry, 1.5, &options).unwrap(),
        format!("1,5{}", "0".repeat(38))
    );
}

#[test]
fn test_unknown_locale_uses_default() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(localize(&registry, 1010.99, "xx_XX").unwrap(), "$1,010.99");
}

#[test]
fn test_pattern_override() {
    let registry = LocaleRegistry::builtin();
    let opts = FormatOptions::new("fr_FR").with_pattern("($ 0,0.[00])");

    assert_eq!(format(&registry, 1010.0, &opts).unwrap(), "€ 1.010");
    assert_eq!(format(&registry, -1010.5, &opts).unwrap(), "(€ 1.010,5)");
}

#[test]
fn test_override_does_not_leak_between_calls() {
    let registry = LocaleRegistry::builtin();
    let money = registry.money("en_US").unwrap();
    let whole = money.clone().with_pattern("$0,0");

    assert_eq!(whole.format(1010.99).unwrap(), "$1,011");
    assert_eq!(money.format(1010.99).unwrap(), "$1,010.99");
}

#[test]
fn test_format_is_idempotent() {
    let registry = LocaleRegistry::builtin();
    let opts = FormatOptions::new("fr_FR");
    let first = format(&registry, 98765.4321, &opts).unwrap();
    let second = format(&registry, 98765.4321, &opts).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "98.765,43€");
}

#[test]
fn test_separator_that_is_also_a_marker() {
    // A locale whose thousands separator is '.' and decimal is ',' must not
    // have its '.' re-read as a decimal point.
    let registry = LocaleRegistry::builtin();
    let money = registry.money("fr_FR").unwrap();
    assert_eq!(money.format(1000000.0).unwrap(), "1.000.000,00€");
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let registry = LocaleRegistry::builtin();
    let opts = FormatOptions::new("en_US").with_pattern("0.[00");
    assert!(matches!(
        format(&registry, 1.0, &opts),
        Err(moneyfmt::Error::Pattern(_))
    ));
}
