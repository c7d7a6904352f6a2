//! Neutral glyphs and locale substitution.

use crate::locale::LocaleDefinition;

/// One unit of a rendering before locale glyphs are chosen.
///
/// Markers are distinct variants rather than placeholder characters, so a
/// locale whose separator is `,` or `.` can never be substituted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Literal character, emitted unchanged
    Char(char),
    /// Thousands grouping marker
    Group,
    /// Decimal point marker
    Decimal,
    /// Currency symbol marker
    Currency,
}

/// Map neutral glyphs to the locale's separators and symbol in a single pass.
pub fn substitute(glyphs: &[Glyph], locale: &LocaleDefinition) -> String {
    let mut result = String::with_capacity(glyphs.len() + locale.currency_symbol.len());
    for glyph in glyphs {
        match glyph {
            Glyph::Char(c) => result.push(*c),
            Glyph::Group => result.push(locale.thousands_separator),
            Glyph::Decimal => result.push(locale.decimal_separator),
            Glyph::Currency => result.push_str(&locale.currency_symbol),
        }
    }
    result
}

/// Render glyphs with the US-style neutral characters (`,` `.` `$`).
pub fn neutral(glyphs: &[Glyph]) -> String {
    glyphs
        .iter()
        .map(|glyph| match glyph {
            Glyph::Char(c) => *c,
            Glyph::Group => ',',
            Glyph::Decimal => '.',
            Glyph::Currency => '$',
        })
        .collect()
}

pub(crate) fn push_str(glyphs: &mut Vec<Glyph>, s: &str) {
    glyphs.extend(s.chars().map(Glyph::Char));
}
