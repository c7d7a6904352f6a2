//! Number rendering (grouping, fixed precision, sign, currency marker)

use crate::ast::{DigitPlaceholder, NegativeStyle, Pattern, PatternPart};
use crate::formatter::glyph::{push_str, Glyph};

/// Analysis of a pattern's numeric structure.
#[derive(Debug, Clone)]
pub struct PatternAnalysis {
    /// Integer digit placeholders
    pub integer_placeholders: Vec<DigitPlaceholder>,
    /// Fractional digit placeholders
    pub decimal_placeholders: Vec<DigitPlaceholder>,
    /// Whether the integer part is grouped
    pub has_grouping: bool,
    /// Parts before the number (literals, currency, sign)
    pub prefix_parts: Vec<PatternPart>,
    /// Parts after the number
    pub suffix_parts: Vec<PatternPart>,
}

impl PatternAnalysis {
    /// Get the number of fractional digits to round to
    pub fn decimal_places(&self) -> usize {
        self.decimal_placeholders.len()
    }
}

/// Analyze a pattern to extract its numeric structure.
pub fn analyze_pattern(pattern: &Pattern) -> PatternAnalysis {
    let mut integer_placeholders = Vec::new();
    let mut decimal_placeholders = Vec::new();
    let mut has_grouping = false;
    let mut prefix_parts = Vec::new();
    let mut suffix_parts = Vec::new();

    let mut seen_digit = false;
    let mut after_decimal = false;

    for part in pattern.parts() {
        match part {
            PatternPart::Digit(placeholder) => {
                seen_digit = true;
                if after_decimal {
                    decimal_placeholders.push(*placeholder);
                } else {
                    integer_placeholders.push(*placeholder);
                }
            }
            PatternPart::DecimalPoint => {
                after_decimal = true;
                seen_digit = true;
            }
            PatternPart::Grouping => {
                // Grouping after the decimal point is ignored
                if !after_decimal {
                    has_grouping = true;
                }
            }
            PatternPart::Literal(_) | PatternPart::Currency | PatternPart::Sign => {
                if seen_digit {
                    suffix_parts.push(part.clone());
                } else {
                    prefix_parts.push(part.clone());
                }
            }
        }
    }

    PatternAnalysis {
        integer_placeholders,
        decimal_placeholders,
        has_grouping,
        prefix_parts,
        suffix_parts,
    }
}

/// Render a finite value into neutral glyphs according to a pattern.
pub fn render_number(value: f64, pattern: &Pattern) -> Vec<Glyph> {
    let analysis = analyze_pattern(pattern);

    let decimal_places = analysis.decimal_places();
    let (integer, fraction) = round_digits(value, decimal_places);
    let negative = value < 0.0 && (integer.bytes().chain(fraction.bytes())).any(|d| d != b'0');

    let mut number = format_integer(&integer, &analysis.integer_placeholders, analysis.has_grouping);
    let decimal = format_decimal(&fraction, &analysis.decimal_placeholders);
    if !decimal.is_empty() || analysis.decimal_placeholders.iter().any(|p| p.is_required()) {
        number.push(Glyph::Decimal);
        number.extend(decimal);
    }

    let sign = match (negative, pattern.shows_plus_sign()) {
        (true, _) if pattern.negative_style() == NegativeStyle::Minus => Some('-'),
        (false, true) => Some('+'),
        _ => None,
    };

    let mut result = Vec::with_capacity(number.len() + 4);
    if pattern.negative_style() == NegativeStyle::Parentheses && negative {
        result.push(Glyph::Char('('));
    }
    // Without an explicit sign position the sign leads the whole rendering
    if !pattern.has_sign_position() {
        if let Some(c) = sign {
            result.push(Glyph::Char(c));
        }
    }
    push_parts(&mut result, &analysis.prefix_parts, sign);
    result.extend(number);
    push_parts(&mut result, &analysis.suffix_parts, sign);
    if pattern.negative_style() == NegativeStyle::Parentheses && negative {
        result.push(Glyph::Char(')'));
    }

    result
}

/// Round `|value|` half away from zero to `places` fractional digits.
///
/// Works on the shortest decimal form of the value, so any finite value is
/// rendered with all of its integer digits. Returns the integer digits
/// without leading zeros (empty for zero) and exactly `places` fraction digits.
fn round_digits(value: f64, places: usize) -> (String, String) {
    let repr = value.abs().to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.insert(0, 1);
                break;
            }
            index -= 1;
            if digits[index] == 9 {
                digits[index] = 0;
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let to_string = |ds: &[u8]| -> String { ds.iter().map(|d| char::from(b'0' + d)).collect() };
    let integer = to_string(&digits[..split]);
    (integer.trim_start_matches('0').to_string(), to_string(&digits[split..]))
}

/// Format the integer digits with placeholders and grouping markers.
fn format_integer(digits: &str, placeholders: &[DigitPlaceholder], use_grouping: bool) -> Vec<Glyph> {
    let value_digits: Vec<char> = digits.chars().collect();

    // "0,0" spells out grouping, not padding: at most one leading zero then
    let required = placeholders.iter().filter(|p| p.is_required()).count();
    let min_digits = if use_grouping { required.min(1) } else { required };
    let output_len = value_digits.len().max(min_digits);

    let mut result = Vec::with_capacity(output_len + output_len / 3);

    // Process from right to left (least significant first)
    for pos_from_right in 0..output_len {
        let digit_index = value_digits.len() as isize - 1 - pos_from_right as isize;

        if use_grouping && pos_from_right > 0 && pos_from_right % 3 == 0 {
            result.push(Glyph::Group);
        }

        if digit_index >= 0 {
            result.push(Glyph::Char(value_digits[digit_index as usize]));
        } else {
            let placeholder_index = placeholders.len() as isize - 1 - pos_from_right as isize;
            let c = if placeholder_index >= 0 {
                placeholders[placeholder_index as usize].empty_char()
            } else {
                Some('0')
            };
            if let Some(c) = c {
                result.push(Glyph::Char(c));
            }
        }
    }

    result.reverse();
    result
}

/// Format the fractional digits with placeholders.
fn format_decimal(digits: &str, placeholders: &[DigitPlaceholder]) -> Vec<Glyph> {
    if placeholders.is_empty() {
        return Vec::new();
    }

    let decimal_chars: Vec<char> = digits.chars().collect();

    // Trailing zeros are dropped under optional placeholders
    let mut keep = placeholders.len();
    while keep > 0 && decimal_chars[keep - 1] == '0' && !placeholders[keep - 1].is_required() {
        keep -= 1;
    }

    decimal_chars[..keep].iter().map(|c| Glyph::Char(*c)).collect()
}

fn push_parts(result: &mut Vec<Glyph>, parts: &[PatternPart], sign: Option<char>) {
    for part in parts {
        match part {
            PatternPart::Literal(s) => push_str(result, s),
            PatternPart::Currency => result.push(Glyph::Currency),
            PatternPart::Sign => {
                if let Some(c) = sign {
                    result.push(Glyph::Char(c));
                }
            }
            _ => {}
        }
    }
}
