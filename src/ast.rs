//! AST types for parsed format patterns.

use crate::error::PatternError;

/// Digit placeholder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// `0` - Display digit or zero
    Zero,
    /// `#` - Display digit or nothing (also any digit inside `[...]`)
    Hash,
}

impl DigitPlaceholder {
    /// Returns true if this placeholder requires a digit (shows 0 for missing).
    pub fn is_required(&self) -> bool {
        matches!(self, DigitPlaceholder::Zero)
    }

    /// Returns the character to display when no digit is present.
    pub fn empty_char(&self) -> Option<char> {
        match self {
            DigitPlaceholder::Zero => Some('0'),
            DigitPlaceholder::Hash => None,
        }
    }
}

/// How negative values are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    /// A minus sign, at the pattern's sign position or in front of everything.
    #[default]
    Minus,
    /// The whole rendering wrapped in `(` and `)`.
    Parentheses,
}

/// Where the currency marker sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// A single part of a format pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternPart {
    /// Literal text to display as-is
    Literal(String),
    /// Digit placeholder (0 or #)
    Digit(DigitPlaceholder),
    /// Neutral decimal point marker (`.`)
    DecimalPoint,
    /// Neutral grouping marker (`,`)
    Grouping,
    /// Neutral currency marker (`$`)
    Currency,
    /// Explicit sign position (`+` or `-`)
    Sign,
}

impl PatternPart {
    /// Returns true if this part belongs to the number itself.
    pub fn is_numeric_part(&self) -> bool {
        matches!(
            self,
            PatternPart::Digit(_) | PatternPart::DecimalPoint | PatternPart::Grouping
        )
    }
}

/// A parsed format pattern.
///
/// Patterns use US-style neutral markers (`$0,0.00`). The markers are only
/// mapped to a locale's glyphs when a rendering is substituted, so one parsed
/// pattern serves every locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    parts: Vec<PatternPart>,
    negative: NegativeStyle,
    always_sign: bool,
}

impl Pattern {
    /// Create a Pattern from parsed parts.
    pub fn from_parts(parts: Vec<PatternPart>, negative: NegativeStyle, always_sign: bool) -> Self {
        Pattern {
            parts,
            negative,
            always_sign,
        }
    }

    /// Get the parts of this pattern.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn negative_style(&self) -> NegativeStyle {
        self.negative
    }

    /// Returns true if positive values are rendered with a `+`.
    pub fn shows_plus_sign(&self) -> bool {
        self.always_sign
    }

    /// Returns true if the integer part is grouped by thousands.
    pub fn has_grouping(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PatternPart::Grouping))
    }

    /// Returns true if the pattern places a currency marker.
    pub fn has_currency(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PatternPart::Currency))
    }

    /// Returns true if the pattern has an explicit sign position.
    pub fn has_sign_position(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, PatternPart::Sign))
    }

    /// Number of fractional digit placeholders.
    pub fn decimal_places(&self) -> usize {
        self.parts
            .iter()
            .skip_while(|p| !matches!(p, PatternPart::DecimalPoint))
            .filter(|p| matches!(p, PatternPart::Digit(_)))
            .count()
    }

    /// Position of the currency marker relative to the first digit.
    pub fn symbol_position(&self) -> Option<SymbolPosition> {
        let currency = self
            .parts
            .iter()
            .position(|p| matches!(p, PatternPart::Currency))?;
        let first_digit = self
            .parts
            .iter()
            .position(PatternPart::is_numeric_part)
            .unwrap_or(0);
        if currency < first_digit {
            Some(SymbolPosition::Before)
        } else {
            Some(SymbolPosition::After)
        }
    }

    /// Parse a pattern string into a Pattern.
    pub fn parse(pattern: &str) -> Result<Pattern, PatternError> {
        crate::parser::parse(pattern)
    }
}
