//! Parser for numeral-style format patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{DigitPlaceholder, NegativeStyle, Pattern, PatternPart};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a format pattern string into a Pattern.
pub fn parse(pattern: &str) -> Result<Pattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut parser = Parser::new(pattern)?;
    parser.parse()
}

/// Parser for format pattern strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
    /// Start of the open `[` while inside optional decimals
    optional_from: Option<usize>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    fn new(pattern: &'a str) -> Result<Self, PatternError> {
        let mut lexer = Lexer::new(pattern);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            optional_from: None,
        })
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), PatternError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Parse the whole pattern.
    fn parse(&mut self) -> Result<Pattern, PatternError> {
        let mut builder = PatternBuilder::new();

        loop {
            let position = self.current.start;
            match &self.current.token {
                Token::Eof => break,

                // Digit placeholders
                Token::Zero => {
                    let placeholder = if self.optional_from.is_some() {
                        DigitPlaceholder::Hash
                    } else {
                        DigitPlaceholder::Zero
                    };
                    builder.add_part(PatternPart::Digit(placeholder));
                }
                Token::Hash => builder.add_part(PatternPart::Digit(DigitPlaceholder::Hash)),

                // Neutral markers
                Token::DecimalPoint => {
                    if builder.seen_decimal {
                        return Err(PatternError::DuplicateDecimalPoint { position });
                    }
                    builder.seen_decimal = true;
                    builder.add_part(PatternPart::DecimalPoint);
                }
                Token::Grouping => builder.add_part(PatternPart::Grouping),
                Token::Currency => builder.add_part(PatternPart::Currency),

                // Signs: the first one fixes the sign position, later ones are text
                Token::Plus | Token::Minus => {
                    let plus = matches!(self.current.token, Token::Plus);
                    if builder.has_sign {
                        builder.add_part(PatternPart::Literal(if plus { "+" } else { "-" }.into()));
                    } else {
                        builder.has_sign = true;
                        builder.always_sign = plus;
                        builder.add_part(PatternPart::Sign);
                    }
                }
                Token::OpenParen => {
                    builder.open_paren.get_or_insert(builder.parts.len());
                    builder.add_part(PatternPart::Literal("(".into()));
                }
                Token::CloseParen => {
                    builder.close_paren = Some(builder.parts.len());
                    builder.add_part(PatternPart::Literal(")".into()));
                }

                // Optional decimals
                Token::OpenBracket => {
                    if self.optional_from.is_some() {
                        return Err(PatternError::UnexpectedToken {
                            position,
                            found: '[',
                        });
                    }
                    self.optional_from = Some(position);
                }
                Token::CloseBracket => {
                    if self.optional_from.take().is_none() {
                        // Unmatched close bracket - treat as literal
                        builder.add_part(PatternPart::Literal("]".into()));
                    }
                }

                // Literals
                Token::Literal(ch) | Token::EscapedChar(ch) => {
                    builder.add_part(PatternPart::Literal(ch.to_string()));
                }
                Token::QuotedString(s) => {
                    builder.add_part(PatternPart::Literal(s.clone()));
                }
            }
            self.advance()?;
        }

        if let Some(position) = self.optional_from {
            return Err(PatternError::UnterminatedBracket { position });
        }

        builder.build()
    }
}

/// Helper struct for building patterns.
struct PatternBuilder {
    parts: Vec<PatternPart>,
    seen_decimal: bool,
    has_sign: bool,
    always_sign: bool,
    open_paren: Option<usize>,
    close_paren: Option<usize>,
}

impl PatternBuilder {
    fn new() -> Self {
        Self {
            parts: Vec::new(),
            seen_decimal: false,
            has_sign: false,
            always_sign: false,
            open_paren: None,
            close_paren: None,
        }
    }

    fn add_part(&mut self, part: PatternPart) {
        self.parts.push(part);
    }

    fn build(mut self) -> Result<Pattern, PatternError> {
        if !self
            .parts
            .iter()
            .any(|p| matches!(p, PatternPart::Digit(_)))
        {
            return Err(PatternError::NoDigitPlaceholder);
        }

        // A matched pair of parentheses is the negative marker, not text
        let negative = match (self.open_paren, self.close_paren) {
            (Some(open), Some(close)) if open < close && !self.has_sign => {
                self.parts.remove(close);
                self.parts.remove(open);
                NegativeStyle::Parentheses
            }
            _ => NegativeStyle::Minus,
        };

        Ok(Pattern::from_parts(self.parts, negative, self.always_sign))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert_eq!(result, Err(PatternError::EmptyPattern));
    }

    #[test]
    fn test_parse_currency_pattern() {
        let pattern = parse("$0,0.00").unwrap();
        assert_eq!(
            pattern.parts(),
            &[
                PatternPart::Currency,
                PatternPart::Digit(DigitPlaceholder::Zero),
                PatternPart::Grouping,
                PatternPart::Digit(DigitPlaceholder::Zero),
                PatternPart::DecimalPoint,
                PatternPart::Digit(DigitPlaceholder::Zero),
                PatternPart::Digit(DigitPlaceholder::Zero),
            ]
        );
        assert_eq!(pattern.negative_style(), NegativeStyle::Minus);
    }

    #[test]
    fn test_parse_optional_decimals() {
        let pattern = parse("0.[00]").unwrap();
        assert_eq!(
            &pattern.parts()[2..],
            &[
                PatternPart::Digit(DigitPlaceholder::Hash),
                PatternPart::Digit(DigitPlaceholder::Hash),
            ]
        );
    }

    #[test]
    fn test_parse_parentheses() {
        let pattern = parse("($0,0.00)").unwrap();
        assert_eq!(pattern.negative_style(), NegativeStyle::Parentheses);
        assert_eq!(pattern.parts()[0], PatternPart::Currency);
        assert!(!pattern
            .parts()
            .iter()
            .any(|p| matches!(p, PatternPart::Literal(_))));
    }

    #[test]
    fn test_unmatched_paren_is_literal() {
        let pattern = parse("0)").unwrap();
        assert_eq!(pattern.negative_style(), NegativeStyle::Minus);
        assert_eq!(pattern.parts()[1], PatternPart::Literal(")".into()));
    }

    #[test]
    fn test_plus_sign() {
        let pattern = parse("+$0.00").unwrap();
        assert!(pattern.shows_plus_sign());
        assert!(pattern.has_sign_position());
        assert_eq!(pattern.parts()[0], PatternPart::Sign);
    }

    #[test]
    fn test_second_sign_is_literal() {
        let pattern = parse("-0-").unwrap();
        assert_eq!(pattern.parts()[2], PatternPart::Literal("-".into()));
    }

    #[test]
    fn test_duplicate_decimal_point() {
        assert_eq!(
            parse("0.0.0"),
            Err(PatternError::DuplicateDecimalPoint { position: 3 })
        );
    }

    #[test]
    fn test_unterminated_bracket() {
        assert_eq!(
            parse("0.[00"),
            Err(PatternError::UnterminatedBracket { position: 2 })
        );
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse("$"), Err(PatternError::NoDigitPlaceholder));
    }
}
