//! Lexer for tokenizing format pattern strings.
//!
//! The lexer converts pattern strings into a stream of tokens that can be
//! processed by the parser. It handles special cases like:
//! - Quoted strings ("EUR ") become QuotedString tokens
//! - Escaped characters (\$) become EscapedChar tokens
//! - `0` and `#` inside `[...]` are still digits; the parser marks them optional

use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for format pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            // Quoted string
            '"' => self.lex_quoted_string()?,

            // Escaped character
            '\\' => self.lex_escaped_char()?,

            _ => {
                self.advance();
                match ch {
                    '0' => Token::Zero,
                    '#' => Token::Hash,
                    '.' => Token::DecimalPoint,
                    ',' => Token::Grouping,
                    '$' => Token::Currency,
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '(' => Token::OpenParen,
                    ')' => Token::CloseParen,
                    '[' => Token::OpenBracket,
                    ']' => Token::CloseBracket,
                    // Everything else is a literal
                    _ => Token::Literal(ch),
                }
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Lexes a quoted string ("...").
    fn lex_quoted_string(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::QuotedString(content));
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(PatternError::UnexpectedToken {
                position: start,
                found: '\\',
            }),
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_multibyte_literal_span() {
        let mut lexer = Lexer::new("€0");
        let euro = lexer.next_token().unwrap();
        assert_eq!(euro.token, Token::Literal('€'));
        assert_eq!((euro.start, euro.end), (0, 3));
        let zero = lexer.next_token().unwrap();
        assert_eq!(zero.token, Token::Zero);
        assert_eq!(zero.start, 3);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = Lexer::new("0 \"EUR").tokenize().unwrap_err();
        assert_eq!(err, PatternError::UnterminatedQuote { position: 2 });
    }
}
