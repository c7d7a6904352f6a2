//! Token types for the format pattern lexer.

/// A token in a format pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Digit placeholders
    Zero, // 0
    Hash, // #

    // Neutral markers
    DecimalPoint, // .
    Grouping,     // ,
    Currency,     // $

    // Signs
    Plus,       // +
    Minus,      // -
    OpenParen,  // (
    CloseParen, // )

    // Optional decimals
    OpenBracket,  // [
    CloseBracket, // ]

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
