//! Token type definitions and the fixed classification tables.
//!
//! The Mica lexer classifies every lexeme into one of the [`TokenKind`]
//! categories. The keyword, operator, and separator sets are fixed and
//! closed; they are exported as constants so that consumers (the driver,
//! reports) can display them without duplicating the tables.

use std::fmt;

/// Category of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name that is not a keyword: `x`, `count`, `_tmp`
    Ident,
    /// A reserved word: `let`, `if`, `while`, ...
    Keyword,
    /// An integer literal: `42`
    Int,
    /// A floating-point literal, including scientific notation: `3.14`, `1e-2`
    Float,
    /// A string literal; the token text is the decoded content
    String,
    /// An operator from [`OPERATORS`]: `==`, `+=`, `&&`, ...
    Operator,
    /// A single-character separator from [`SEPARATORS`]: `(`, `;`, `.`, ...
    Separator,
    /// End-of-input marker, always the last token of a scan
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Eof => "END",
        };
        write!(f, "{}", name)
    }
}

/// A single token produced by the lexer.
///
/// Tokens are produced once and never mutated. `text` holds the lexeme —
/// for string literals the *decoded* content (quotes stripped, escapes
/// resolved), for everything else the literal source spelling. `line` and
/// `column` are 1-based and refer to the first character of the lexeme;
/// the [`TokenKind::Eof`] token carries empty text and the final cursor
/// position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// Literal or decoded lexeme
    pub text: String,
    /// Line (1-based) where the lexeme starts
    pub line: u32,
    /// Column (1-based, in characters) where the lexeme starts
    pub column: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "END@{}:{}", self.line, self.column)
        } else {
            write!(f, "{}({:?})@{}:{}", self.kind, self.text, self.line, self.column)
        }
    }
}

/// The reserved words of Mica, sorted for reporting.
pub const KEYWORDS: &[&str] = &[
    "const", "else", "false", "fn", "for", "if", "let", "null", "print", "return", "true", "while",
];

/// Operator candidates, in match order.
///
/// The operator scanner tries these in order and the first match wins, so
/// every operator must appear before any of its proper prefixes. The order
/// is part of the observable reporting surface and must be preserved.
pub const OPERATORS: &[&str] = &[
    "++", "--", "->", "===", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "&&", "||", "=", "+",
    "-", "*", "/", "%", "<", ">", "!",
];

/// Single-character separators, sorted for reporting.
pub const SEPARATORS: &[char] = &['(', ')', ',', '.', ':', ';', '[', ']', '{', '}'];

/// Returns true if `ident` is a reserved word.
#[inline]
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.binary_search(&ident).is_ok()
}

/// Returns true if `c` is a separator character.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Returns true if `c` can start an identifier (ASCII letter or `_`).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier (ASCII letter, digit, or `_`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
