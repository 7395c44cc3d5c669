//! micac-lex - Lexical Analyzer for the Mica Programming Language
//!
//! This crate provides the complete lexer (tokenizer) for Mica, a small
//! C-like toy language. It transforms source code into a flat sequence of
//! classified tokens plus a lexical table summarizing the identifiers and
//! constants encountered.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The scanner is a
//! single-pass, character-by-character state machine: maximal-munch
//! tokenization, bounded lookahead for disambiguation (a decimal point vs.
//! the `.` separator, scientific-notation `e` vs. an identifier start), and
//! full escape/quote handling inside string literals, while tracking the
//! 1-based line/column of every lexeme for error reporting.
//!
//! # Example Usage
//!
//! ```
//! use micac_lex::{Lexer, TokenKind};
//!
//! let source = "let x = 42; // the answer";
//! let output = Lexer::new(source).tokenize().unwrap();
//!
//! // The token stream always ends with the END marker.
//! assert_eq!(output.tokens.last().unwrap().kind, TokenKind::Eof);
//!
//! // The lexical table reports sorted identifiers and constants.
//! assert_eq!(output.table.identifiers(), vec!["x"]);
//! assert_eq!(output.table.constants(), vec!["42"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token types and the fixed keyword/operator/separator tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`table`] - The lexical table accumulator
//! - [`error`] - The fatal lexical error taxonomy
//!
//! # Token Categories
//!
//! - **Keywords**: `let`, `const`, `if`, `else`, `while`, `for`, `fn`,
//!   `return`, `print`, `true`, `false`, `null`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`, keywords excluded
//! - **Integers**: `42`
//! - **Floats**: `12.34`, `5.1e3`, `1e-2`, `2.0E+5`
//! - **Strings**: `'single'` or `"double"` quoted; escapes `\n`, `\t`,
//!   `\\`, `\'`, `\"`; `''` in single-quoted literals is a literal quote
//! - **Operators**: see [`OPERATORS`] (first match wins, longest first)
//! - **Separators**: `( ) { } [ ] , ; : .`
//! - **END**: end-of-input marker, always last

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod lexer;
pub mod table;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{LexOutput, Lexer};
pub use table::LexicalTable;
pub use token::{
    is_ident_continue, is_ident_start, is_keyword, is_separator, Token, TokenKind, KEYWORDS,
    OPERATORS, SEPARATORS,
};
