//! Lexical error types.
//!
//! Every error is fatal for the scan that raised it: the lexer returns no
//! partial token list and makes no attempt to resynchronize. Each variant
//! carries the [`Span`] at which the problematic construct began.

use micac_util::Span;
use thiserror::Error;

/// A fatal lexical error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached inside a string literal. The span points at
    /// the opening quote.
    #[error("unterminated string literal at {span}")]
    UnterminatedString {
        /// Where the string literal began
        span: Span,
    },

    /// End of input was reached inside a block comment. The span points at
    /// the comment opener.
    #[error("unterminated block comment at {span}")]
    UnterminatedBlockComment {
        /// Where the block comment began
        span: Span,
    },

    /// A character matched none of: whitespace, quote, comment opener,
    /// digit, letter/underscore, separator, operator candidate.
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// The character's own position
        span: Span,
    },
}

impl LexError {
    /// The span at which the problematic construct began.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedBlockComment { span }
            | LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    /// The error message without the trailing position, for diagnostic
    /// rendering where the position is shown separately.
    pub fn message(&self) -> String {
        match self {
            LexError::UnterminatedString { .. } => "unterminated string literal".to_string(),
            LexError::UnterminatedBlockComment { .. } => "unterminated block comment".to_string(),
            LexError::UnexpectedCharacter { ch, .. } => {
                format!("unexpected character '{}'", ch)
            }
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
