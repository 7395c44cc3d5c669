//! Operator lexing.

use crate::token::{Token, TokenKind, OPERATORS};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Attempts to lex an operator at the current position.
    ///
    /// Candidates from [`OPERATORS`] are tried in list order and the first
    /// match wins; the list is ordered so that no candidate is shadowed by
    /// one of its own prefixes (`===` before `==` before `=`). On a match
    /// exactly that many characters are consumed. Returns `None` if no
    /// candidate matches, letting the dispatch loop raise the lexical
    /// error.
    pub(crate) fn lex_operator(&mut self) -> Option<Token> {
        for op in OPERATORS {
            if self.cursor.starts_with(op) {
                self.cursor.advance_n(op.len());
                return Some(self.token(TokenKind::Operator, *op));
            }
        }
        None
    }
}
