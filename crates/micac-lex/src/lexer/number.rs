//! Number literal lexing.
//!
//! Numbers are scanned left to right with no backtracking. The token text
//! is the verbatim source spelling; interpreting it as a numeric value is a
//! later phase's job.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Grammar:
    /// - integer part: maximal run of digits (the dispatch loop guarantees
    ///   at least one),
    /// - optional fractional part: only consumed if `.` is immediately
    ///   followed by a digit, so a trailing dot stays a separator,
    /// - optional exponent part: only consumed if `e`/`E` is immediately
    ///   followed by a digit, or by `+`/`-` and then a digit.
    ///
    /// The token is `Float` if either optional part was consumed and `Int`
    /// otherwise. The literal text is inserted into the constant set.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_float = false;

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance(); // '.'
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let next = self.cursor.peek_char(1);
            let signed_exponent =
                matches!(next, '+' | '-') && self.cursor.peek_char(2).is_ascii_digit();
            if next.is_ascii_digit() || signed_exponent {
                is_float = true;
                self.cursor.advance(); // 'e' / 'E'
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        self.table.record_constant(text);

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.token(kind, text)
    }
}
