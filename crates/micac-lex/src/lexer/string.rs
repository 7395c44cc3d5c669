//! String literal lexing.
//!
//! This module handles both quote styles. The token text is the *decoded*
//! content: quotes stripped, escape sequences resolved.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Fixed escape table. Returns the decoded character, or `None` for
/// unrecognized escapes (which pass through with the backslash retained).
fn escape_char(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The opening quote fixes the quote style (`'` or `"`); the closer
    /// must match the same character. Inside the literal:
    /// - a backslash escape is decoded via the fixed escape table, and an
    ///   unrecognized escape passes through literally (backslash kept),
    /// - in single-quoted strings only, a doubled quote (`''`) decodes to
    ///   one literal quote and does not terminate the string,
    /// - any other character is appended verbatim.
    ///
    /// # Errors
    ///
    /// Reaching end of input before the closing quote is an
    /// [`LexError::UnterminatedString`] at the string's starting position.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        let quote = self.cursor.current_char();
        self.cursor.advance(); // opening quote

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    span: self.token_span(),
                });
            }

            let c = self.cursor.current_char();

            if c == quote {
                // '' inside a single-quoted literal is one literal quote.
                if quote == '\'' && self.cursor.peek_char(1) == '\'' {
                    self.cursor.advance();
                    self.cursor.advance();
                    content.push('\'');
                    continue;
                }
                self.cursor.advance(); // closing quote
                break;
            }

            if c == '\\' {
                self.cursor.advance();
                let esc = self.cursor.current_char();
                match escape_char(esc) {
                    Some(decoded) => {
                        content.push(decoded);
                        self.cursor.advance();
                    }
                    None => {
                        content.push('\\');
                        if !self.cursor.is_at_end() {
                            content.push(esc);
                            self.cursor.advance();
                        }
                    }
                }
                continue;
            }

            content.push(c);
            self.cursor.advance();
        }

        self.table.record_constant(&content);
        Ok(self.token(TokenKind::String, content))
    }
}
