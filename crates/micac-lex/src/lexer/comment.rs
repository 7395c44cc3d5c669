//! Comment skipping.

use crate::error::{LexError, LexResult};
use crate::Lexer;

/// Line comment opener; runs to end of line.
const LINE_COMMENT: &str = "//";
/// Block comment opener.
const BLOCK_COMMENT_START: &str = "/*";
/// Block comment closer.
const BLOCK_COMMENT_END: &str = "*/";

impl<'a> Lexer<'a> {
    /// Consumes a comment at the current position, if one starts here.
    ///
    /// Returns `true` if a comment was consumed (the dispatch loop then
    /// restarts), `false` if the current character does not open a comment.
    /// Line comments run up to but not including the next newline; block
    /// comments run to the first `*/` and do not nest.
    ///
    /// # Errors
    ///
    /// Reaching end of input inside a block comment is an
    /// [`LexError::UnterminatedBlockComment`] at the opening position.
    pub(crate) fn skip_comment(&mut self) -> LexResult<bool> {
        if self.cursor.starts_with(LINE_COMMENT) {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            return Ok(true);
        }

        if self.cursor.starts_with(BLOCK_COMMENT_START) {
            self.cursor.advance();
            self.cursor.advance();

            loop {
                if self.cursor.is_at_end() {
                    return Err(LexError::UnterminatedBlockComment {
                        span: self.token_span(),
                    });
                }
                if self.cursor.starts_with(BLOCK_COMMENT_END) {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(true);
                }
                self.cursor.advance();
            }
        }

        Ok(false)
    }
}
