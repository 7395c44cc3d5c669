//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop, and the
//! batch tokenization entry point.

use micac_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::table::LexicalTable;
use crate::token::{is_ident_start, is_separator, Token, TokenKind};

/// Lexer for Mica source code.
///
/// The lexer transforms source text into a stream of tokens while building
/// a [`LexicalTable`] of the identifiers and constants it encounters. It is
/// a single-pass scanner: one cursor moves forward over the input, and each
/// dispatch step classifies the current character and hands off to the
/// matching scanning routine.
///
/// # Example
///
/// ```
/// use micac_lex::{Lexer, TokenKind};
///
/// let output = Lexer::new("let x = 42;").tokenize().unwrap();
///
/// assert_eq!(output.tokens.len(), 6); // let, x, =, 42, ;, END
/// assert_eq!(output.tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(output.tokens[3].text, "42");
/// assert_eq!(output.tokens[5].kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Accumulating identifier/constant table.
    pub(crate) table: LexicalTable,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once `Eof` or an error has been produced, to fuse iteration.
    done: bool,
}

/// Everything a completed scan produces: the ordered token sequence
/// (terminated by the `Eof` token) and the lexical table.
#[derive(Clone, Debug)]
pub struct LexOutput {
    /// Tokens in source order; the last element is always `Eof`.
    pub tokens: Vec<Token>,
    /// Identifiers and constants observed during the scan.
    pub table: LexicalTable,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            table: LexicalTable::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            done: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace and comments are consumed and discarded first; the next
    /// lexeme is then classified by its first character. At the end of
    /// input this returns the `Eof` token (with empty text and the final
    /// cursor position), every time it is called.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] on an unterminated string literal or block
    /// comment, or on a character no rule accepts. Errors are fatal: the
    /// scan has no recovery strategy.
    pub fn next_token(&mut self) -> LexResult<Token> {
        loop {
            self.cursor.skip_whitespace();
            self.mark_token_start();

            if self.cursor.is_at_end() {
                return Ok(self.token(TokenKind::Eof, ""));
            }

            let c = self.cursor.current_char();

            // Strings before comment detection: the string scanner owns
            // every character up to its closing quote, so `//` inside a
            // literal is never seen as a comment opener.
            if c == '\'' || c == '"' {
                return self.lex_string();
            }

            if self.skip_comment()? {
                continue;
            }

            if c.is_ascii_digit() {
                return Ok(self.lex_number());
            }

            if is_ident_start(c) {
                return Ok(self.lex_identifier());
            }

            if is_separator(c) {
                self.cursor.advance();
                return Ok(self.token(TokenKind::Separator, c.to_string()));
            }

            if let Some(token) = self.lex_operator() {
                return Ok(token);
            }

            return Err(LexError::UnexpectedCharacter {
                ch: c,
                span: Span::point(self.token_start, self.token_start_line, self.token_start_column),
            });
        }
    }

    /// Runs the scan to completion.
    ///
    /// Consumes the lexer and returns the full token sequence (terminated
    /// by `Eof`) together with the lexical table, or the first fatal error.
    pub fn tokenize(mut self) -> LexResult<LexOutput> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }
        Ok(LexOutput {
            tokens,
            table: self.table,
        })
    }

    /// The table accumulated so far.
    pub fn table(&self) -> &LexicalTable {
        &self.table
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Records the cursor position as the start of the next token.
    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token positioned at the recorded token start.
    pub(crate) fn token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_start_line, self.token_start_column)
    }

    /// Span from the recorded token start to the current cursor position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields tokens until `Eof` (which is not yielded) or the first error
    /// (yielded once, after which the iterator is exhausted).
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
