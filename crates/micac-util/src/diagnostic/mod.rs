//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for formatting compiler diagnostics for
//! display to the user: a severity [`Level`], a [`SourceSnippet`] that shows
//! the offending source line with a caret, and the [`Diagnostic`] itself.
//!
//! # Examples
//!
//! ```
//! use micac_util::{Diagnostic, Span};
//!
//! let source = "let @ = 1;";
//! let diag = Diagnostic::error("unexpected character '@'", Span::point(4, 1, 5))
//!     .with_source(source);
//!
//! let rendered = diag.to_string();
//! assert!(rendered.starts_with("error: unexpected character '@'"));
//! ```

use std::fmt;

use crate::Span;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that aborts the current phase
    Error,
    /// A warning that does not abort
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single source line displayed beneath a diagnostic, with a caret
/// marking the column where the problem begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content (without the trailing newline)
    pub line: String,
    /// Line number (1-based)
    pub line_number: u32,
    /// Column where the issue starts (1-based, in characters)
    pub column: u32,
}

impl SourceSnippet {
    /// Create a snippet directly from a line of source text
    pub fn new(line: impl Into<String>, line_number: u32, column: u32) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
        }
    }

    /// Extract the snippet for `span` out of the full source text.
    ///
    /// Returns `None` if the span's line does not exist in `source`
    /// (e.g. a span pointing one past the final newline).
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.line == 0 {
            return None;
        }
        let line = source.lines().nth(span.line as usize - 1)?;
        Some(Self::new(line, span.line, span.column))
    }
}

/// A diagnostic message with severity and location
///
/// Rendering via `Display` follows the familiar compiler layout:
///
/// ```text
/// error: unexpected character '@'
///  --> 1:5
///   |
/// 1 | let @ = 1;
///   |     ^
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional source line to display under the message
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            snippet: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    /// Attach the snippet extracted from the full source text, if the
    /// diagnostic's span points at an existing line.
    pub fn with_source(self, source: &str) -> Self {
        match SourceSnippet::from_source(source, self.span) {
            Some(snippet) => self.with_snippet(snippet),
            None => self,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.level, self.message)?;
        write!(f, " --> {}", self.span)?;

        if let Some(snippet) = &self.snippet {
            let gutter = snippet.line_number.to_string();
            let pad = " ".repeat(gutter.len());
            // Clamp the caret onto the line, one past the end at most.
            let line_chars = snippet.line.chars().count() as u32;
            let offset = (snippet.column.max(1) - 1).min(line_chars);
            writeln!(f)?;
            writeln!(f, "{} |", pad)?;
            writeln!(f, "{} | {}", gutter, snippet.line)?;
            write!(f, "{} | {}^", pad, " ".repeat(offset as usize))?;
        }

        Ok(())
    }
}
