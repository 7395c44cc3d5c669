//! micac-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the phases of the
//! Mica compiler front end:
//!
//! - [`span`] - Source location tracking ([`Span`])
//! - [`diagnostic`] - Human-readable error rendering ([`Diagnostic`],
//!   [`SourceSnippet`], [`Level`])
//!
//! The crate deliberately has no dependencies on the phase crates so that
//! external tools can use the location and diagnostic types without pulling
//! in the compiler itself.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Level, SourceSnippet};
pub use span::Span;
