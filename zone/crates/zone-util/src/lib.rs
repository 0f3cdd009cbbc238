//! zone-util — position tracking and diagnostic primitives.
//!
//! This crate carries the small amount of machinery shared by the lexer,
//! parser and CLI: a source `Position`/`Span`, and a `Diagnostic`/`Level`
//! pair used to render a parse failure with a source excerpt.
//!
//! It is deliberately small. An earlier iteration of this crate carried a
//! full diagnostic-code and multi-slice-snippet system; this spec's error
//! contract is a single `(file, message, token, line, column)` tuple, so that
//! machinery was trimmed down to what is actually rendered (see DESIGN.md).

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use span::{Position, Span};
