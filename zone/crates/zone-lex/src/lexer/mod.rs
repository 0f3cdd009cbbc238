//! Lexer module.
//!
//! Split the way the token alphabet is split conceptually:
//! - `core` — the `Lexer` struct, its dispatch loop, and field scanning
//! - `comment` — comment skipping and cross-line joining
//! - `quoting` — quoted-string scanning

mod comment;
mod core;
mod quoting;

pub use core::{Lexer, MAX_TOK};
