//! Lexical error messages.
//!
//! These render verbatim as a token's error text; keep the wording stable
//! since `zonectl` and callers match on it.

#[derive(Debug, Clone, thiserror::Error)]
pub enum LexError {
    #[error("extra closing brace")]
    ExtraClosingBrace,
    #[error("unbalanced brace")]
    UnbalancedBrace,
    #[error("token length insufficient for parsing")]
    TokenTooLong,
    #[error("comment length insufficient for parsing")]
    CommentTooLong,
    #[error("{0}")]
    Io(String),
}
