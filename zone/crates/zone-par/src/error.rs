//! The parser's sole error type.
//!
//! Every syntactic or semantic failure — a lexical error token bubbled up,
//! a malformed record header, a directive with a bad argument, a
//! collaborator rejecting a name or rdata — is funneled through this one
//! shape and rendered the same way, since once the parser fails it never
//! recovers: the first error is sticky and every subsequent `next()` call
//! on a `Parser` returns a clone of it.

use std::fmt;

use zone_util::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file: Option<String>,
    pub message: String,
    pub token: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(
        file: Option<String>,
        message: impl Into<String>,
        token: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            file,
            message: message.into(),
            token: token.into(),
            position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("<stdin>");
        write!(
            f,
            "{file}: dns: {}: \"{}\" at line: {}",
            self.message, self.token, self.position
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_expected_form() {
        let e = ParseError::new(
            Some("db.example".into()),
            "not a TTL",
            "abc",
            Position::new(4, 9),
        );
        assert_eq!(e.to_string(), "db.example: dns: not a TTL: \"abc\" at line: 4:9");
    }

    #[test]
    fn falls_back_to_stdin_with_no_file() {
        let e = ParseError::new(None, "bad class", "XX", Position::new(1, 1));
        assert!(e.to_string().starts_with("<stdin>: dns:"));
    }
}
