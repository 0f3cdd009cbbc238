//! The token alphabet produced by the lexer.

use zone_util::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An unquoted or quoted run of text.
    String,
    /// A run of whitespace significant only as a field separator.
    Blank,
    /// The `"` delimiter itself, emitted so the parser can tell a
    /// quoted empty string from no string at all.
    Quote,
    /// End of a (logical, brace-joined) line.
    Newline,
    /// A `String` reclassified because it began in column 1 outside of
    /// brace nesting: a new owner name.
    Owner,
    /// A `String` reclassified because it names a known or numeric
    /// (`TYPE<n>`) resource record type.
    Rrtype,
    /// A `String` reclassified because it names a known or numeric
    /// (`CLASS<n>`) record class.
    Class,
    DirTtl,
    DirOrigin,
    DirInclude,
    DirGenerate,
    Eof,
}

/// One lexical token, with its text, position, and any trailing same-line
/// comment that was attached to it by the comment-joining rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Numeric form of a RRTYPE/CLASS token, if the lexer could resolve
    /// it (either by the `TYPE<n>`/`CLASS<n>` escape or collaborator
    /// lookup). `None` for anything else, including an unresolved
    /// RRTYPE/CLASS string left for the parser to reject.
    pub torc: Option<u16>,
    pub position: Position,
    pub comment: String,
    /// Set when this token represents a lexical error; `text` then holds
    /// the error message instead of source text.
    pub err: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            torc: None,
            position,
            comment: String::new(),
            err: false,
        }
    }

    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: TokenKind::String,
            text: message.into(),
            torc: None,
            position,
            comment: String::new(),
            err: true,
        }
    }

    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_torc(mut self, torc: u16) -> Self {
        self.torc = Some(torc);
        self
    }
}
