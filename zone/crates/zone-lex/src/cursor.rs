//! Byte cursor over an arbitrary [`Read`] source.
//!
//! The lexer operates on bytes, not `char`s: zone-file syntax is ASCII in
//! every position that carries meaning (quotes, backslash, parens,
//! semicolon, whitespace); everything else is opaque payload passed through
//! untouched. A one-byte peek buffer lets the lexer look ahead without
//! disturbing position tracking, which only advances on an actual consume
//! ([`Cursor::bump`]).
//!
//! Line/column accounting follows a deferred-newline rule: the column of a
//! `\n` byte is the position *of* that byte, and the line number only
//! increments when the *next* byte is read. A token that ends on a newline
//! therefore reports the line it started on.

use std::io::{self, Read};

use zone_util::Position;

pub struct Cursor<R> {
    inner: R,
    peeked: Option<u8>,
    eof: bool,
    io_error: Option<String>,
    line: u32,
    column: u32,
    pending_eol: bool,
}

impl<R: Read> Cursor<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
            eof: false,
            io_error: None,
            line: 1,
            column: 0,
            pending_eol: false,
        }
    }

    /// Position of the most recently consumed byte, or the stream start
    /// before anything has been read.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Sticky reader error, if the underlying `Read` ever failed.
    pub fn take_io_error(&mut self) -> Option<String> {
        self.io_error.take()
    }

    fn fill(&mut self) {
        if self.peeked.is_some() || self.eof || self.io_error.is_some() {
            return;
        }
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(0) => self.eof = true,
            Ok(_) => self.peeked = Some(buf[0]),
            Err(e) => self.io_error = Some(e.to_string()),
        }
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&mut self) -> Option<u8> {
        self.fill();
        self.peeked
    }

    /// Consume and return the next byte, advancing line/column.
    pub fn bump(&mut self) -> Option<u8> {
        self.fill();
        let b = self.peeked.take()?;
        if self.pending_eol {
            self.line += 1;
            self.column = 0;
            self.pending_eol = false;
        }
        self.column += 1;
        if b == b'\n' {
            self.pending_eol = true;
        }
        Some(b)
    }

    pub fn at_eof(&mut self) -> bool {
        self.fill();
        self.peeked.is_none() && self.io_error.is_none()
    }
}

/// Wrap a string as a byte reader, the common case for tests and for
/// parsing a single already-in-memory record.
pub fn str_reader(s: &str) -> io::Cursor<Vec<u8>> {
    io::Cursor::new(s.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column() {
        let mut c = Cursor::new(str_reader("ab\ncd"));
        assert_eq!(c.bump(), Some(b'a'));
        assert_eq!(c.position(), Position::new(1, 1));
        assert_eq!(c.bump(), Some(b'b'));
        assert_eq!(c.position(), Position::new(1, 2));
        assert_eq!(c.bump(), Some(b'\n'));
        assert_eq!(c.position(), Position::new(1, 3));
        assert_eq!(c.bump(), Some(b'c'));
        assert_eq!(c.position(), Position::new(2, 1));
    }

    #[test]
    fn peek_does_not_advance() {
        let mut c = Cursor::new(str_reader("xy"));
        assert_eq!(c.peek(), Some(b'x'));
        assert_eq!(c.peek(), Some(b'x'));
        c.bump();
        assert_eq!(c.position(), Position::new(1, 1));
    }

    #[test]
    fn eof_is_stable() {
        let mut c = Cursor::new(str_reader(""));
        assert!(c.at_eof());
        assert_eq!(c.bump(), None);
        assert_eq!(c.bump(), None);
    }
}
