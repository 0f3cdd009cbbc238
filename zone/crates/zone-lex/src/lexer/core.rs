//! Core lexer implementation: dispatch loop and field scanning.

use std::io::Read;

use zone_util::Position;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::resolver::{parse_class_numeric, parse_type_numeric, TypeClassResolver};
use crate::token::{Token, TokenKind};

/// A token's text (and a comment's, before it's attached) is capped at
/// this many bytes; a longer run is reported as an error token rather than
/// grown without bound.
pub const MAX_TOK: usize = 2048;

/// Lexer for DNS master-file syntax.
///
/// `R` is the byte source; `T` resolves mnemonic type/class names the
/// lexer has no vocabulary of its own for (see [`TypeClassResolver`]).
pub struct Lexer<R, T> {
    pub(super) cursor: Cursor<R>,
    resolver: T,

    /// True at the start of a logical line, before any blank or field has
    /// been consumed on it. The first field seen in this state becomes an
    /// `OWNER` (or a directive keyword); anything after is not.
    pub(super) at_line_start: bool,

    /// Nesting depth of `(...)` grouping. While positive, a `\n` is
    /// whitespace rather than a `NEWLINE` token.
    pub(super) paren_depth: u32,

    /// Whether an `RRTYPE` token has already been produced on the current
    /// logical line; once true, no further `CLASS`/`RRTYPE` reclassification
    /// happens; everything else is plain rdata `STRING`.
    pub(super) rrtype_seen: bool,

    /// True while inside a `"..."` quoted field.
    pub(super) in_quote: bool,

    /// Comment text collected since the last token that carries one,
    /// joined across `;`-comments on parenthesized continuation lines.
    pub(super) comment_buf: String,

    /// One-token lookahead slot, filled by [`Lexer::peek_token`].
    pending: Option<Token>,

    pub(super) unbalanced_reported: bool,
}

impl<R: Read, T: TypeClassResolver> Lexer<R, T> {
    pub fn new(reader: R, resolver: T) -> Self {
        Self {
            cursor: Cursor::new(reader),
            resolver,
            at_line_start: true,
            paren_depth: 0,
            rrtype_seen: false,
            in_quote: false,
            comment_buf: String::new(),
            pending: None,
            unbalanced_reported: false,
        }
    }

    /// Current cursor position (of the last consumed byte).
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Look at the next token without consuming it.
    pub fn peek_token(&mut self) -> &Token {
        if self.pending.is_none() {
            let t = self.scan();
            self.pending = Some(t);
        }
        self.pending.as_ref().expect("just filled")
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        match self.pending.take() {
            Some(t) => t,
            None => self.scan(),
        }
    }

    pub(super) fn take_comment(&mut self) -> String {
        std::mem::take(&mut self.comment_buf)
    }

    fn scan(&mut self) -> Token {
        if let Some(err) = self.cursor.take_io_error() {
            return Token::error(LexError::Io(err).to_string(), self.cursor.position());
        }
        if self.in_quote {
            return self.scan_in_quote();
        }
        loop {
            match self.cursor.peek() {
                None => {
                    let pos = self.cursor.position();
                    if self.paren_depth > 0 && !self.unbalanced_reported {
                        self.unbalanced_reported = true;
                        return Token::error(LexError::UnbalancedBrace.to_string(), pos)
                            .with_comment(self.take_comment());
                    }
                    return Token::new(TokenKind::Eof, "", pos).with_comment(self.take_comment());
                }
                Some(b';') => {
                    if let Some(err) = self.skip_comment() {
                        return err;
                    }
                }
                Some(b'(') => {
                    self.cursor.bump();
                    self.paren_depth += 1;
                }
                Some(b')') => {
                    let pos = self.cursor.position();
                    self.cursor.bump();
                    if self.paren_depth == 0 {
                        return Token::error(LexError::ExtraClosingBrace.to_string(), pos)
                            .with_comment(self.take_comment());
                    }
                    self.paren_depth -= 1;
                }
                Some(b'\n') => {
                    let pos = self.cursor.position();
                    self.cursor.bump();
                    if self.paren_depth > 0 {
                        continue;
                    }
                    self.at_line_start = true;
                    self.rrtype_seen = false;
                    return Token::new(TokenKind::Newline, "\n", pos)
                        .with_comment(self.take_comment());
                }
                Some(b' ') | Some(b'\t') | Some(b'\r') => {
                    let pos = self.cursor.position();
                    let mut text = String::new();
                    while matches!(self.cursor.peek(), Some(b' ') | Some(b'\t') | Some(b'\r')) {
                        text.push(self.cursor.bump().unwrap() as char);
                    }
                    self.at_line_start = false;
                    return Token::new(TokenKind::Blank, text, pos);
                }
                Some(b'"') => {
                    let pos = self.cursor.position();
                    self.cursor.bump();
                    self.in_quote = true;
                    self.at_line_start = false;
                    return Token::new(TokenKind::Quote, "\"", pos);
                }
                Some(_) => return self.scan_field(),
            }
        }
    }

    fn scan_field(&mut self) -> Token {
        let pos = self.cursor.position();
        let mut text = String::new();
        loop {
            match self.cursor.peek() {
                None
                | Some(b' ')
                | Some(b'\t')
                | Some(b'\r')
                | Some(b'\n')
                | Some(b';')
                | Some(b'(')
                | Some(b')')
                | Some(b'"') => break,
                Some(b'\\') => {
                    text.push(self.cursor.bump().unwrap() as char);
                    if let Some(b) = self.cursor.bump() {
                        text.push(b as char);
                    }
                }
                Some(b) => {
                    text.push(b as char);
                    self.cursor.bump();
                }
            }
            if text.len() > MAX_TOK {
                return Token::error(LexError::TokenTooLong.to_string(), pos);
            }
        }
        self.classify_field(text, pos)
    }

    fn classify_field(&mut self, text: String, pos: Position) -> Token {
        let was_line_start = self.at_line_start;
        self.at_line_start = false;
        let comment = self.take_comment();

        if was_line_start {
            if let Some(kind) = directive_kind(&text) {
                return Token::new(kind, text, pos).with_comment(comment);
            }
            return Token::new(TokenKind::Owner, text, pos).with_comment(comment);
        }

        if !self.rrtype_seen {
            let upper = text.to_ascii_uppercase();
            if let Some(n) = parse_class_numeric(&upper).or_else(|| self.resolver.resolve_class(&upper)) {
                return Token::new(TokenKind::Class, text, pos)
                    .with_torc(n)
                    .with_comment(comment);
            }
            if let Some(n) = parse_type_numeric(&upper).or_else(|| self.resolver.resolve_type(&upper)) {
                self.rrtype_seen = true;
                return Token::new(TokenKind::Rrtype, text, pos)
                    .with_torc(n)
                    .with_comment(comment);
            }
        }

        Token::new(TokenKind::String, text, pos).with_comment(comment)
    }
}

fn directive_kind(text: &str) -> Option<TokenKind> {
    match text.to_ascii_uppercase().as_str() {
        "$TTL" => Some(TokenKind::DirTtl),
        "$ORIGIN" => Some(TokenKind::DirOrigin),
        "$INCLUDE" => Some(TokenKind::DirInclude),
        "$GENERATE" => Some(TokenKind::DirGenerate),
        _ => None,
    }
}

impl<R: Read, T: TypeClassResolver> Iterator for Lexer<R, T> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let t = self.next_token();
        if t.kind == TokenKind::Eof {
            None
        } else {
            Some(t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::str_reader;
    use crate::resolver::NullResolver;

    fn lex_all(src: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(str_reader(src), NullResolver);
        let mut out = Vec::new();
        loop {
            let t = lexer.next_token();
            let done = t.kind == TokenKind::Eof;
            out.push(t);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn owner_at_column_one() {
        let toks = lex_all("example.com. 3600 IN A 1.2.3.4\n");
        assert_eq!(toks[0].kind, TokenKind::Owner);
        assert_eq!(toks[0].text, "example.com.");
    }

    #[test]
    fn blank_leading_means_no_owner() {
        let toks = lex_all("  3600 IN A 1.2.3.4\n");
        assert_eq!(toks[0].kind, TokenKind::Blank);
        assert_eq!(toks[1].kind, TokenKind::String);
        assert_eq!(toks[1].text, "3600");
    }

    #[test]
    fn paren_continuation_suppresses_newline() {
        let toks = lex_all("@ IN SOA ns1. admin. (\n  1 2 3 4 5\n)\n");
        let newlines = toks.iter().filter(|t| t.kind == TokenKind::Newline).count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn extra_closing_brace_errors() {
        let toks = lex_all("@ IN A 1.2.3.4)\n");
        assert!(toks.iter().any(|t| t.err && t.text == "extra closing brace"));
    }

    #[test]
    fn unbalanced_brace_at_eof() {
        let toks = lex_all("@ IN SOA ns1. admin. (\n1 2 3 4 5\n");
        assert!(toks.iter().any(|t| t.err && t.text == "unbalanced brace"));
    }

    #[test]
    fn quoted_field_brackets_a_string() {
        let toks = lex_all("@ TXT \"hello world\"\n");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Quote));
        assert!(toks.iter().any(|t| t.kind == TokenKind::String && t.text == "hello world"));
    }

    #[test]
    fn comment_attaches_to_following_token() {
        let toks = lex_all("; header comment\n@ IN A 1.2.3.4\n");
        assert_eq!(toks[0].kind, TokenKind::Newline);
        assert_eq!(toks[0].comment, "; header comment");
    }

    #[test]
    fn directive_keyword_recognized() {
        let toks = lex_all("$TTL 3600\n");
        assert_eq!(toks[0].kind, TokenKind::DirTtl);
    }

    #[test]
    fn escaped_space_stays_in_one_field() {
        let toks = lex_all("foo\\ bar. IN A 1.2.3.4\n");
        assert_eq!(toks[0].kind, TokenKind::Owner);
        assert_eq!(toks[0].text, "foo\\ bar.");
    }
}
