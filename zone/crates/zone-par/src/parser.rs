//! The record-driving state machine.

use std::collections::VecDeque;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::trace;
use zone_lex::{Lexer, Token, TokenKind};
use zone_util::Position;

use crate::decoder::RDataDecoder;
use crate::error::ParseError;
use crate::name;

/// Nesting limit for `$INCLUDE`, matching the depth a recursive-descent
/// stack this small can unwind safely without a dedicated cycle check.
pub const MAX_INCLUDE_DEPTH: usize = 7;

pub const CLASS_IN: u16 = 1;

/// A fully resolved resource record: absolute owner name, effective TTL
/// and class (after defaulting), collaborator-decoded rdata, and any
/// trailing same-line comment.
#[derive(Debug, Clone)]
pub struct Record<T> {
    pub name: String,
    pub ttl: u32,
    pub class: u16,
    pub rrtype: u16,
    pub rdata: T,
    pub comment: String,
}

pub(crate) struct Frame<D> {
    pub(crate) lexer: Lexer<Box<dyn Read>, D>,
    pub(crate) file: Option<PathBuf>,
}

pub(crate) enum StepOutcome<T> {
    Continue,
    Done,
    Record(Record<T>),
    Records(Vec<Record<T>>),
}

/// Parses a stream of master-file text into [`Record`]s, driving
/// `$TTL`/`$ORIGIN`/`$INCLUDE`/`$GENERATE` directives and RR-header
/// defaulting along the way. Generic over the record-semantics
/// collaborator `D`; the parser itself never inspects rdata.
pub struct Parser<D: RDataDecoder + Clone> {
    pub(crate) decoder: D,
    pub(crate) stack: Vec<Frame<D>>,
    pub(crate) origin: String,
    pub(crate) default_ttl: u32,
    pub(crate) default_ttl_is_directive: bool,
    pub(crate) current_owner: Option<String>,
    pub(crate) sticky_error: Option<ParseError>,
    pub(crate) queued: VecDeque<Record<D::RData>>,
    pub(crate) max_include_depth: usize,
}

impl<D: RDataDecoder + Clone> Parser<D> {
    /// Build a parser over an in-memory or streaming reader. `file_name`
    /// is used only for error messages and `$INCLUDE` path resolution.
    pub fn new(reader: impl Read + 'static, file_name: Option<PathBuf>, decoder: D) -> Self {
        let lexer = Lexer::new(Box::new(reader) as Box<dyn Read>, decoder.clone());
        Self {
            decoder,
            stack: vec![Frame {
                lexer,
                file: file_name,
            }],
            origin: ".".to_string(),
            default_ttl: 3600,
            default_ttl_is_directive: false,
            current_owner: None,
            sticky_error: None,
            queued: VecDeque::new(),
            max_include_depth: MAX_INCLUDE_DEPTH,
        }
    }

    /// Overrides the default TTL used before any `$TTL` directive or
    /// explicit per-record TTL has been seen.
    pub fn set_default_ttl(&mut self, ttl: u32) {
        self.default_ttl = ttl;
    }

    /// Overrides the `$INCLUDE` nesting limit, clamped to
    /// [`MAX_INCLUDE_DEPTH`] — callers may tighten it, never loosen it.
    pub fn set_max_include_depth(&mut self, depth: usize) {
        self.max_include_depth = depth.min(MAX_INCLUDE_DEPTH);
    }

    /// Build a parser reading directly from a file on disk, with
    /// `$INCLUDE` resolved relative to its directory.
    pub fn from_path(path: impl AsRef<Path>, decoder: D) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = std::fs::File::open(&path)?;
        Ok(Self::new(file, Some(path), decoder))
    }

    /// The origin currently in effect (the initial zone origin, or
    /// whatever the most recent `$ORIGIN` set it to).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Pull the next record, or `None` once the stream (and any
    /// `$INCLUDE`s) are exhausted. Once this returns `Some(Err(_))`, it
    /// returns a clone of that same error forever after: the parser does
    /// not attempt to resynchronize past a failure.
    pub fn next(&mut self) -> Option<Result<Record<D::RData>, ParseError>> {
        if let Some(r) = self.queued.pop_front() {
            return Some(Ok(r));
        }
        if let Some(e) = &self.sticky_error {
            return Some(Err(e.clone()));
        }
        loop {
            match self.step() {
                Ok(StepOutcome::Continue) => continue,
                Ok(StepOutcome::Done) => return None,
                Ok(StepOutcome::Record(r)) => return Some(Ok(r)),
                Ok(StepOutcome::Records(mut rs)) => {
                    if rs.is_empty() {
                        continue;
                    }
                    let first = rs.remove(0);
                    self.queued.extend(rs);
                    return Some(Ok(first));
                }
                Err(e) => {
                    trace!(%e, "parser entering sticky error state");
                    self.sticky_error = Some(e.clone());
                    return Some(Err(e));
                }
            }
        }
    }

    fn step(&mut self) -> Result<StepOutcome<D::RData>, ParseError> {
        loop {
            let kind = self.peek_kind();
            match kind {
                TokenKind::Eof => {
                    if self.stack.len() == 1 {
                        return Ok(StepOutcome::Done);
                    }
                    self.stack.pop();
                    continue;
                }
                TokenKind::Newline | TokenKind::Blank => {
                    self.bump();
                }
                TokenKind::DirTtl => return self.handle_ttl(),
                TokenKind::DirOrigin => return self.handle_origin(),
                TokenKind::DirInclude => return self.handle_include(),
                TokenKind::DirGenerate => return self.handle_generate(),
                TokenKind::Owner => return self.handle_record(true),
                TokenKind::String | TokenKind::Class | TokenKind::Rrtype => {
                    if kind == TokenKind::String {
                        let tok = self.peek_clone();
                        if tok.err {
                            self.bump();
                            return Err(self.err(&tok.text, &tok));
                        }
                    }
                    return self.handle_record(false)
                }
                TokenKind::Quote => {
                    let tok = self.bump();
                    return Err(self.err("unexpected quoted string", &tok));
                }
            }
        }
    }

    fn handle_record(&mut self, has_owner: bool) -> Result<StepOutcome<D::RData>, ParseError> {
        if has_owner {
            let tok = self.bump();
            let expanded = name::expand_at(&tok.text, &self.origin);
            let fq = self
                .decoder
                .fqdn(&expanded, &self.origin)
                .map_err(|m| self.err(&m, &tok))?;
            self.current_owner = Some(fq);
        }
        let owner = match &self.current_owner {
            Some(o) => o.clone(),
            None => {
                let pos = self.position();
                return Err(self.err_at("no owner name established for record", pos));
            }
        };

        let (ttl_explicit, class_explicit, rrtype) = self.parse_header()?;
        let ttl = self.apply_ttl_default(ttl_explicit);
        let class = class_explicit.unwrap_or(CLASS_IN);

        let (fields, comment) = self.collect_rdata_fields()?;
        let rdata = self
            .decoder
            .decode(rrtype, class, &self.origin, &fields)
            .map_err(|m| self.err_at(&m, self.position()))?;

        Ok(StepOutcome::Record(Record {
            name: owner,
            ttl,
            class,
            rrtype,
            rdata,
            comment,
        }))
    }

    pub(crate) fn apply_ttl_default(&mut self, explicit: Option<u32>) -> u32 {
        match explicit {
            Some(v) => {
                if !self.default_ttl_is_directive {
                    self.default_ttl = v;
                }
                v
            }
            None => self.default_ttl,
        }
    }

    /// Collects the rdata-field tokens up to (not including) the
    /// terminating NEWLINE/EOF, returning them along with that token's
    /// trailing comment. A lexical error token ends the record with a
    /// `ParseError` instead of being collected as rdata text.
    fn collect_rdata_fields(&mut self) -> Result<(Vec<String>, String), ParseError> {
        let mut fields = Vec::new();
        loop {
            match self.peek_kind() {
                TokenKind::Newline | TokenKind::Eof => {
                    let comment = self.peek_clone().comment;
                    return Ok((fields, comment));
                }
                TokenKind::Blank | TokenKind::Quote => {
                    self.bump();
                }
                _ => {
                    let tok = self.peek_clone();
                    if tok.err {
                        self.bump();
                        return Err(self.err(&tok.text, &tok));
                    }
                    self.bump();
                    fields.push(tok.text);
                }
            }
        }
    }

    pub(crate) fn peek_kind(&mut self) -> TokenKind {
        self.stack.last_mut().expect("non-empty stack").lexer.peek_token().kind
    }

    pub(crate) fn peek_clone(&mut self) -> Token {
        self.stack.last_mut().expect("non-empty stack").lexer.peek_token().clone()
    }

    pub(crate) fn bump(&mut self) -> Token {
        self.stack.last_mut().expect("non-empty stack").lexer.next_token()
    }

    pub(crate) fn position(&mut self) -> Position {
        self.stack.last_mut().expect("non-empty stack").lexer.position()
    }

    pub(crate) fn skip_blanks(&mut self) {
        while self.peek_kind() == TokenKind::Blank {
            self.bump();
        }
    }

    /// Consumes the rest of the current logical line, accepting only
    /// blanks before the terminating NEWLINE/EOF; anything else is
    /// `"garbage after {what}"`. Returns that token's trailing comment.
    pub(crate) fn slurp_remainder(&mut self, what: &str) -> Result<String, ParseError> {
        loop {
            match self.peek_kind() {
                TokenKind::Blank => {
                    self.bump();
                }
                TokenKind::Newline | TokenKind::Eof => {
                    let comment = self.peek_clone().comment;
                    return Ok(comment);
                }
                _ => {
                    let tok = self.bump();
                    return Err(self.err(&format!("garbage after {what}"), &tok));
                }
            }
        }
    }

    pub(crate) fn expect_string(&mut self, what: &str) -> Result<Token, ParseError> {
        self.skip_blanks();
        let tok = self.peek_clone();
        match tok.kind {
            TokenKind::String | TokenKind::Owner | TokenKind::Class | TokenKind::Rrtype => {
                self.bump();
                Ok(tok)
            }
            _ => Err(self.err(&format!("expected {what}"), &tok)),
        }
    }

    pub(crate) fn current_file(&self) -> Option<String> {
        self.stack
            .last()
            .and_then(|f| f.file.as_ref())
            .map(|p| p.display().to_string())
    }

    pub(crate) fn err(&self, message: &str, tok: &Token) -> ParseError {
        ParseError::new(self.current_file(), message, tok.text.clone(), tok.position)
    }

    pub(crate) fn err_at(&self, message: &str, pos: Position) -> ParseError {
        ParseError::new(self.current_file(), message, String::new(), pos)
    }

    pub(crate) fn resolve_include_path(&self, raw: &str) -> PathBuf {
        let candidate = PathBuf::from(raw);
        if candidate.is_absolute() {
            return candidate;
        }
        for frame in self.stack.iter().rev() {
            if let Some(dir) = frame.file.as_ref().and_then(|f| f.parent()) {
                return dir.join(candidate);
            }
        }
        candidate
    }
}

impl<D: RDataDecoder + Clone> Iterator for Parser<D> {
    type Item = Result<Record<D::RData>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        Parser::next(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::GeneratedRecord;
    use std::io::Cursor;

    #[derive(Clone)]
    struct TestDecoder;

    impl zone_lex::TypeClassResolver for TestDecoder {
        fn resolve_type(&self, s: &str) -> Option<u16> {
            match s {
                "A" => Some(1),
                "NS" => Some(2),
                "CNAME" => Some(5),
                "SOA" => Some(6),
                "MX" => Some(15),
                "TXT" => Some(16),
                _ => None,
            }
        }

        fn resolve_class(&self, s: &str) -> Option<u16> {
            match s {
                "IN" => Some(CLASS_IN),
                "CH" => Some(3),
                _ => None,
            }
        }
    }

    impl RDataDecoder for TestDecoder {
        type RData = Vec<String>;

        fn is_domain_name(&self, s: &str) -> bool {
            !s.is_empty()
        }

        fn fqdn(&self, s: &str, origin: &str) -> Result<String, String> {
            if !self.is_domain_name(s) {
                return Err("not a domain name".to_string());
            }
            if s.ends_with('.') {
                Ok(s.to_string())
            } else if origin == "." {
                Ok(format!("{s}."))
            } else {
                Ok(format!("{s}.{origin}"))
            }
        }

        fn decode(&self, _rrtype: u16, _class: u16, _origin: &str, fields: &[String]) -> Result<Vec<String>, String> {
            Ok(fields.to_vec())
        }

        fn generate(&self, spec: &GenerateSpec, origin: &str) -> Result<Vec<GeneratedRecord<Vec<String>>>, String> {
            let (start, stop) = spec
                .range
                .split_once('-')
                .ok_or_else(|| "bad $GENERATE range".to_string())?;
            let start: u32 = start.parse().map_err(|_| "bad $GENERATE range".to_string())?;
            let stop: u32 = stop.parse().map_err(|_| "bad $GENERATE range".to_string())?;
            let mut out = Vec::new();
            for i in start..=stop {
                let name = self.fqdn(&spec.lhs.replace('$', &i.to_string()), origin)?;
                out.push(GeneratedRecord {
                    name,
                    rdata: vec![spec.rhs.replace('$', &i.to_string())],
                });
            }
            Ok(out)
        }
    }

    fn parser_for(src: &str) -> Parser<TestDecoder> {
        Parser::new(Cursor::new(src.as_bytes().to_vec()), None, TestDecoder)
    }

    #[test]
    fn basic_record_with_explicit_ttl_and_class() {
        let mut p = parser_for("www.example.com. 3600 IN A 192.0.2.1\n");
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.name, "www.example.com.");
        assert_eq!(r.ttl, 3600);
        assert_eq!(r.class, CLASS_IN);
        assert_eq!(r.rrtype, 1);
        assert_eq!(r.rdata, vec!["192.0.2.1".to_string()]);
        assert!(p.next().is_none());
    }

    #[test]
    fn owner_is_sticky_across_records() {
        let mut p = parser_for("host IN A 192.0.2.1\n  A 192.0.2.2\n");
        let first = p.next().unwrap().unwrap();
        assert_eq!(first.name, "host.");
        let second = p.next().unwrap().unwrap();
        assert_eq!(second.name, "host.");
        assert_eq!(second.class, CLASS_IN);
        assert_eq!(second.ttl, first.ttl);
    }

    #[test]
    fn class_does_not_carry_forward_from_a_previous_record() {
        let mut p = parser_for("host CH A 10.0.0.1\nhost2 A 10.0.0.2\n");
        let first = p.next().unwrap().unwrap();
        assert_eq!(first.class, 3);
        let second = p.next().unwrap().unwrap();
        assert_eq!(second.class, CLASS_IN, "class must default to IN, not carry forward");
    }

    #[test]
    fn a_lexical_error_token_in_rdata_is_reported_as_a_parse_error() {
        let mut p = parser_for("host IN A 10.0.0.1)\n");
        let r = p.next().unwrap();
        assert!(r.is_err());
        assert!(r.unwrap_err().message.contains("extra closing brace"));
    }

    #[test]
    fn a_lexical_error_token_as_a_record_header_is_reported_as_a_parse_error() {
        let mut p = parser_for(")\n");
        let r = p.next().unwrap();
        assert!(r.is_err());
        assert!(r.unwrap_err().message.contains("extra closing brace"));
    }

    #[test]
    fn trailing_comment_is_attached_to_the_record() {
        let mut p = parser_for("host IN A 10.0.0.1 ; hi\n");
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.comment, "; hi");
    }

    #[test]
    fn ttl_directive_is_not_overridden_by_a_later_explicit_ttl() {
        let mut p = parser_for("$TTL 60\nhost IN A 192.0.2.1\nhost 999 IN A 192.0.2.2\nhost2 IN A 192.0.2.3\n");
        let a = p.next().unwrap().unwrap();
        assert_eq!(a.ttl, 60);
        let b = p.next().unwrap().unwrap();
        assert_eq!(b.ttl, 999);
        let c = p.next().unwrap().unwrap();
        assert_eq!(c.ttl, 60, "explicit TTL must not override the $TTL default");
    }

    #[test]
    fn explicit_ttl_becomes_default_before_any_directive() {
        let mut p = parser_for("host 100 IN A 192.0.2.1\nhost2 IN A 192.0.2.2\n");
        let a = p.next().unwrap().unwrap();
        assert_eq!(a.ttl, 100);
        let b = p.next().unwrap().unwrap();
        assert_eq!(b.ttl, 100, "pre-$TTL explicit TTL should roll forward as the default");
    }

    #[test]
    fn origin_directive_absolutizes_relative_names() {
        let mut p = parser_for("$ORIGIN example.com.\nwww IN A 192.0.2.1\n");
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.name, "www.example.com.");
    }

    #[test]
    fn at_sign_expands_to_origin() {
        let mut p = parser_for("$ORIGIN example.com.\n@ IN A 192.0.2.1\n");
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.name, "example.com.");
    }

    #[test]
    fn parenthesized_record_spans_multiple_lines() {
        let mut p = parser_for("@ IN SOA ns1. admin. (\n  1\n  2\n  3\n  4\n  5 )\n");
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.rdata, vec!["ns1.", "admin.", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn first_error_is_sticky() {
        let mut p = parser_for("host BOGUS CLASS A\n");
        let first = p.next().unwrap();
        assert!(first.is_err());
        let second = p.next().unwrap();
        assert_eq!(first.unwrap_err(), second.unwrap_err());
    }

    #[test]
    fn set_default_ttl_takes_effect_before_any_directive() {
        let mut p = parser_for("host IN A 192.0.2.1\n");
        p.set_default_ttl(42);
        let r = p.next().unwrap().unwrap();
        assert_eq!(r.ttl, 42);
    }

    #[test]
    fn set_max_include_depth_is_clamped_to_the_hard_limit() {
        let mut p = parser_for("host IN A 192.0.2.1\n");
        p.set_max_include_depth(MAX_INCLUDE_DEPTH + 50);
        assert_eq!(p.max_include_depth, MAX_INCLUDE_DEPTH);
    }

    #[test]
    fn generate_expands_a_range() {
        let mut p = parser_for("$ORIGIN example.com.\n$GENERATE 1-3 host$ IN A 192.0.2.$\n");
        let names: Vec<_> = (0..3).map(|_| p.next().unwrap().unwrap().name).collect();
        assert_eq!(
            names,
            vec!["host1.example.com.", "host2.example.com.", "host3.example.com."]
        );
    }
}
