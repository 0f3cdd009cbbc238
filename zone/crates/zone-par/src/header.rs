//! RR-header accumulation.
//!
//! After an owner name (explicit or reused from the previous record), a
//! record header is some arrangement of an optional TTL, an optional
//! class, and a mandatory type — `owner [ttl] [class] type`, `owner
//! [class] [ttl] type`, and so on, six legal shapes in total once the
//! owner-omitted case is folded in. Rather than special-case each
//! ordering, a TTL and a class are each accepted at most once in whatever
//! order they appear, and the loop stops at the type, which rdata
//! scanning picks up from.

use zone_lex::{parse_ttl, TokenKind};

use crate::decoder::RDataDecoder;
use crate::error::ParseError;
use crate::parser::Parser;

impl<D: RDataDecoder + Clone> Parser<D> {
    /// Returns `(explicit ttl, explicit class, rrtype)`.
    pub(crate) fn parse_header(&mut self) -> Result<(Option<u32>, Option<u16>, u16), ParseError> {
        let mut ttl = None;
        let mut class = None;
        loop {
            let tok = self.peek_clone();
            match tok.kind {
                TokenKind::Blank => {
                    self.bump();
                }
                TokenKind::Class => {
                    self.bump();
                    class = Some(tok.torc.expect("CLASS token always carries its numeric form"));
                }
                TokenKind::Rrtype => {
                    self.bump();
                    let rrtype = tok.torc.expect("RRTYPE token always carries its numeric form");
                    return Ok((ttl, class, rrtype));
                }
                TokenKind::String if ttl.is_none() => {
                    if let Some(v) = parse_ttl(&tok.text) {
                        self.bump();
                        ttl = Some(v);
                    } else {
                        return Err(self.err("expected a record type", &tok));
                    }
                }
                _ => return Err(self.err("expected a record type", &tok)),
            }
        }
    }
}
