//! zone-par — token-driven parser for DNS master-file records and
//! directives.
//!
//! Consumes a [`zone_lex::Lexer`]'s token stream and turns it into
//! [`Record`]s: absolutizing owner names against the current origin,
//! applying TTL/class defaulting across a zone, and driving
//! `$TTL`/`$ORIGIN`/`$INCLUDE`/`$GENERATE`. Record-type semantics —
//! what an `A` record's rdata means, whether a name is syntactically
//! legal, how `$GENERATE` expands — are reached through the
//! [`RDataDecoder`] trait rather than hardcoded here, so this crate never
//! depends on `zone-rdata`; `zone-rdata` depends on this crate instead.
//!
//! Once `next()` returns an error, it is sticky: every later call returns
//! a clone of the same [`ParseError`] rather than attempting to resync.

mod decoder;
mod directive;
pub mod error;
mod header;
mod name;
mod parser;

use std::io::Cursor;

pub use decoder::{GenerateSpec, GeneratedRecord, RDataDecoder};
pub use error::ParseError;
pub use parser::{Parser, Record, CLASS_IN, MAX_INCLUDE_DEPTH};

/// Parses only the first record out of `input`, for callers that have a
/// single line or snippet rather than a file or stream. A missing
/// trailing newline is added before parsing, so `"host IN A 10.0.0.1"`
/// (no `\n`) still succeeds. Returns `None` if the input holds no record
/// at all (e.g. it's blank or only directives/comments).
pub fn parse_one<D: RDataDecoder + Clone>(input: &str, decoder: D) -> Option<Result<Record<D::RData>, ParseError>> {
    let mut owned = input.to_string();
    if !owned.ends_with('\n') {
        owned.push('\n');
    }
    let mut parser = Parser::new(Cursor::new(owned.into_bytes()), None, decoder);
    parser.next()
}

#[cfg(test)]
mod parse_one_tests {
    use super::*;

    #[derive(Clone)]
    struct OneFieldDecoder;

    impl zone_lex::TypeClassResolver for OneFieldDecoder {
        fn resolve_type(&self, s: &str) -> Option<u16> {
            if s == "A" {
                Some(1)
            } else {
                None
            }
        }

        fn resolve_class(&self, s: &str) -> Option<u16> {
            if s == "IN" {
                Some(CLASS_IN)
            } else {
                None
            }
        }
    }

    impl RDataDecoder for OneFieldDecoder {
        type RData = Vec<String>;

        fn is_domain_name(&self, s: &str) -> bool {
            !s.is_empty()
        }

        fn fqdn(&self, s: &str, origin: &str) -> Result<String, String> {
            if s.ends_with('.') {
                Ok(s.to_string())
            } else {
                Ok(format!("{s}.{origin}"))
            }
        }

        fn decode(&self, _rrtype: u16, _class: u16, _origin: &str, fields: &[String]) -> Result<Vec<String>, String> {
            Ok(fields.to_vec())
        }

        fn generate(
            &self,
            _spec: &GenerateSpec,
            _origin: &str,
        ) -> Result<Vec<GeneratedRecord<Vec<String>>>, String> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn parses_the_first_record_without_a_trailing_newline() {
        let result = parse_one("foo. IN A 10.0.0.1", OneFieldDecoder).unwrap().unwrap();
        assert_eq!(result.name, "foo.");
        assert_eq!(result.rdata, vec!["10.0.0.1".to_string()]);
    }

    #[test]
    fn returns_none_for_input_with_no_record() {
        assert!(parse_one("; just a comment\n", OneFieldDecoder).is_none());
    }

    #[test]
    fn only_the_first_record_is_returned() {
        let result = parse_one("foo. IN A 10.0.0.1\nbar. IN A 10.0.0.2\n", OneFieldDecoder)
            .unwrap()
            .unwrap();
        assert_eq!(result.name, "foo.");
    }
}
