//! `$TTL`, `$ORIGIN`, `$INCLUDE`, and `$GENERATE`.

use std::io::Read;

use tracing::debug;
use zone_lex::{parse_ttl, Lexer, TokenKind};

use crate::decoder::{GenerateSpec, RDataDecoder};
use crate::error::ParseError;
use crate::name;
use crate::parser::{Frame, Parser, StepOutcome, CLASS_IN};

impl<D: RDataDecoder + Clone> Parser<D> {
    pub(crate) fn handle_ttl(&mut self) -> Result<StepOutcome<D::RData>, ParseError> {
        self.bump();
        let tok = self.expect_string("a TTL value")?;
        let value = parse_ttl(&tok.text).ok_or_else(|| self.err("not a valid TTL", &tok))?;
        debug!(ttl = value, "$TTL");
        self.default_ttl = value;
        self.default_ttl_is_directive = true;
        self.slurp_remainder("$TTL")?;
        Ok(StepOutcome::Continue)
    }

    pub(crate) fn handle_origin(&mut self) -> Result<StepOutcome<D::RData>, ParseError> {
        self.bump();
        let tok = self.expect_string("a domain name")?;
        let expanded = name::expand_at(&tok.text, &self.origin);
        let fq = self
            .decoder
            .fqdn(&expanded, &self.origin)
            .map_err(|m| self.err(&m, &tok))?;
        debug!(origin = %fq, "$ORIGIN");
        self.origin = fq;
        self.slurp_remainder("$ORIGIN")?;
        Ok(StepOutcome::Continue)
    }

    pub(crate) fn handle_include(&mut self) -> Result<StepOutcome<D::RData>, ParseError> {
        let dir_tok = self.bump();
        if self.stack.len() > self.max_include_depth {
            return Err(self.err("include nesting too deep", &dir_tok));
        }
        let path_tok = self.expect_string("a file name")?;

        let mut included_origin = self.origin.clone();
        self.skip_blanks();
        if matches!(self.peek_kind(), TokenKind::String) {
            let origin_tok = self.bump();
            let expanded = name::expand_at(&origin_tok.text, &self.origin);
            included_origin = self
                .decoder
                .fqdn(&expanded, &self.origin)
                .map_err(|m| self.err(&m, &origin_tok))?;
        }
        self.slurp_remainder("$INCLUDE")?;

        let path = self.resolve_include_path(&path_tok.text);
        let file = std::fs::File::open(&path)
            .map_err(|e| self.err(&format!("cannot open include file: {e}"), &path_tok))?;
        debug!(path = %path.display(), depth = self.stack.len() + 1, "$INCLUDE");
        let lexer = Lexer::new(Box::new(file) as Box<dyn Read>, self.decoder.clone());
        self.stack.push(Frame {
            lexer,
            file: Some(path),
        });
        self.origin = included_origin;
        Ok(StepOutcome::Continue)
    }

    pub(crate) fn handle_generate(&mut self) -> Result<StepOutcome<D::RData>, ParseError> {
        let dir_tok = self.bump();
        let range_tok = self.expect_string("a $GENERATE range")?;
        let lhs_tok = self.expect_string("a $GENERATE name template")?;

        let (ttl_explicit, class_explicit, rrtype) = self.parse_header()?;
        let ttl = self.apply_ttl_default(ttl_explicit);
        let class = class_explicit.unwrap_or(CLASS_IN);

        let rhs_tok = self.expect_string("a $GENERATE rdata template")?;
        let comment = self.slurp_remainder("$GENERATE")?;

        let spec = GenerateSpec {
            range: range_tok.text.clone(),
            lhs: lhs_tok.text.clone(),
            ttl,
            class,
            rrtype,
            rhs: rhs_tok.text.clone(),
        };
        let generated = self
            .decoder
            .generate(&spec, &self.origin)
            .map_err(|m| self.err(&m, &dir_tok))?;
        debug!(count = generated.len(), "$GENERATE expanded");
        let records = generated
            .into_iter()
            .map(|g| crate::parser::Record {
                name: g.name,
                ttl,
                class,
                rrtype,
                rdata: g.rdata,
                comment: comment.clone(),
            })
            .collect();
        Ok(StepOutcome::Records(records))
    }
}
