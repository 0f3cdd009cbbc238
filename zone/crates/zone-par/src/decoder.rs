//! The seam between the parser and record semantics.
//!
//! Everything the parser needs but deliberately doesn't own — "is this a
//! legal domain name", "what does an `A` record's rdata mean", "how does
//! `$GENERATE` expand its template" — is reached through this trait, kept
//! generic so the parser itself never has to know a single record type.
//! `zone-rdata` is the concrete implementation; `dump-tokens`-style callers
//! that only care about the token stream can use a no-op decoder instead.

use zone_lex::TypeClassResolver;

/// One already-expanded record produced by a `$GENERATE` line.
pub struct GeneratedRecord<T> {
    pub name: String,
    pub rdata: T,
}

/// The parsed (but not yet expanded) arguments of a `$GENERATE` line:
/// `range lhs [ttl] [class] type rhs`.
#[derive(Debug, Clone)]
pub struct GenerateSpec {
    pub range: String,
    pub lhs: String,
    pub ttl: u32,
    pub class: u16,
    pub rrtype: u16,
    pub rhs: String,
}

/// Record-semantics collaborator. `RData` is whatever representation the
/// implementation wants callers to see (a typed enum, raw bytes, ...); the
/// parser only ever stores and hands it back.
pub trait RDataDecoder: TypeClassResolver {
    type RData;

    /// Syntactic domain-name validation (label lengths, legal escapes),
    /// applied to an owner or rdata name field after `$ORIGIN`/`@`
    /// expansion.
    fn is_domain_name(&self, s: &str) -> bool;

    /// Turn a (possibly origin-relative) name field into a fully
    /// qualified, validated name.
    fn fqdn(&self, s: &str, origin: &str) -> Result<String, String>;

    /// Decode the rdata fields following a record's type into `RData`.
    fn decode(
        &self,
        rrtype: u16,
        class: u16,
        origin: &str,
        fields: &[String],
    ) -> Result<Self::RData, String>;

    /// Expand a `$GENERATE` line into its constituent records.
    fn generate(
        &self,
        spec: &GenerateSpec,
        origin: &str,
    ) -> Result<Vec<GeneratedRecord<Self::RData>>, String>;
}
