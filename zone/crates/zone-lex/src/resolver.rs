//! The seam between the lexer and the type/class vocabulary.
//!
//! Deciding whether a bare `STRING` should be reclassified to `RRTYPE` or
//! `CLASS` needs a lookup against the known mnemonic tables (`A`, `NS`,
//! `IN`, ...). Those tables are a collaborator's concern (see
//! `zone-rdata`), not the lexer's, so the lexer only knows about this
//! trait; numeric escapes (`TYPE65280`, `CLASS3`) are handled locally,
//! since they need no vocabulary at all.

/// Resolves mnemonic type/class names to their wire-format numbers.
pub trait TypeClassResolver {
    /// `s` is already upper-cased. Returns `None` if `s` is not a known
    /// record type mnemonic.
    fn resolve_type(&self, s: &str) -> Option<u16>;

    /// `s` is already upper-cased. Returns `None` if `s` is not a known
    /// record class mnemonic.
    fn resolve_class(&self, s: &str) -> Option<u16>;
}

/// A resolver that recognizes nothing, useful for lexing in isolation
/// (e.g. `dump-tokens`) where OWNER/RRTYPE/CLASS reclassification by
/// mnemonic doesn't matter and only the `TYPE<n>`/`CLASS<n>` escapes and
/// position-based OWNER detection apply.
pub struct NullResolver;

impl TypeClassResolver for NullResolver {
    fn resolve_type(&self, _s: &str) -> Option<u16> {
        None
    }

    fn resolve_class(&self, _s: &str) -> Option<u16> {
        None
    }
}

/// Parses the `TYPE<digits>` escape, e.g. `TYPE65280` -> `65280`.
pub fn parse_type_numeric(s: &str) -> Option<u16> {
    parse_numeric_escape(s, "TYPE")
}

/// Parses the `CLASS<digits>` escape, e.g. `CLASS3` -> `3`.
pub fn parse_class_numeric(s: &str) -> Option<u16> {
    parse_numeric_escape(s, "CLASS")
}

fn parse_numeric_escape(s: &str, prefix: &str) -> Option<u16> {
    let rest = s.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Parses a TTL value: plain decimal seconds, or BIND time-unit shorthand
/// (`1D`, `2H30M`, case-insensitive `s`/`m`/`h`/`d`/`w` suffixes summed
/// left to right). Overflow wraps per the wire format's `u32`, matching
/// how the field is eventually serialized; this lexer-level helper simply
/// mirrors that by wrapping in `u32` arithmetic rather than rejecting.
pub fn parse_ttl(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().ok().map(|v| v as u32);
    }

    let mut total: u32 = 0;
    let mut current: u64 = 0;
    let mut saw_digit = false;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {
                saw_digit = true;
                current = current * 10 + (b - b'0') as u64;
            }
            _ if saw_digit => {
                let unit = match b.to_ascii_uppercase() {
                    b'S' => 1u64,
                    b'M' => 60,
                    b'H' => 3600,
                    b'D' => 86400,
                    b'W' => 604800,
                    _ => return None,
                };
                total = total.wrapping_add((current.wrapping_mul(unit)) as u32);
                current = 0;
                saw_digit = false;
            }
            _ => return None,
        }
    }
    if saw_digit {
        // a trailing number with no unit suffix is added as seconds
        total = total.wrapping_add(current as u32);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_type_escape() {
        assert_eq!(parse_type_numeric("TYPE65280"), Some(65280));
        assert_eq!(parse_type_numeric("TYPE"), None);
        assert_eq!(parse_type_numeric("TYPEA"), None);
        assert_eq!(parse_class_numeric("CLASS3"), Some(3));
    }

    #[test]
    fn ttl_plain_seconds() {
        assert_eq!(parse_ttl("3600"), Some(3600));
        assert_eq!(parse_ttl("0"), Some(0));
    }

    #[test]
    fn ttl_unit_shorthand() {
        assert_eq!(parse_ttl("1D"), Some(86400));
        assert_eq!(parse_ttl("2H30M"), Some(2 * 3600 + 30 * 60));
        assert_eq!(parse_ttl("1w"), Some(604800));
    }

    #[test]
    fn ttl_trailing_bare_digits_are_added_as_seconds() {
        assert_eq!(parse_ttl("1D5"), Some(86405));
    }

    #[test]
    fn ttl_rejects_garbage() {
        assert_eq!(parse_ttl(""), None);
        assert_eq!(parse_ttl("1X"), None);
    }
}
