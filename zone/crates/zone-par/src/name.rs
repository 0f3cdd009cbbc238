//! Owner-name bookkeeping that doesn't need a collaborator.
//!
//! `@` standing for the current origin is baked into the master-file
//! grammar itself (RFC 1035 §5.1), not something a record-semantics
//! collaborator should have to know about.

/// Replace a bare `@` with `origin`; anything else is returned unchanged
/// for the collaborator's `fqdn` to absolutize.
pub fn expand_at(token: &str, origin: &str) -> String {
    if token == "@" {
        origin.to_string()
    } else {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_becomes_origin() {
        assert_eq!(expand_at("@", "example.com."), "example.com.");
    }

    #[test]
    fn other_tokens_pass_through() {
        assert_eq!(expand_at("www", "example.com."), "www");
        assert_eq!(expand_at("www.example.com.", "example.com."), "www.example.com.");
    }
}
