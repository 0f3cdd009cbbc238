use thiserror::Error;

/// Failures decoding a record's rdata fields into [`crate::RData`].
///
/// [`zone_par::RDataDecoder::decode`] only wants a `String`, so callers at
/// the trait boundary convert via `.to_string()`; internally the decoders
/// construct this enum so each failure mode stays distinguishable.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{rrtype} record takes {expected} field(s), got {got}")]
    WrongFieldCount { rrtype: &'static str, expected: usize, got: usize },

    #[error("invalid IPv4 address \"{0}\"")]
    BadIpv4(String),

    #[error("invalid IPv6 address \"{0}\"")]
    BadIpv6(String),

    #[error("invalid unsigned integer \"{0}\"")]
    BadInt(String),

    #[error("invalid domain name \"{0}\"")]
    BadName(String),

    #[error("malformed \\# unknown-type escape: {0}")]
    BadUnknownEscape(String),

    #[error("unknown-type byte length mismatch: declared {declared}, decoded {decoded}")]
    UnknownLengthMismatch { declared: usize, decoded: usize },
}
