//! `StandardCodec`: the concrete [`zone_lex::TypeClassResolver`] /
//! [`zone_par::RDataDecoder`] implementation that gives `zonectl` real
//! record semantics.

use std::net::{Ipv4Addr, Ipv6Addr};

use zone_lex::TypeClassResolver;
use zone_par::{GenerateSpec, GeneratedRecord, RDataDecoder};

use crate::error::DecodeError;
use crate::name;
use crate::rdata::RData;
use crate::types::{self, CLASS_IN, TYPE_A, TYPE_AAAA, TYPE_CNAME, TYPE_MX, TYPE_NS, TYPE_PTR, TYPE_SOA, TYPE_SRV, TYPE_TXT};

#[derive(Debug, Clone, Default)]
pub struct StandardCodec;

impl TypeClassResolver for StandardCodec {
    fn resolve_type(&self, s: &str) -> Option<u16> {
        types::lookup_type(s)
    }

    fn resolve_class(&self, s: &str) -> Option<u16> {
        types::lookup_class(s)
    }
}

impl RDataDecoder for StandardCodec {
    type RData = RData;

    fn is_domain_name(&self, s: &str) -> bool {
        name::is_domain_name(s)
    }

    fn fqdn(&self, s: &str, origin: &str) -> Result<String, String> {
        name::fqdn(s, origin)
    }

    fn decode(&self, rrtype: u16, _class: u16, origin: &str, fields: &[String]) -> Result<RData, String> {
        decode(rrtype, origin, fields).map_err(|e| e.to_string())
    }

    fn generate(&self, spec: &GenerateSpec, origin: &str) -> Result<Vec<GeneratedRecord<RData>>, String> {
        crate::generate::expand(self, spec, origin)
    }
}

fn decode(rrtype: u16, origin: &str, fields: &[String]) -> Result<RData, DecodeError> {
    match rrtype {
        TYPE_A => decode_a(fields),
        TYPE_AAAA => decode_aaaa(fields),
        TYPE_NS => decode_name_field(fields, "NS", origin).map(RData::Ns),
        TYPE_CNAME => decode_name_field(fields, "CNAME", origin).map(RData::Cname),
        TYPE_PTR => decode_name_field(fields, "PTR", origin).map(RData::Ptr),
        TYPE_SOA => decode_soa(fields, origin),
        TYPE_MX => decode_mx(fields, origin),
        TYPE_TXT => Ok(RData::Txt(fields.to_vec())),
        TYPE_SRV => decode_srv(fields, origin),
        _ => decode_unknown(rrtype, fields),
    }
}

fn expect_fields<'a>(fields: &'a [String], rrtype: &'static str, expected: usize) -> Result<&'a [String], DecodeError> {
    if fields.len() != expected {
        return Err(DecodeError::WrongFieldCount { rrtype, expected, got: fields.len() });
    }
    Ok(fields)
}

fn decode_a(fields: &[String]) -> Result<RData, DecodeError> {
    let fields = expect_fields(fields, "A", 1)?;
    let addr: Ipv4Addr = fields[0].parse().map_err(|_| DecodeError::BadIpv4(fields[0].clone()))?;
    Ok(RData::A(addr))
}

fn decode_aaaa(fields: &[String]) -> Result<RData, DecodeError> {
    let fields = expect_fields(fields, "AAAA", 1)?;
    let addr: Ipv6Addr = fields[0].parse().map_err(|_| DecodeError::BadIpv6(fields[0].clone()))?;
    Ok(RData::Aaaa(addr))
}

fn decode_name_field(fields: &[String], rrtype: &'static str, origin: &str) -> Result<String, DecodeError> {
    let fields = expect_fields(fields, rrtype, 1)?;
    name::fqdn(&fields[0], origin).map_err(|_| DecodeError::BadName(fields[0].clone()))
}

fn parse_u32(s: &str) -> Result<u32, DecodeError> {
    s.parse().map_err(|_| DecodeError::BadInt(s.to_string()))
}

fn parse_u16(s: &str) -> Result<u16, DecodeError> {
    s.parse().map_err(|_| DecodeError::BadInt(s.to_string()))
}

fn decode_soa(fields: &[String], origin: &str) -> Result<RData, DecodeError> {
    let fields = expect_fields(fields, "SOA", 7)?;
    Ok(RData::Soa {
        mname: name::fqdn(&fields[0], origin).map_err(|_| DecodeError::BadName(fields[0].clone()))?,
        rname: name::fqdn(&fields[1], origin).map_err(|_| DecodeError::BadName(fields[1].clone()))?,
        serial: parse_u32(&fields[2])?,
        refresh: parse_u32(&fields[3])?,
        retry: parse_u32(&fields[4])?,
        expire: parse_u32(&fields[5])?,
        minimum: parse_u32(&fields[6])?,
    })
}

fn decode_mx(fields: &[String], origin: &str) -> Result<RData, DecodeError> {
    let fields = expect_fields(fields, "MX", 2)?;
    Ok(RData::Mx {
        preference: parse_u16(&fields[0])?,
        exchange: name::fqdn(&fields[1], origin).map_err(|_| DecodeError::BadName(fields[1].clone()))?,
    })
}

fn decode_srv(fields: &[String], origin: &str) -> Result<RData, DecodeError> {
    let fields = expect_fields(fields, "SRV", 4)?;
    Ok(RData::Srv {
        priority: parse_u16(&fields[0])?,
        weight: parse_u16(&fields[1])?,
        port: parse_u16(&fields[2])?,
        target: name::fqdn(&fields[3], origin).map_err(|_| DecodeError::BadName(fields[3].clone()))?,
    })
}

/// RFC 3597 generic rdata: `\# <len> <hex...>`. Falls back to treating the
/// joined fields as raw, non-hex bytes if the escape isn't present, so an
/// unrecognized type with plain text still decodes to something rather
/// than erroring outright.
fn decode_unknown(rrtype: u16, fields: &[String]) -> Result<RData, DecodeError> {
    if fields.first().map(String::as_str) == Some(r"\#") {
        let declared: usize = fields
            .get(1)
            .ok_or_else(|| DecodeError::BadUnknownEscape("missing length".into()))?
            .parse()
            .map_err(|_| DecodeError::BadUnknownEscape("non-numeric length".into()))?;
        let hex: String = fields[2..].concat();
        let bytes = decode_hex(&hex).map_err(|_| DecodeError::BadUnknownEscape(hex.clone()))?;
        if bytes.len() != declared {
            return Err(DecodeError::UnknownLengthMismatch { declared, decoded: bytes.len() });
        }
        return Ok(RData::Unknown { rrtype, bytes });
    }
    Ok(RData::Unknown { rrtype, bytes: fields.join(" ").into_bytes() })
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ()> {
    if s.len() % 2 != 0 {
        return Err(());
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let hi = (bytes[i] as char).to_digit(16).ok_or(())?;
        let lo = (bytes[i + 1] as char).to_digit(16).ok_or(())?;
        out.push(((hi << 4) | lo) as u8);
        i += 2;
    }
    Ok(out)
}

// `CLASS_IN` isn't consulted by any decoder yet (all the types this crate
// handles are class-agnostic in presentation form), but it's part of the
// public vocabulary this module re-exports through `types`.
#[allow(dead_code)]
const _: u16 = CLASS_IN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_record() {
        let r = decode(TYPE_A, ".", &["192.0.2.1".to_string()]).unwrap();
        assert_eq!(r, RData::A("192.0.2.1".parse().unwrap()));
    }

    #[test]
    fn decodes_aaaa_record() {
        let r = decode(TYPE_AAAA, ".", &["::1".to_string()]).unwrap();
        assert_eq!(r, RData::Aaaa("::1".parse().unwrap()));
    }

    #[test]
    fn a_record_rejects_wrong_field_count() {
        let err = decode(TYPE_A, ".", &["192.0.2.1".to_string(), "extra".to_string()]).unwrap_err();
        assert!(matches!(err, DecodeError::WrongFieldCount { .. }));
    }

    #[test]
    fn decodes_mx_record() {
        let r = decode(TYPE_MX, "example.com.", &["10".to_string(), "mail".to_string()]).unwrap();
        assert_eq!(
            r,
            RData::Mx { preference: 10, exchange: "mail.example.com.".to_string() }
        );
    }

    #[test]
    fn decodes_soa_record() {
        let fields = vec![
            "ns1".to_string(),
            "admin".to_string(),
            "1".to_string(),
            "7200".to_string(),
            "3600".to_string(),
            "1209600".to_string(),
            "3600".to_string(),
        ];
        let r = decode(TYPE_SOA, "example.com.", &fields).unwrap();
        assert_eq!(
            r,
            RData::Soa {
                mname: "ns1.example.com.".to_string(),
                rname: "admin.example.com.".to_string(),
                serial: 1,
                refresh: 7200,
                retry: 3600,
                expire: 1209600,
                minimum: 3600,
            }
        );
    }

    #[test]
    fn decodes_rfc3597_unknown_escape() {
        let fields = vec![r"\#".to_string(), "2".to_string(), "abcd".to_string()];
        let r = decode(65280, ".", &fields).unwrap();
        assert_eq!(r, RData::Unknown { rrtype: 65280, bytes: vec![0xab, 0xcd] });
    }

    #[test]
    fn unknown_escape_length_mismatch_errors() {
        let fields = vec![r"\#".to_string(), "4".to_string(), "abcd".to_string()];
        let err = decode(65280, ".", &fields).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownLengthMismatch { .. }));
    }

    #[test]
    fn unrecognized_type_without_escape_falls_back_to_raw_bytes() {
        let r = decode(65280, ".", &["hello".to_string()]).unwrap();
        assert_eq!(r, RData::Unknown { rrtype: 65280, bytes: b"hello".to_vec() });
    }
}
