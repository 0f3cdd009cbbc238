//! zone-rdata — the concrete record-semantics collaborator for zone-par.
//!
//! Implements the mnemonic type/class vocabulary ([`zone_lex::TypeClassResolver`]),
//! domain name validation and absolutization, and rdata decoding
//! ([`zone_par::RDataDecoder`]) via [`StandardCodec`], the type callers wire
//! into a [`zone_par::Parser`].

mod codec;
mod error;
mod generate;
mod name;
mod rdata;
mod types;

pub use codec::StandardCodec;
pub use error::DecodeError;
pub use name::{fqdn, is_domain_name};
pub use rdata::RData;
pub use types::{
    class_name, lookup_class, lookup_type, type_name, CLASS_ANY, CLASS_CH, CLASS_CS, CLASS_HS, CLASS_IN, CLASS_NONE,
    TYPE_A, TYPE_AAAA, TYPE_ANY, TYPE_CNAME, TYPE_MX, TYPE_NS, TYPE_PTR, TYPE_SOA, TYPE_SRV, TYPE_TXT,
};
