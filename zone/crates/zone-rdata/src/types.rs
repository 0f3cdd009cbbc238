//! The mnemonic vocabulary the lexer has no business knowing: record type
//! and class names to their wire-format numbers, and back for display.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_MX: u16 = 15;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;
pub const TYPE_SRV: u16 = 33;
pub const TYPE_ANY: u16 = 255;

pub const CLASS_IN: u16 = 1;
pub const CLASS_CS: u16 = 2;
pub const CLASS_CH: u16 = 3;
pub const CLASS_HS: u16 = 4;
pub const CLASS_NONE: u16 = 254;
pub const CLASS_ANY: u16 = 255;

static TYPE_TABLE: Lazy<FxHashMap<&'static str, u16>> = Lazy::new(|| {
    [
        ("A", TYPE_A),
        ("NS", TYPE_NS),
        ("CNAME", TYPE_CNAME),
        ("SOA", TYPE_SOA),
        ("PTR", TYPE_PTR),
        ("MX", TYPE_MX),
        ("TXT", TYPE_TXT),
        ("AAAA", TYPE_AAAA),
        ("SRV", TYPE_SRV),
        ("ANY", TYPE_ANY),
    ]
    .into_iter()
    .collect()
});

static CLASS_TABLE: Lazy<FxHashMap<&'static str, u16>> = Lazy::new(|| {
    [
        ("IN", CLASS_IN),
        ("CS", CLASS_CS),
        ("CH", CLASS_CH),
        ("HS", CLASS_HS),
        ("NONE", CLASS_NONE),
        ("ANY", CLASS_ANY),
    ]
    .into_iter()
    .collect()
});

pub fn lookup_type(mnemonic: &str) -> Option<u16> {
    TYPE_TABLE.get(mnemonic).copied()
}

pub fn lookup_class(mnemonic: &str) -> Option<u16> {
    CLASS_TABLE.get(mnemonic).copied()
}

pub fn type_name(rrtype: u16) -> Option<&'static str> {
    TYPE_TABLE
        .iter()
        .find(|(_, v)| **v == rrtype)
        .map(|(k, _)| *k)
}

pub fn class_name(class: u16) -> Option<&'static str> {
    CLASS_TABLE
        .iter()
        .find(|(_, v)| **v == class)
        .map(|(k, _)| *k)
}
