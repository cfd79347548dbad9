use crate::DomainName;
use data_encoding::HEXLOWER;
use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Soa {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mx {
    pub preference: u16,
    pub exchange: DomainName,
}

/// Type-specific payload of a resource record.
///
/// The variant is picked from the record's TYPE. Types without a dedicated
/// variant, OPT included, keep their RDATA verbatim in `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RData {
    A(Ipv4Addr),
    #[serde(rename = "AAAA")]
    Aaaa(Ipv6Addr),
    #[serde(rename = "NS")]
    Ns(DomainName),
    #[serde(rename = "CNAME")]
    Cname(DomainName),
    #[serde(rename = "PTR")]
    Ptr(DomainName),
    #[serde(rename = "SOA")]
    Soa(Soa),
    #[serde(rename = "MX")]
    Mx(Mx),
    #[serde(rename = "TXT", serialize_with = "serialize_character_strings")]
    Txt(Vec<Vec<u8>>),
    #[serde(rename = "OPAQUE", serialize_with = "serialize_hex")]
    Opaque(Vec<u8>),
}

impl RData {
    /// The embedded name for NS, CNAME and PTR.
    pub fn as_name(&self) -> Option<&DomainName> {
        match self {
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, RData::Opaque(_))
    }
}

fn escape_character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\{:03}", b)),
        }
    }
    out
}

fn serialize_character_strings<S: serde::Serializer>(
    strings: &[Vec<u8>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(strings.iter().map(|s| escape_character_string(s)))
}

fn serialize_hex<S: serde::Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&HEXLOWER.encode(bytes))
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Aaaa(addr) => write!(f, "{}", addr),
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => write!(f, "{}", name),
            RData::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RData::Mx(mx) => write!(f, "{} {}", mx.preference, mx.exchange),
            RData::Txt(strings) => {
                let quoted: Vec<String> = strings
                    .iter()
                    .map(|s| format!("\"{}\"", escape_character_string(s)))
                    .collect();
                f.write_str(&quoted.join(" "))
            }
            // RFC 3597 generic presentation
            RData::Opaque(bytes) if bytes.is_empty() => f.write_str("\\# 0"),
            RData::Opaque(bytes) => write!(f, "\\# {} {}", bytes.len(), HEXLOWER.encode(bytes)),
        }
    }
}
