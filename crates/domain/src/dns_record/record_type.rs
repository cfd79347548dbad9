use std::fmt;
use std::str::FromStr;

/// Symbolic names for the record types a decoded message is likely to carry.
///
/// The decoder itself works on the raw `u16`; this type is only consulted to
/// present a code, so unknown codes are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    NULL,
    WKS,
    PTR,
    HINFO,
    MX,
    TXT,
    AAAA,
    SRV,
    NAPTR,
    DNAME,
    OPT,
    DS,
    SSHFP,
    RRSIG,
    NSEC,
    DNSKEY,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    SVCB,
    HTTPS,
    IXFR,
    AXFR,
    ANY,
    CAA,
}

const RECORD_TYPES: &[(RecordType, u16, &str)] = &[
    (RecordType::A, 1, "A"),
    (RecordType::NS, 2, "NS"),
    (RecordType::CNAME, 5, "CNAME"),
    (RecordType::SOA, 6, "SOA"),
    (RecordType::NULL, 10, "NULL"),
    (RecordType::WKS, 11, "WKS"),
    (RecordType::PTR, 12, "PTR"),
    (RecordType::HINFO, 13, "HINFO"),
    (RecordType::MX, 15, "MX"),
    (RecordType::TXT, 16, "TXT"),
    (RecordType::AAAA, 28, "AAAA"),
    (RecordType::SRV, 33, "SRV"),
    (RecordType::NAPTR, 35, "NAPTR"),
    (RecordType::DNAME, 39, "DNAME"),
    (RecordType::OPT, 41, "OPT"),
    (RecordType::DS, 43, "DS"),
    (RecordType::SSHFP, 44, "SSHFP"),
    (RecordType::RRSIG, 46, "RRSIG"),
    (RecordType::NSEC, 47, "NSEC"),
    (RecordType::DNSKEY, 48, "DNSKEY"),
    (RecordType::NSEC3, 50, "NSEC3"),
    (RecordType::NSEC3PARAM, 51, "NSEC3PARAM"),
    (RecordType::TLSA, 52, "TLSA"),
    (RecordType::SVCB, 64, "SVCB"),
    (RecordType::HTTPS, 65, "HTTPS"),
    (RecordType::IXFR, 251, "IXFR"),
    (RecordType::AXFR, 252, "AXFR"),
    (RecordType::ANY, 255, "ANY"),
    (RecordType::CAA, 257, "CAA"),
];

impl RecordType {
    fn entry(&self) -> &'static (RecordType, u16, &'static str) {
        RECORD_TYPES
            .iter()
            .find(|(rt, _, _)| rt == self)
            .unwrap_or(&RECORD_TYPES[0])
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().2
    }

    pub fn to_u16(&self) -> u16 {
        self.entry().1
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        RECORD_TYPES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(rt, _, _)| *rt)
    }

    /// `"A"` for 1, `"TYPE65280"` for codes without a mnemonic.
    pub fn mnemonic(code: u16) -> String {
        match Self::from_u16(code) {
            Some(rt) => rt.as_str().to_string(),
            None => format!("TYPE{}", code),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        if let Some((rt, _, _)) = RECORD_TYPES.iter().find(|(_, _, name)| *name == upper) {
            return Ok(*rt);
        }
        upper
            .strip_prefix("TYPE")
            .and_then(|n| n.parse::<u16>().ok())
            .and_then(Self::from_u16)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
