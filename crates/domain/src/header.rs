use serde::Serialize;
use std::fmt;

/// The QR bit of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Query,
    Response,
}

impl MessageType {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            MessageType::Response
        } else {
            MessageType::Query
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Query => "QUERY",
            MessageType::Response => "RESPONSE",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header OPCODE. Reserved and future values decode to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    Unknown(u8),
}

impl Opcode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unknown(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Query => f.write_str("QUERY"),
            Opcode::IQuery => f.write_str("IQUERY"),
            Opcode::Status => f.write_str("STATUS"),
            Opcode::Notify => f.write_str("NOTIFY"),
            Opcode::Update => f.write_str("UPDATE"),
            Opcode::Unknown(code) => write!(f, "OPCODE{}", code),
        }
    }
}

impl Serialize for Opcode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Response code, covering the 4-bit header RCODE and the extended values
/// (16 and up) that only appear once EDNS widens the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    BadVers,
    BadKey,
    BadTime,
    BadMode,
    BadName,
    BadAlg,
    BadTrunc,
    Unknown(u16),
}

impl ResponseCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YXDomain,
            7 => ResponseCode::YXRRSet,
            8 => ResponseCode::NXRRSet,
            9 => ResponseCode::NotAuth,
            10 => ResponseCode::NotZone,
            16 => ResponseCode::BadVers,
            17 => ResponseCode::BadKey,
            18 => ResponseCode::BadTime,
            19 => ResponseCode::BadMode,
            20 => ResponseCode::BadName,
            21 => ResponseCode::BadAlg,
            22 => ResponseCode::BadTrunc,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YXDomain => 6,
            ResponseCode::YXRRSet => 7,
            ResponseCode::NXRRSet => 8,
            ResponseCode::NotAuth => 9,
            ResponseCode::NotZone => 10,
            ResponseCode::BadVers => 16,
            ResponseCode::BadKey => 17,
            ResponseCode::BadTime => 18,
            ResponseCode::BadMode => 19,
            ResponseCode::BadName => 20,
            ResponseCode::BadAlg => 21,
            ResponseCode::BadTrunc => 22,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        let name = match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YXDomain => "YXDOMAIN",
            ResponseCode::YXRRSet => "YXRRSET",
            ResponseCode::NXRRSet => "NXRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            ResponseCode::BadVers => "BADVERS",
            ResponseCode::BadKey => "BADKEY",
            ResponseCode::BadTime => "BADTIME",
            ResponseCode::BadMode => "BADMODE",
            ResponseCode::BadName => "BADNAME",
            ResponseCode::BadAlg => "BADALG",
            ResponseCode::BadTrunc => "BADTRUNC",
            ResponseCode::Unknown(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "RCODE{}", self.to_u16()),
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub id: u16,
    pub qr: MessageType,
    pub opcode: Opcode,
    /// Authoritative answer.
    pub aa: bool,
    /// Truncated.
    pub tc: bool,
    /// Recursion desired.
    pub rd: bool,
    /// Recursion available.
    pub ra: bool,
    /// Reserved; zero on well-formed input but tolerated when set.
    pub z: bool,
    /// Authenticated data.
    pub ad: bool,
    /// Checking disabled.
    pub cd: bool,
    pub rcode: ResponseCode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub const LEN: usize = 12;

    pub fn is_response(&self) -> bool {
        self.qr == MessageType::Response
    }

    /// Names of the flags that are set, in wire order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        let mut flags = Vec::with_capacity(7);
        if self.is_response() {
            flags.push("qr");
        }
        for (set, name) in [
            (self.aa, "aa"),
            (self.tc, "tc"),
            (self.rd, "rd"),
            (self.ra, "ra"),
            (self.z, "z"),
            (self.ad, "ad"),
            (self.cd, "cd"),
        ] {
            if set {
                flags.push(name);
            }
        }
        flags
    }
}
