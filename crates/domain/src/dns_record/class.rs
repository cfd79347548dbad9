use std::fmt;

/// Record/query class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl DnsClass {
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(DnsClass::IN),
            3 => Some(DnsClass::CH),
            4 => Some(DnsClass::HS),
            254 => Some(DnsClass::NONE),
            255 => Some(DnsClass::ANY),
            _ => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::NONE => 254,
            DnsClass::ANY => 255,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::NONE => "NONE",
            DnsClass::ANY => "ANY",
        }
    }

    /// `"IN"` for 1, `"CLASS<n>"` for codes without a mnemonic. OPT records
    /// reuse this field for the UDP payload size, which lands here unnamed.
    pub fn mnemonic(code: u16) -> String {
        match Self::from_u16(code) {
            Some(class) => class.as_str().to_string(),
            None => format!("CLASS{}", code),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
