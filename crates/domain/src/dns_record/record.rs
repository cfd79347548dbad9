use super::{DnsClass, RData, RecordType};
use crate::DomainName;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.name,
            DnsClass::mnemonic(self.qclass),
            RecordType::mnemonic(self.qtype)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub rclass: u16,
    /// Seconds; an encoded value with the sign bit set is stored as 0.
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name,
            self.ttl,
            DnsClass::mnemonic(self.rclass),
            RecordType::mnemonic(self.rtype),
            self.rdata
        )
    }
}
