#![allow(dead_code)]
use dnspeek_domain::{DomainName, Header, MessageType, Opcode, RData, ResourceRecord, ResponseCode};
use std::net::Ipv4Addr;

pub fn name(dotted: &str) -> DomainName {
    DomainName::from_dotted(dotted)
}

pub fn a_record(owner: &str, ttl: u32, addr: Ipv4Addr) -> ResourceRecord {
    ResourceRecord {
        name: name(owner),
        rtype: 1,
        rclass: 1,
        ttl,
        rdlength: 4,
        rdata: RData::A(addr),
    }
}

pub struct HeaderBuilder {
    header: Header,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self {
            header: Header {
                id: 0,
                qr: MessageType::Query,
                opcode: Opcode::Query,
                aa: false,
                tc: false,
                rd: false,
                ra: false,
                z: false,
                ad: false,
                cd: false,
                rcode: ResponseCode::NoError,
                qdcount: 0,
                ancount: 0,
                nscount: 0,
                arcount: 0,
            },
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.header.id = id;
        self
    }

    pub fn response(mut self) -> Self {
        self.header.qr = MessageType::Response;
        self
    }

    pub fn rd(mut self) -> Self {
        self.header.rd = true;
        self
    }

    pub fn ra(mut self) -> Self {
        self.header.ra = true;
        self
    }

    pub fn ad(mut self) -> Self {
        self.header.ad = true;
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.header.rcode = rcode;
        self
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.header.qdcount = qd;
        self.header.ancount = an;
        self.header.nscount = ns;
        self.header.arcount = ar;
        self
    }

    pub fn build(self) -> Header {
        self.header
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
