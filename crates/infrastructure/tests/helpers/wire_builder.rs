#![allow(dead_code)]

use dnspeek_domain::{
    DecodedMessage, DomainName, Header, MessageType, Opcode, Question, RData, ResourceRecord,
    ResponseCode,
};

/// Encodes a message without compression.
///
/// Counts are taken from the section lengths, not from the header, so the
/// output is always self-consistent. `rdlength` on records is recomputed.
pub fn encode_message(message: &DecodedMessage) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    encode_header(&message.header, message, &mut buf);
    for question in &message.questions {
        encode_name(&question.name, &mut buf);
        buf.extend_from_slice(&question.qtype.to_be_bytes());
        buf.extend_from_slice(&question.qclass.to_be_bytes());
    }
    for record in message.records() {
        encode_record(record, &mut buf);
    }
    buf
}

fn encode_header(header: &Header, message: &DecodedMessage, buf: &mut Vec<u8>) {
    let upper = ((header.is_response() as u8) << 7)
        | ((header.opcode.to_u8() & 0x0f) << 3)
        | ((header.aa as u8) << 2)
        | ((header.tc as u8) << 1)
        | header.rd as u8;
    let lower = ((header.ra as u8) << 7)
        | ((header.z as u8) << 6)
        | ((header.ad as u8) << 5)
        | ((header.cd as u8) << 4)
        | (header.rcode.to_u16() as u8 & 0x0f);

    buf.extend_from_slice(&header.id.to_be_bytes());
    buf.push(upper);
    buf.push(lower);
    for count in [
        message.questions.len(),
        message.answers.len(),
        message.authorities.len(),
        message.additionals.len(),
    ] {
        buf.extend_from_slice(&(count as u16).to_be_bytes());
    }
}

pub fn encode_name(name: &DomainName, buf: &mut Vec<u8>) {
    for label in name.labels() {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0);
}

fn encode_record(record: &ResourceRecord, buf: &mut Vec<u8>) {
    encode_name(&record.name, buf);
    buf.extend_from_slice(&record.rtype.to_be_bytes());
    buf.extend_from_slice(&record.rclass.to_be_bytes());
    buf.extend_from_slice(&record.ttl.to_be_bytes());

    let rdata = encode_rdata(&record.rdata);
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(&rdata);
}

pub fn encode_rdata(rdata: &RData) -> Vec<u8> {
    let mut buf = Vec::new();
    match rdata {
        RData::A(addr) => buf.extend_from_slice(&addr.octets()),
        RData::Aaaa(addr) => buf.extend_from_slice(&addr.octets()),
        RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => encode_name(name, &mut buf),
        RData::Mx(mx) => {
            buf.extend_from_slice(&mx.preference.to_be_bytes());
            encode_name(&mx.exchange, &mut buf);
        }
        RData::Soa(soa) => {
            encode_name(&soa.mname, &mut buf);
            encode_name(&soa.rname, &mut buf);
            for value in [soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum] {
                buf.extend_from_slice(&value.to_be_bytes());
            }
        }
        RData::Txt(strings) => {
            for s in strings {
                buf.push(s.len() as u8);
                buf.extend_from_slice(s);
            }
        }
        RData::Opaque(bytes) => buf.extend_from_slice(bytes),
    }
    buf
}

/// Fluent construction of test messages.
pub struct MessageBuilder {
    message: DecodedMessage,
}

impl MessageBuilder {
    pub fn query(id: u16) -> Self {
        Self {
            message: DecodedMessage {
                header: Header {
                    id,
                    qr: MessageType::Query,
                    opcode: Opcode::Query,
                    aa: false,
                    tc: false,
                    rd: true,
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
                questions: vec![],
                answers: vec![],
                authorities: vec![],
                additionals: vec![],
            },
        }
    }

    pub fn response(id: u16) -> Self {
        let mut builder = Self::query(id);
        builder.message.header.qr = MessageType::Response;
        builder.message.header.ra = true;
        builder
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.header.rcode = rcode;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.message.questions.push(Question {
            name: DomainName::from_dotted(name),
            qtype,
            qclass: 1,
        });
        self
    }

    pub fn answer(mut self, name: &str, ttl: u32, rdata: RData) -> Self {
        self.message.answers.push(record(name, ttl, rdata));
        self
    }

    pub fn authority(mut self, name: &str, ttl: u32, rdata: RData) -> Self {
        self.message.authorities.push(record(name, ttl, rdata));
        self
    }

    pub fn additional(mut self, name: &str, ttl: u32, rdata: RData) -> Self {
        self.message.additionals.push(record(name, ttl, rdata));
        self
    }

    pub fn additional_raw(mut self, record: ResourceRecord) -> Self {
        self.message.additionals.push(record);
        self
    }

    /// The message as it will decode: header counts filled in.
    pub fn build(self) -> DecodedMessage {
        let mut message = self.message;
        message.header.qdcount = message.questions.len() as u16;
        message.header.ancount = message.answers.len() as u16;
        message.header.nscount = message.authorities.len() as u16;
        message.header.arcount = message.additionals.len() as u16;
        message
    }

    pub fn encode(self) -> Vec<u8> {
        encode_message(&self.message)
    }
}

fn record(name: &str, ttl: u32, rdata: RData) -> ResourceRecord {
    ResourceRecord {
        name: DomainName::from_dotted(name),
        rtype: rtype_of(&rdata),
        rclass: 1,
        ttl,
        rdlength: encode_rdata(&rdata).len() as u16,
        rdata,
    }
}

fn rtype_of(rdata: &RData) -> u16 {
    match rdata {
        RData::A(_) => 1,
        RData::Ns(_) => 2,
        RData::Cname(_) => 5,
        RData::Soa(_) => 6,
        RData::Ptr(_) => 12,
        RData::Mx(_) => 15,
        RData::Txt(_) => 16,
        RData::Aaaa(_) => 28,
        RData::Opaque(_) => 65280,
    }
}
