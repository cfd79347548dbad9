#![allow(dead_code)]

use dnspeek_application::ports::MessageDecoderPort;
use dnspeek_domain::{
    DecodeError, DecodedMessage, DomainName, Header, MessageType, Opcode, PartialMessage,
    Question, RData, ResourceRecord, ResponseCode,
};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Decoder double returning a canned partial result.
///
/// `decode` is derived from the same canned value through
/// [`PartialMessage::into_result`], so both entry points agree.
#[derive(Clone)]
pub struct MockMessageDecoder {
    response: Arc<RwLock<PartialMessage>>,
    strict_calls: Arc<AtomicUsize>,
    partial_calls: Arc<AtomicUsize>,
}

impl MockMessageDecoder {
    pub fn new() -> Self {
        Self::returning(PartialMessage::from(sample_message()))
    }

    pub fn returning(response: PartialMessage) -> Self {
        Self {
            response: Arc::new(RwLock::new(response)),
            strict_calls: Arc::new(AtomicUsize::new(0)),
            partial_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_response(&self, response: PartialMessage) {
        *self.response.write().unwrap() = response;
    }

    pub fn strict_calls(&self) -> usize {
        self.strict_calls.load(Ordering::SeqCst)
    }

    pub fn partial_calls(&self) -> usize {
        self.partial_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockMessageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDecoderPort for MockMessageDecoder {
    fn decode(&self, _buf: &[u8]) -> Result<DecodedMessage, DecodeError> {
        self.strict_calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().unwrap().clone().into_result()
    }

    fn decode_partial(&self, _buf: &[u8]) -> PartialMessage {
        self.partial_calls.fetch_add(1, Ordering::SeqCst);
        self.response.read().unwrap().clone()
    }
}

pub fn sample_header() -> Header {
    Header {
        id: 0x1234,
        qr: MessageType::Response,
        opcode: Opcode::Query,
        aa: false,
        tc: false,
        rd: true,
        ra: true,
        z: false,
        ad: false,
        cd: false,
        rcode: ResponseCode::NoError,
        qdcount: 1,
        ancount: 1,
        nscount: 0,
        arcount: 0,
    }
}

pub fn sample_message() -> DecodedMessage {
    let name = DomainName::from_dotted("example.com");
    DecodedMessage {
        header: sample_header(),
        questions: vec![Question {
            name: name.clone(),
            qtype: 1,
            qclass: 1,
        }],
        answers: vec![ResourceRecord {
            name,
            rtype: 1,
            rclass: 1,
            ttl: 300,
            rdlength: 4,
            rdata: RData::A(Ipv4Addr::new(93, 184, 216, 34)),
        }],
        authorities: vec![],
        additionals: vec![],
    }
}
