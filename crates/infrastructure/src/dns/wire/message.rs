use super::header::decode_header;
use super::section::{decode_questions_into, decode_records_into};
use dnspeek_application::ports::MessageDecoderPort;
use dnspeek_domain::{
    DecodeError, DecodedMessage, DecoderLimits, Header, PartialMessage, Section,
};
use tracing::debug;

/// Decodes complete DNS messages under a fixed set of [`DecoderLimits`].
///
/// Holds no state besides the limits, so one value can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDecoder {
    limits: DecoderLimits,
}

impl MessageDecoder {
    pub fn new(limits: DecoderLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> DecoderLimits {
        self.limits
    }

    /// Strict decode: the first error fails the whole message.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedMessage, DecodeError> {
        self.decode_partial(buf).into_result()
    }

    /// Lenient decode: keeps every entry decoded before the first error,
    /// including the completed entries of the section that failed.
    pub fn decode_partial(&self, buf: &[u8]) -> PartialMessage {
        let mut message = PartialMessage::default();
        if let Err(err) = self.assemble(buf, &mut message) {
            debug!(error = %err, "Decoding stopped");
            message.error = Some(err);
        }
        message
    }

    /// Header, then the four sections in wire order. Returns the offset just
    /// past the last declared record.
    fn assemble(&self, buf: &[u8], message: &mut PartialMessage) -> Result<usize, DecodeError> {
        let jumps = self.limits.max_pointer_jumps;

        let header = decode_header(buf).map_err(DecodeError::header)?;
        message.header = Some(header);
        debug!(
            id = header.id,
            qdcount = header.qdcount,
            ancount = header.ancount,
            nscount = header.nscount,
            arcount = header.arcount,
            "Header decoded"
        );

        let mut offset =
            decode_questions_into(buf, Header::LEN, header.qdcount, jumps, &mut message.questions)?;
        debug!(count = message.questions.len(), offset, "Question section decoded");

        for (section, count, records) in [
            (Section::Answer, header.ancount, &mut message.answers),
            (Section::Authority, header.nscount, &mut message.authorities),
            (Section::Additional, header.arcount, &mut message.additionals),
        ] {
            offset = decode_records_into(buf, offset, count, section, jumps, records)?;
            debug!(%section, count = records.len(), offset, "Section decoded");
        }

        if offset < buf.len() {
            debug!(
                offset,
                trailing = buf.len() - offset,
                "Ignoring bytes after the last declared record"
            );
        }
        Ok(offset)
    }
}

impl MessageDecoderPort for MessageDecoder {
    fn decode(&self, buf: &[u8]) -> Result<DecodedMessage, DecodeError> {
        MessageDecoder::decode(self, buf)
    }

    fn decode_partial(&self, buf: &[u8]) -> PartialMessage {
        MessageDecoder::decode_partial(self, buf)
    }
}

/// Strict decode with the default limits.
pub fn decode_message(buf: &[u8]) -> Result<DecodedMessage, DecodeError> {
    MessageDecoder::default().decode(buf)
}

/// Lenient decode with the default limits.
pub fn decode_message_partial(buf: &[u8]) -> PartialMessage {
    MessageDecoder::default().decode_partial(buf)
}
