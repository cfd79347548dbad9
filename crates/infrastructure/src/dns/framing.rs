//! Transport framing around DNS messages: the RFC 1035 §4.2.2 two-byte
//! length prefix used over TCP, and the 8-byte UDP header found in
//! captured datagrams.
use super::wire::WireReader;
use dnspeek_domain::WireError;
use serde::Serialize;
use std::iter::FusedIterator;

/// Returns the message behind a TCP length prefix.
///
/// Bytes after the framed message are ignored; use [`split_tcp_messages`]
/// for a stream carrying several messages.
pub fn strip_tcp_length_prefix(buf: &[u8]) -> Result<&[u8], WireError> {
    let mut reader = WireReader::new(buf);
    let len = reader.read_u16()? as usize;
    reader.read_slice(len)
}

/// Iterates over the length-prefixed messages of a TCP stream.
///
/// Stops after the first framing error, which is reported with its offset in
/// the whole stream.
pub fn split_tcp_messages(buf: &[u8]) -> TcpMessages<'_> {
    TcpMessages {
        reader: WireReader::new(buf),
        failed: false,
    }
}

#[derive(Debug, Clone)]
pub struct TcpMessages<'a> {
    reader: WireReader<'a>,
    failed: bool,
}

impl<'a> Iterator for TcpMessages<'a> {
    type Item = Result<&'a [u8], WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let framed = self
            .reader
            .read_u16()
            .and_then(|len| self.reader.read_slice(len as usize));
        self.failed = framed.is_err();
        Some(framed)
    }
}

impl FusedIterator for TcpMessages<'_> {}

/// The fixed UDP header (RFC 768).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UdpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    /// Header plus payload, in bytes.
    pub length: u16,
    pub checksum: u16,
}

impl UdpHeader {
    pub const LEN: usize = 8;

    /// Parses the header and returns it with the payload it declares.
    ///
    /// A length field smaller than the header or larger than the buffer is
    /// reported as [`WireError::Truncated`] at the length field. The checksum
    /// is not verified.
    pub fn parse(buf: &[u8]) -> Result<(UdpHeader, &[u8]), WireError> {
        let mut reader = WireReader::new(buf);
        let header = UdpHeader {
            src_port: reader.read_u16()?,
            dst_port: reader.read_u16()?,
            length: reader.read_u16()?,
            checksum: reader.read_u16()?,
        };

        let end = header.length as usize;
        if end < Self::LEN || end > buf.len() {
            return Err(WireError::Truncated { offset: 4 });
        }
        Ok((header, &buf[Self::LEN..end]))
    }
}
