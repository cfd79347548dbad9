use super::bitfield::{AA, AD, CD, OPCODE, QR, RA, RCODE, RD, TC, Z};
use super::reader::WireReader;
use dnspeek_domain::{Header, MessageType, Opcode, ResponseCode, WireError};

/// Parses the fixed 12-byte header.
///
/// Reserved opcodes and rcodes decode to their `Unknown` variants; the only
/// failure is a buffer shorter than the header.
pub fn decode_header(buf: &[u8]) -> Result<Header, WireError> {
    if buf.len() < Header::LEN {
        return Err(WireError::Truncated { offset: buf.len() });
    }

    let mut reader = WireReader::new(buf);
    let id = reader.read_u16()?;
    let upper = reader.read_u8()?;
    let lower = reader.read_u8()?;

    Ok(Header {
        id,
        qr: MessageType::from_bit(QR.is_set(upper)),
        opcode: Opcode::from_u8(OPCODE.extract(upper)),
        aa: AA.is_set(upper),
        tc: TC.is_set(upper),
        rd: RD.is_set(upper),
        ra: RA.is_set(lower),
        z: Z.is_set(lower),
        ad: AD.is_set(lower),
        cd: CD.is_set(lower),
        rcode: ResponseCode::from_u16(RCODE.extract(lower) as u16),
        qdcount: reader.read_u16()?,
        ancount: reader.read_u16()?,
        nscount: reader.read_u16()?,
        arcount: reader.read_u16()?,
    })
}
