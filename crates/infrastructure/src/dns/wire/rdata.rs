use super::name::decode_name;
use super::reader::WireReader;
use dnspeek_domain::{DomainName, Mx, RData, Soa, WireError};
use std::net::{Ipv4Addr, Ipv6Addr};

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_PTR: u16 = 12;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;

/// Decodes the `rdlength` bytes of RDATA starting at `offset`.
///
/// Embedded names are decoded against the whole message because compression
/// pointers are absolute; reads are still confined to the RDATA, and a typed
/// layout that does not use exactly `rdlength` bytes is a
/// [`WireError::BadRDataLength`]. RDATA running past the end of the message
/// is [`WireError::Truncated`].
pub fn decode_rdata(
    buf: &[u8],
    offset: usize,
    rtype: u16,
    rdlength: u16,
    max_pointer_jumps: usize,
) -> Result<RData, WireError> {
    let end = offset + rdlength as usize;
    if end > buf.len() {
        return Err(WireError::Truncated { offset });
    }

    let bad_length = WireError::BadRDataLength {
        rtype,
        rdlength,
        offset,
    };
    let rdata = &buf[..end];
    let mut reader = WireReader::at(rdata, offset);

    let decoded = match rtype {
        TYPE_A => fixed::<4>(&mut reader).map(|o| RData::A(Ipv4Addr::from(o))),
        TYPE_AAAA => fixed::<16>(&mut reader).map(|o| RData::Aaaa(Ipv6Addr::from(o))),
        TYPE_NS => read_name(&mut reader, max_pointer_jumps).map(RData::Ns),
        TYPE_CNAME => read_name(&mut reader, max_pointer_jumps).map(RData::Cname),
        TYPE_PTR => read_name(&mut reader, max_pointer_jumps).map(RData::Ptr),
        TYPE_MX => read_mx(&mut reader, max_pointer_jumps).map(RData::Mx),
        TYPE_SOA => read_soa(&mut reader, max_pointer_jumps).map(RData::Soa),
        TYPE_TXT => read_txt(&mut reader).map(RData::Txt),
        _ => reader.read_slice(rdlength as usize).map(|b| RData::Opaque(b.to_vec())),
    };

    // Inside the RDATA window, running out of bytes means RDLENGTH is wrong
    // for the type, not that the message is short.
    let decoded = decoded.map_err(|e| if e.is_truncated() { bad_length } else { e })?;
    if reader.position() != end {
        return Err(bad_length);
    }
    Ok(decoded)
}

fn fixed<const N: usize>(reader: &mut WireReader<'_>) -> Result<[u8; N], WireError> {
    let start = reader.position();
    let bytes = reader.read_slice(N)?;
    <[u8; N]>::try_from(bytes).map_err(|_| WireError::Truncated { offset: start })
}

fn read_name(reader: &mut WireReader<'_>, max_pointer_jumps: usize) -> Result<DomainName, WireError> {
    // the reader's window ends with the RDATA, so the name cannot overrun it
    let (name, next) = decode_name(reader.buffer(), reader.position(), max_pointer_jumps)?;
    reader.seek(next);
    Ok(name)
}

fn read_mx(reader: &mut WireReader<'_>, max_pointer_jumps: usize) -> Result<Mx, WireError> {
    let preference = reader.read_u16()?;
    let exchange = read_name(reader, max_pointer_jumps)?;
    Ok(Mx {
        preference,
        exchange,
    })
}

fn read_soa(reader: &mut WireReader<'_>, max_pointer_jumps: usize) -> Result<Soa, WireError> {
    let mname = read_name(reader, max_pointer_jumps)?;
    let rname = read_name(reader, max_pointer_jumps)?;
    Ok(Soa {
        mname,
        rname,
        serial: reader.read_u32()?,
        refresh: reader.read_u32()?,
        retry: reader.read_u32()?,
        expire: reader.read_u32()?,
        minimum: reader.read_u32()?,
    })
}

fn read_txt(reader: &mut WireReader<'_>) -> Result<Vec<Vec<u8>>, WireError> {
    let mut strings = Vec::new();
    while !reader.is_empty() {
        strings.push(reader.read_character_string()?.to_vec());
    }
    Ok(strings)
}
