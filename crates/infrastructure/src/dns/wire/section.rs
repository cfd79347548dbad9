use super::name::decode_name;
use super::rdata::decode_rdata;
use super::reader::WireReader;
use dnspeek_domain::{DecodeError, Question, ResourceRecord, Section, WireError};

/// Smallest possible question: root name + QTYPE + QCLASS.
const MIN_QUESTION_LEN: usize = 5;
/// Smallest possible record: root name + TYPE, CLASS, TTL, RDLENGTH.
const MIN_RECORD_LEN: usize = 11;

/// Decodes `count` questions starting at `offset`.
pub fn decode_questions(
    buf: &[u8],
    offset: usize,
    count: u16,
    max_pointer_jumps: usize,
) -> Result<(Vec<Question>, usize), DecodeError> {
    let mut questions = Vec::new();
    let next = decode_questions_into(buf, offset, count, max_pointer_jumps, &mut questions)?;
    Ok((questions, next))
}

/// Decodes `count` resource records starting at `offset`; `section` only
/// labels errors.
pub fn decode_records(
    buf: &[u8],
    offset: usize,
    count: u16,
    section: Section,
    max_pointer_jumps: usize,
) -> Result<(Vec<ResourceRecord>, usize), DecodeError> {
    let mut records = Vec::new();
    let next = decode_records_into(buf, offset, count, section, max_pointer_jumps, &mut records)?;
    Ok((records, next))
}

/// Like [`decode_questions`], but appends to `out` so entries decoded before
/// a failure stay available to the caller.
pub fn decode_questions_into(
    buf: &[u8],
    offset: usize,
    count: u16,
    max_pointer_jumps: usize,
    out: &mut Vec<Question>,
) -> Result<usize, DecodeError> {
    decode_entries(buf, offset, count, MIN_QUESTION_LEN, out, |at| {
        decode_question(buf, at, max_pointer_jumps)
    })
    .map_err(|(index, source)| DecodeError::in_section(Section::Question, index, source))
}

/// Like [`decode_records`], but appends to `out`.
pub fn decode_records_into(
    buf: &[u8],
    offset: usize,
    count: u16,
    section: Section,
    max_pointer_jumps: usize,
    out: &mut Vec<ResourceRecord>,
) -> Result<usize, DecodeError> {
    decode_entries(buf, offset, count, MIN_RECORD_LEN, out, |at| {
        decode_record(buf, at, max_pointer_jumps)
    })
    .map_err(|(index, source)| DecodeError::in_section(section, index, source))
}

/// Runs `decode_one` `count` times, threading the offset through.
///
/// The declared count is untrusted, so the reservation is capped by how many
/// minimal entries could still fit in the buffer.
fn decode_entries<T>(
    buf: &[u8],
    mut offset: usize,
    count: u16,
    min_entry_len: usize,
    out: &mut Vec<T>,
    mut decode_one: impl FnMut(usize) -> Result<(T, usize), WireError>,
) -> Result<usize, (usize, WireError)> {
    let fits = buf.len().saturating_sub(offset) / min_entry_len;
    out.reserve((count as usize).min(fits));

    for index in 0..count as usize {
        let (entry, next) = decode_one(offset).map_err(|e| (index, e))?;
        out.push(entry);
        offset = next;
    }
    Ok(offset)
}

/// One question: name, then QTYPE and QCLASS.
pub fn decode_question(
    buf: &[u8],
    offset: usize,
    max_pointer_jumps: usize,
) -> Result<(Question, usize), WireError> {
    let (name, next) = decode_name(buf, offset, max_pointer_jumps)?;
    let mut reader = WireReader::at(buf, next);
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;

    Ok((
        Question {
            name,
            qtype,
            qclass,
        },
        reader.position(),
    ))
}

/// One resource record: name, the 10 fixed bytes, then RDATA.
pub fn decode_record(
    buf: &[u8],
    offset: usize,
    max_pointer_jumps: usize,
) -> Result<(ResourceRecord, usize), WireError> {
    let (name, next) = decode_name(buf, offset, max_pointer_jumps)?;
    let mut reader = WireReader::at(buf, next);
    let rtype = reader.read_u16()?;
    let rclass = reader.read_u16()?;
    let ttl = clamp_ttl(reader.read_u32()?);
    let rdlength = reader.read_u16()?;

    let rdata_start = reader.position();
    let rdata = decode_rdata(buf, rdata_start, rtype, rdlength, max_pointer_jumps)?;

    Ok((
        ResourceRecord {
            name,
            rtype,
            rclass,
            ttl,
            rdlength,
            rdata,
        },
        rdata_start + rdlength as usize,
    ))
}

/// RFC 2181 §8: a TTL with the most significant bit set is treated as zero.
fn clamp_ttl(raw: u32) -> u32 {
    if raw > i32::MAX as u32 {
        0
    } else {
        raw
    }
}
