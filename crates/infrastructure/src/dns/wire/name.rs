use super::reader::WireReader;
use dnspeek_domain::{DomainName, WireError};

const TAG_MASK: u8 = 0b1100_0000;
const TAG_LABEL: u8 = 0b0000_0000;
const TAG_POINTER: u8 = 0b1100_0000;
const POINTER_HIGH_MASK: u8 = 0b0011_1111;

/// Decodes the domain name starting at `offset`.
///
/// Returns the name and the offset where the enclosing structure resumes:
/// just past the root octet for an uncompressed name, or just past the first
/// compression pointer otherwise, however long the name it points to.
///
/// Pointers are followed with a loop, not recursion. Each target must lie
/// strictly before the run of labels that contained the pointer, so targets
/// strictly decrease and can never revisit an offset; on top of that at most
/// `max_pointer_jumps` pointers are followed per name.
pub fn decode_name(
    buf: &[u8],
    offset: usize,
    max_pointer_jumps: usize,
) -> Result<(DomainName, usize), WireError> {
    let mut reader = WireReader::at(buf, offset);
    let mut name = DomainName::root();
    let mut encoded_len = 1;
    let mut resume_at = None;
    let mut run_start = offset;
    let mut jumps = 0;

    loop {
        let at = reader.position();
        let octet = reader.read_u8()?;

        match octet & TAG_MASK {
            TAG_LABEL if octet == 0 => break,
            TAG_LABEL => {
                let label = reader.read_slice(octet as usize)?;
                encoded_len += label.len() + 1;
                if encoded_len > DomainName::MAX_ENCODED_LEN {
                    return Err(WireError::NameTooLong { offset });
                }
                name.push_label(label);
            }
            TAG_POINTER => {
                let low = reader.read_u8()?;
                let target = (((octet & POINTER_HIGH_MASK) as usize) << 8) | low as usize;
                if target >= run_start || jumps >= max_pointer_jumps {
                    return Err(WireError::CompressionLoop { offset: at, target });
                }
                jumps += 1;
                resume_at.get_or_insert(at + 2);
                run_start = target;
                reader.seek(target);
            }
            _ => {
                return Err(WireError::InvalidLabelEncoding { offset: at, octet });
            }
        }
    }

    Ok((name, resume_at.unwrap_or_else(|| reader.position())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUMPS: usize = 16;

    fn labels(name: &DomainName) -> Vec<&[u8]> {
        name.labels().iter().map(Vec::as_slice).collect()
    }

    /// 12 bytes of padding standing in for a header, then `rest`.
    fn message(rest: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; 12];
        buf.extend_from_slice(rest);
        buf
    }

    #[test]
    fn test_uncompressed_name() {
        let buf = message(b"\x07example\x03com\x00");
        let (name, next) = decode_name(&buf, 12, JUMPS).unwrap();

        assert_eq!(labels(&name), vec![&b"example"[..], &b"com"[..]]);
        assert_eq!(next, 12 + 13);
    }

    #[test]
    fn test_root_name() {
        let buf = message(b"\x00");
        let (name, next) = decode_name(&buf, 12, JUMPS).unwrap();

        assert!(name.is_root());
        assert_eq!(next, 13);
    }

    #[test]
    fn test_pointer_only_name_advances_two_bytes() {
        let buf = message(b"\x07example\x03com\x00\xc0\x0c");
        let (name, next) = decode_name(&buf, 25, JUMPS).unwrap();

        assert_eq!(labels(&name), vec![&b"example"[..], &b"com"[..]]);
        assert_eq!(next, 27);
    }

    #[test]
    fn test_labels_then_pointer_to_suffix() {
        // "www" + pointer to the "com" label at offset 20
        let buf = message(b"\x07example\x03com\x00\x03www\xc0\x14");
        let (name, next) = decode_name(&buf, 25, JUMPS).unwrap();

        assert_eq!(labels(&name), vec![&b"www"[..], &b"com"[..]]);
        assert_eq!(next, 31);
    }

    #[test]
    fn test_chained_pointers() {
        let mut buf = message(b"\x07example\x03com\x00"); // 12..25
        buf.extend_from_slice(b"\x04mail\xc0\x0c"); // 25..32
        buf.extend_from_slice(b"\x02eu\xc0\x19"); // 32..37, points at "mail"
        let (name, next) = decode_name(&buf, 32, JUMPS).unwrap();

        assert_eq!(name.to_string(), "eu.mail.example.com.");
        assert_eq!(next, 37);
    }

    #[test]
    fn test_pointer_to_itself_is_a_loop() {
        let buf = message(b"\xc0\x0c");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::CompressionLoop {
                offset: 12,
                target: 12
            })
        );
    }

    #[test]
    fn test_forward_pointer_is_a_loop() {
        let buf = message(b"\xc0\x10\x00\x00\x00");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::CompressionLoop {
                offset: 12,
                target: 16
            })
        );
    }

    #[test]
    fn test_pointer_into_own_labels_is_a_loop() {
        // "a" then a pointer back to "a": the target is behind the pointer
        // but inside the name being decoded.
        let buf = message(b"\x01a\xc0\x0c");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::CompressionLoop {
                offset: 14,
                target: 12
            })
        );
    }

    #[test]
    fn test_two_pointer_cycle_is_a_loop() {
        // 12: ptr -> 14, 14: ptr -> 12
        let buf = message(b"\xc0\x0e\xc0\x0c");
        let err = decode_name(&buf, 14, JUMPS).unwrap_err();
        assert!(matches!(err, WireError::CompressionLoop { .. }));
    }

    #[test]
    fn test_jump_ceiling() {
        // offset 12 holds the root; each later pointer targets the one before it
        let mut buf = message(b"\x00");
        buf.extend_from_slice(b"\xc0\x0c");
        for i in 0..20u16 {
            let prev = 13 + 2 * i;
            buf.extend_from_slice(&(0xc000 | prev).to_be_bytes());
        }
        let last = buf.len() - 2;

        assert_eq!(decode_name(&buf, 13 + 2 * 15, JUMPS).map(|(n, _)| n.is_root()), Ok(true));
        assert!(matches!(
            decode_name(&buf, last, JUMPS),
            Err(WireError::CompressionLoop { .. })
        ));
        assert!(decode_name(&buf, last, 64).is_ok());
    }

    #[test]
    fn test_reserved_tags_are_rejected() {
        for octet in [0x40u8, 0x7f, 0x80, 0xbf] {
            let buf = message(&[octet, 0, 0]);
            assert_eq!(
                decode_name(&buf, 12, JUMPS),
                Err(WireError::InvalidLabelEncoding { offset: 12, octet })
            );
        }
    }

    #[test]
    fn test_truncated_label_and_pointer() {
        let buf = message(b"\x07exam");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::Truncated { offset: 13 })
        );

        let buf = message(b"\x03www\xc0");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::Truncated { offset: 17 })
        );

        let buf = message(b"\x03www");
        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::Truncated { offset: 16 })
        );
    }

    #[test]
    fn test_name_longer_than_255_octets() {
        let mut rest = Vec::new();
        for _ in 0..5 {
            rest.push(63);
            rest.extend_from_slice(&[b'x'; 63]);
        }
        rest.push(0);
        let buf = message(&rest);

        assert_eq!(
            decode_name(&buf, 12, JUMPS),
            Err(WireError::NameTooLong { offset: 12 })
        );
    }

    #[test]
    fn test_name_of_exactly_255_octets() {
        // 3 * 64 + 62 + root = 255
        let mut rest = Vec::new();
        for _ in 0..3 {
            rest.push(63);
            rest.extend_from_slice(&[b'x'; 63]);
        }
        rest.push(61);
        rest.extend_from_slice(&[b'y'; 61]);
        rest.push(0);
        let buf = message(&rest);

        let (name, next) = decode_name(&buf, 12, JUMPS).unwrap();
        assert_eq!(name.encoded_len(), 255);
        assert_eq!(next, buf.len());
    }

    #[test]
    fn test_label_bytes_are_copied_verbatim() {
        let buf = message(b"\x03a.\xff\x00");
        let (name, _) = decode_name(&buf, 12, JUMPS).unwrap();

        assert_eq!(labels(&name), vec![&b"a.\xff"[..]]);
        assert_eq!(name.to_string(), "a\\.\\255.");
    }
}
