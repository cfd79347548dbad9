use dnspeek_domain::WireError;

/// Cursor over a complete DNS message.
///
/// The whole buffer stays reachable so compression pointers can seek
/// backwards; reads never mutate it. Every read is bounds-checked and
/// reports the offset it started at when the buffer runs out.
#[derive(Debug, Clone, Copy)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    /// The whole underlying buffer, independent of the cursor.
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves the cursor. Seeking past the end is allowed; the next read fails.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let start = self.pos;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or(WireError::Truncated { offset: start })?;
        self.pos = end;
        Ok(&self.buf[start..end])
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_slice(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let s = self.read_slice(2)?;
        Ok(u16::from_be_bytes([s[0], s[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let s = self.read_slice(4)?;
        Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
    }

    /// Reads a `<character-string>`: one length octet, then that many bytes.
    pub fn read_character_string(&mut self) -> Result<&'a [u8], WireError> {
        let start = self.pos;
        let len = self.read_u8()? as usize;
        self.read_slice(len).map_err(|_| WireError::Truncated { offset: start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_big_endian() {
        let buf = [0x12, 0x34, 0xde, 0xad, 0xbe, 0xef, 0x7f];
        let mut reader = WireReader::new(&buf);

        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(reader.read_u8().unwrap(), 0x7f);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_short_read_reports_start_offset() {
        let buf = [0x00, 0x01, 0x02];
        let mut reader = WireReader::at(&buf, 2);

        assert_eq!(reader.read_u16(), Err(WireError::Truncated { offset: 2 }));
        // failed reads leave the cursor where it was
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_seek_past_end_fails_on_next_read() {
        let buf = [0u8; 4];
        let mut reader = WireReader::new(&buf);
        reader.seek(100);

        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.read_u8(), Err(WireError::Truncated { offset: 100 }));
    }

    #[test]
    fn test_huge_length_does_not_overflow() {
        let buf = [0u8; 4];
        let mut reader = WireReader::at(&buf, 1);

        assert_eq!(
            reader.read_slice(usize::MAX),
            Err(WireError::Truncated { offset: 1 })
        );
    }

    #[test]
    fn test_character_string() {
        let buf = [3, b'a', b'b', b'c', 5, b'x'];
        let mut reader = WireReader::new(&buf);

        assert_eq!(reader.read_character_string().unwrap(), b"abc");
        assert_eq!(
            reader.read_character_string(),
            Err(WireError::Truncated { offset: 4 })
        );
    }
}
