/// An MSB-first bit range `[start, end)` within one byte; bit 0 is the most
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    start: u8,
    end: u8,
}

impl BitRange {
    pub const fn new(start: u8, end: u8) -> Self {
        assert!(start < end && end <= 8, "bit range must lie within one byte");
        Self { start, end }
    }

    pub const fn single(bit: u8) -> Self {
        Self::new(bit, bit + 1)
    }

    pub const fn width(&self) -> u8 {
        self.end - self.start
    }

    /// Value of the range as an unsigned integer.
    pub const fn extract(&self, byte: u8) -> u8 {
        let mask = ((1u16 << self.width()) - 1) as u8;
        (byte >> (8 - self.end)) & mask
    }

    pub const fn is_set(&self, byte: u8) -> bool {
        self.extract(byte) != 0
    }
}

/// Header byte 2: `QR | OPCODE(4) | AA | TC | RD`.
pub const QR: BitRange = BitRange::single(0);
pub const OPCODE: BitRange = BitRange::new(1, 5);
pub const AA: BitRange = BitRange::single(5);
pub const TC: BitRange = BitRange::single(6);
pub const RD: BitRange = BitRange::single(7);

/// Header byte 3: `RA | Z | AD | CD | RCODE(4)`.
pub const RA: BitRange = BitRange::single(0);
pub const Z: BitRange = BitRange::single(1);
pub const AD: BitRange = BitRange::single(2);
pub const CD: BitRange = BitRange::single(3);
pub const RCODE: BitRange = BitRange::new(4, 8);
