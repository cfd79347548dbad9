use dnspeek_domain::{DecodeError, DecodedMessage, PartialMessage};

/// Turns a raw DNS message into its decoded form.
///
/// Implementations must never panic on arbitrary input and must not retain
/// the buffer after returning.
pub trait MessageDecoderPort: Send + Sync {
    /// Strict decode: any structural problem fails the whole message.
    fn decode(&self, buf: &[u8]) -> Result<DecodedMessage, DecodeError>;

    /// Decodes as far as possible, keeping every section completed before the
    /// first error.
    fn decode_partial(&self, buf: &[u8]) -> PartialMessage;
}
