//! RFC 1035 §4.1 message decoding.
//!
//! Everything here reads from an immutable buffer through [`WireReader`],
//! which bounds-checks every access, so malformed input surfaces as a
//! [`WireError`](dnspeek_domain::WireError) and never as a panic.
pub mod bitfield;
pub mod header;
pub mod message;
pub mod name;
pub mod rdata;
pub mod reader;
pub mod section;

pub use bitfield::BitRange;
pub use header::decode_header;
pub use message::{decode_message, decode_message_partial, MessageDecoder};
pub use name::decode_name;
pub use rdata::decode_rdata;
pub use reader::WireReader;
pub use section::{decode_questions, decode_records};
