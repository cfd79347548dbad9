pub mod framing;
pub mod wire;

pub use framing::{split_tcp_messages, strip_tcp_length_prefix, UdpHeader};
pub use wire::{decode_message, decode_message_partial, MessageDecoder};
