mod wire_builder;

pub use wire_builder::{encode_message, encode_name, encode_rdata, MessageBuilder};
