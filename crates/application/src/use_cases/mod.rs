pub mod decode_message;

pub use decode_message::{DecodeMessageUseCase, DecodePolicy, DecodeReport};
