mod mock_decoder;

pub use mock_decoder::{sample_header, sample_message, MockMessageDecoder};
