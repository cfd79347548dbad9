pub mod decoder;
pub mod errors;
pub mod input;
pub mod logging;
pub mod output;
pub mod root;

pub use decoder::{DecoderConfig, DecoderLimits};
pub use errors::ConfigError;
pub use input::{InputConfig, InputEncoding, TransportFraming};
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
