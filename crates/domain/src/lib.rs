//! dnspeek domain layer: the decoded-message data model, its errors and
//! the configuration shared by the decoder and the CLI.
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod header;
pub mod message;

pub use config::{
    CliOverrides, Config, ConfigError, DecoderConfig, DecoderLimits, InputEncoding, OutputFormat,
    TransportFraming,
};
pub use dns_record::{DnsClass, Mx, Question, RData, RecordType, ResourceRecord, Soa};
pub use domain_name::DomainName;
pub use errors::{DecodeError, Section, WireError};
pub use header::{Header, MessageType, Opcode, ResponseCode};
pub use message::{DecodedMessage, PartialMessage};
