//! Wire-format decoding for dnspeek.
pub mod dns;
