use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Low-level failure raised while reading the wire format.
///
/// Every variant carries the absolute offset into the message at which the
/// problem was detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireError {
    #[error("message truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("invalid label encoding {octet:#04x} at offset {offset}")]
    InvalidLabelEncoding { offset: usize, octet: u8 },

    #[error("compression loop: pointer at offset {offset} targets offset {target}")]
    CompressionLoop { offset: usize, target: usize },

    #[error("domain name starting at offset {offset} exceeds 255 octets")]
    NameTooLong { offset: usize },

    #[error("rdata length {rdlength} is invalid for type {rtype} at offset {offset}")]
    BadRDataLength {
        rtype: u16,
        rdlength: u16,
        offset: usize,
    },
}

impl WireError {
    pub fn offset(&self) -> usize {
        match self {
            WireError::Truncated { offset }
            | WireError::InvalidLabelEncoding { offset, .. }
            | WireError::CompressionLoop { offset, .. }
            | WireError::NameTooLong { offset }
            | WireError::BadRDataLength { offset, .. } => *offset,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, WireError::Truncated { .. })
    }
}

/// The part of a message a decode error occurred in, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`WireError`] located within the message: which section, and which entry
/// of that section (`None` for the header).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{} section{}: {source}", .section, index_suffix(.index))]
pub struct DecodeError {
    pub section: Section,
    pub index: Option<usize>,
    pub source: WireError,
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" entry {}", i),
        None => String::new(),
    }
}

impl DecodeError {
    pub fn header(source: WireError) -> Self {
        Self {
            section: Section::Header,
            index: None,
            source,
        }
    }

    pub fn in_section(section: Section, index: usize, source: WireError) -> Self {
        Self {
            section,
            index: Some(index),
            source,
        }
    }

    pub fn offset(&self) -> usize {
        self.source.offset()
    }

    /// True when a section declared more entries than the buffer holds.
    pub fn is_count_mismatch(&self) -> bool {
        self.index.is_some() && self.source.is_truncated()
    }
}
