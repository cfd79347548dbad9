use serde::Serialize;
use std::fmt;

/// A domain name as an ordered sequence of labels, root label implied.
///
/// Labels are opaque bytes: the wire format does not restrict them to ASCII,
/// so nothing here assumes UTF-8. The decoder copies every label out of the
/// message, so a `DomainName` never borrows from the buffer it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub const MAX_LABEL_LEN: usize = 63;
    /// Upper bound on length octets plus label bytes plus the root octet.
    pub const MAX_ENCODED_LEN: usize = 255;

    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self {
            labels: labels.into_iter().map(|l| l.as_ref().to_vec()).collect(),
        }
    }

    /// Splits a dotted name such as `"example.com."`. No escape handling.
    pub fn from_dotted(name: &str) -> Self {
        Self::from_labels(name.split('.').filter(|l| !l.is_empty()))
    }

    pub fn push_label(&mut self, label: &[u8]) {
        self.labels.push(label.to_vec());
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the uncompressed wire encoding, root octet included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn eq_ignore_ascii_case(&self, other: &DomainName) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &[u8]) -> fmt::Result {
    for &b in label {
        match b {
            b'.' => f.write_str("\\.")?,
            b'\\' => f.write_str("\\\\")?,
            0x21..=0x7e => write!(f, "{}", b as char)?,
            _ => write!(f, "\\{:03}", b)?,
        }
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write_label(f, label)?;
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl Serialize for DomainName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
