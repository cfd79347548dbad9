use crate::{DecodeError, Header, Question, ResourceRecord};
use serde::Serialize;

/// A fully decoded DNS message. Owns all of its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedMessage {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DecodedMessage {
    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }

    /// All resource records in wire order.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
    }
}

/// Whatever decoded before the first error, for callers that opt into a
/// lenient policy. `header` is `None` only when the header itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct PartialMessage {
    pub header: Option<Header>,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
    pub error: Option<DecodeError>,
}

impl PartialMessage {
    pub fn is_complete(&self) -> bool {
        self.header.is_some() && self.error.is_none()
    }

    /// Converts into a strict result: the first error wins.
    pub fn into_result(self) -> Result<DecodedMessage, DecodeError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        match self.header {
            Some(header) => Ok(DecodedMessage {
                header,
                questions: self.questions,
                answers: self.answers,
                authorities: self.authorities,
                additionals: self.additionals,
            }),
            None => Err(DecodeError::header(crate::WireError::Truncated { offset: 0 })),
        }
    }
}

impl From<DecodedMessage> for PartialMessage {
    fn from(message: DecodedMessage) -> Self {
        Self {
            header: Some(message.header),
            questions: message.questions,
            answers: message.answers,
            authorities: message.authorities,
            additionals: message.additionals,
            error: None,
        }
    }
}
