use crate::ports::MessageDecoderPort;
use dnspeek_domain::{DecodeError, PartialMessage};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// How decode failures past the header are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Any error fails the whole message.
    #[default]
    Strict,
    /// Sections decoded before the first error are kept and the error is
    /// reported alongside them. A broken header still fails.
    Lenient,
}

impl DecodePolicy {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            DecodePolicy::Lenient
        } else {
            DecodePolicy::Strict
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub policy: DecodePolicy,
    pub message: PartialMessage,
}

impl DecodeReport {
    pub fn is_complete(&self) -> bool {
        self.message.is_complete()
    }
}

pub struct DecodeMessageUseCase {
    decoder: Arc<dyn MessageDecoderPort>,
    policy: DecodePolicy,
}

impl DecodeMessageUseCase {
    pub fn new(decoder: Arc<dyn MessageDecoderPort>, policy: DecodePolicy) -> Self {
        Self { decoder, policy }
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    pub fn execute(&self, buf: &[u8]) -> Result<DecodeReport, DecodeError> {
        let message = match self.policy {
            DecodePolicy::Strict => self.decoder.decode(buf).map(PartialMessage::from),
            DecodePolicy::Lenient => {
                let partial = self.decoder.decode_partial(buf);
                match partial.error {
                    Some(err) if partial.header.is_none() => Err(err),
                    _ => Ok(partial),
                }
            }
        };

        let message = message.inspect_err(|e| {
            warn!(error = %e, offset = e.offset(), bytes = buf.len(), "Message decode failed");
        })?;

        if let Some(err) = &message.error {
            warn!(error = %err, offset = err.offset(), "Message partially decoded");
        }
        debug!(
            bytes = buf.len(),
            questions = message.questions.len(),
            answers = message.answers.len(),
            authorities = message.authorities.len(),
            additionals = message.additionals.len(),
            "Message decoded"
        );

        Ok(DecodeReport {
            policy: self.policy,
            message,
        })
    }
}
