use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    #[default]
    Raw,
    Hex,
    /// URL-safe base64 without padding, as carried in a DoH GET `dns=` parameter.
    Base64,
}

impl std::str::FromStr for InputEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(InputEncoding::Raw),
            "hex" => Ok(InputEncoding::Hex),
            "base64" => Ok(InputEncoding::Base64),
            _ => Err(format!("Unknown input encoding: {}", s)),
        }
    }
}

/// What wraps the DNS message in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportFraming {
    #[default]
    None,
    /// Two-byte big-endian length prefix (RFC 1035 §4.2.2).
    Tcp,
    /// Eight-byte UDP header in front of the payload.
    Udp,
}

impl std::str::FromStr for TransportFraming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TransportFraming::None),
            "tcp" => Ok(TransportFraming::Tcp),
            "udp" => Ok(TransportFraming::Udp),
            _ => Err(format!("Unknown framing: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub encoding: InputEncoding,

    #[serde(default)]
    pub framing: TransportFraming,
}
