use anyhow::Context;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use data_encoding::HEXLOWER_PERMISSIVE;
use dnspeek_domain::{InputEncoding, TransportFraming};
use dnspeek_infrastructure::dns::{split_tcp_messages, UdpHeader};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads the whole input; `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            buf = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        _ => {
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
        }
    }
    Ok(buf)
}

/// Turns the input text into wire bytes. Whitespace is ignored in the text
/// encodings so dumps can be pasted as-is.
pub fn decode_input(input: Vec<u8>, encoding: InputEncoding) -> anyhow::Result<Vec<u8>> {
    match encoding {
        InputEncoding::Raw => Ok(input),
        InputEncoding::Hex => HEXLOWER_PERMISSIVE
            .decode(&strip_whitespace(&input))
            .context("Input is not valid hex"),
        InputEncoding::Base64 => {
            let mut text = strip_whitespace(&input);
            while text.last() == Some(&b'=') {
                text.pop();
            }
            URL_SAFE_NO_PAD
                .decode(&text)
                .context("Input is not valid base64url")
        }
    }
}

fn strip_whitespace(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect()
}

/// Splits the wire bytes into the DNS messages they carry.
pub fn unframe(buf: &[u8], framing: TransportFraming) -> anyhow::Result<Vec<&[u8]>> {
    match framing {
        TransportFraming::None => Ok(vec![buf]),
        TransportFraming::Tcp => {
            let messages = split_tcp_messages(buf)
                .collect::<Result<Vec<_>, _>>()
                .context("Malformed TCP length prefix")?;
            debug!(count = messages.len(), "TCP stream split");
            Ok(messages)
        }
        TransportFraming::Udp => {
            let (header, payload) = UdpHeader::parse(buf).context("Malformed UDP header")?;
            debug!(
                src_port = header.src_port,
                dst_port = header.dst_port,
                length = header.length,
                "UDP header stripped"
            );
            Ok(vec![payload])
        }
    }
}
