use anyhow::Context;
use clap::Parser;
use dnspeek_application::use_cases::{DecodeMessageUseCase, DecodePolicy};
use dnspeek_domain::{CliOverrides, InputEncoding, OutputFormat, TransportFraming};
use dnspeek_infrastructure::dns::MessageDecoder;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;
mod input;
mod render;

#[derive(Parser)]
#[command(name = "dnspeek")]
#[command(version)]
#[command(about = "dnspeek - Decode and inspect raw DNS messages")]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Input encoding (raw, hex, base64)
    #[arg(short = 'e', long)]
    encoding: Option<InputEncoding>,

    /// Transport framing around the message (none, tcp, udp)
    #[arg(short = 'f', long)]
    framing: Option<TransportFraming>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Print whatever decoded before the first error instead of failing
    #[arg(long)]
    lenient: bool,

    /// Compression pointers followed per name before giving up
    #[arg(long)]
    max_pointer_jumps: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        max_pointer_jumps: cli.max_pointer_jumps,
        lenient: cli.lenient,
        encoding: cli.encoding,
        framing: cli.framing,
        format: cli.format,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!(
        source = %bootstrap::config_source(cli.config.as_deref()),
        "dnspeek v{}",
        env!("CARGO_PKG_VERSION")
    );
    debug!(?config, "Effective configuration");

    let raw = input::read_input(cli.input.as_deref())?;
    let wire = input::decode_input(raw, config.input.encoding)?;
    let messages = input::unframe(&wire, config.input.framing)?;

    let decoder = Arc::new(MessageDecoder::new(config.decoder.limits));
    let use_case =
        DecodeMessageUseCase::new(decoder, DecodePolicy::from_lenient(config.decoder.lenient));

    let mut complete = true;
    for (index, message) in messages.iter().enumerate() {
        let report = use_case
            .execute(message)
            .with_context(|| format!("Failed to decode message {}", index))?;
        complete &= report.is_complete();

        if index > 0 && config.output.format == OutputFormat::Text {
            println!();
        }
        println!("{}", render::render(&report, config.output.format)?.trim_end());
    }

    Ok(if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
