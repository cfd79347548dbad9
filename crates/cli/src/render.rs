use dnspeek_application::use_cases::DecodeReport;
use dnspeek_domain::{Header, OutputFormat, PartialMessage, ResourceRecord};
use std::fmt::{self, Write};

pub fn render(report: &DecodeReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&report.message)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// dig-style presentation.
pub fn render_text(message: &PartialMessage) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if let Some(header) = &message.header {
        write_header(&mut out, header)?;
    }

    if !message.questions.is_empty() {
        out.push_str("\n;; QUESTION SECTION:\n");
        for question in &message.questions {
            writeln!(out, ";{}", question)?;
        }
    }

    for (title, records) in [
        ("ANSWER", &message.answers),
        ("AUTHORITY", &message.authorities),
        ("ADDITIONAL", &message.additionals),
    ] {
        write_records(&mut out, title, records)?;
    }

    if let Some(err) = &message.error {
        writeln!(out, "\n;; DECODE ERROR: {}", err)?;
    }
    Ok(out)
}

fn write_header(out: &mut impl Write, header: &Header) -> fmt::Result {
    writeln!(
        out,
        ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
        header.opcode, header.rcode, header.id
    )?;
    writeln!(
        out,
        ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        header.flag_names().join(" "),
        header.qdcount,
        header.ancount,
        header.nscount,
        header.arcount
    )
}

fn write_records(out: &mut impl Write, title: &str, records: &[ResourceRecord]) -> fmt::Result {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n;; {} SECTION:", title)?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
