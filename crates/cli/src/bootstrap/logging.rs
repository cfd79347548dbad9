use dnspeek_domain::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Output goes to stderr so stdout carries
/// only decoded messages; `RUST_LOG`, when set, replaces the configured level.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(&config.logging.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
