use dnspeek_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Runs before logging is set up.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Where `load_config` read its file from, for the startup log line.
pub fn config_source(path: Option<&str>) -> String {
    path.map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "built-in defaults".to_string())
}
