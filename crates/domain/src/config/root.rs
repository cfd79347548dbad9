use serde::{Deserialize, Serialize};

use super::decoder::{DecoderConfig, DecoderLimits};
use super::errors::ConfigError;
use super::input::{InputConfig, InputEncoding, TransportFraming};
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};

const LOCAL_CONFIG_PATH: &str = "dnspeek.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnspeek/config.toml";

/// Main configuration structure for dnspeek
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub decoder: DecoderConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnspeek.toml in current directory
    /// 3. /etc/dnspeek/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(jumps) = overrides.max_pointer_jumps {
            self.decoder.limits.max_pointer_jumps = jumps;
        }
        if overrides.lenient {
            self.decoder.lenient = true;
        }
        if let Some(encoding) = overrides.encoding {
            self.input.encoding = encoding;
        }
        if let Some(framing) = overrides.framing {
            self.input.framing = framing;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let jumps = self.decoder.limits.max_pointer_jumps;
        if jumps == 0 {
            return Err(ConfigError::Validation(
                "max_pointer_jumps cannot be 0".to_string(),
            ));
        }
        if jumps > DecoderLimits::MAX_POINTER_JUMPS_CEILING {
            return Err(ConfigError::Validation(format!(
                "max_pointer_jumps {} exceeds {}",
                jumps,
                DecoderLimits::MAX_POINTER_JUMPS_CEILING
            )));
        }
        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick up
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_pointer_jumps: Option<usize>,
    pub lenient: bool,
    pub encoding: Option<InputEncoding>,
    pub framing: Option<TransportFraming>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}
