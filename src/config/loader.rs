//! Configuration loading and resolution.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the backend origin.
pub const ORIGIN_ENV: &str = "HTTP_RELAY_ORIGIN";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file without validating it.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RelayConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Resolve the effective configuration and validate it.
///
/// The origin is taken from the first source that supplies one:
/// CLI flag, then the `HTTP_RELAY_ORIGIN` environment variable, then the
/// config file.
pub fn resolve(cli_origin: Option<&str>, config_path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    let env_origin = env::var(ORIGIN_ENV).ok();
    if let Some(origin) = cli_origin.map(str::to_string).or(env_origin) {
        config.origin = Some(origin);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
