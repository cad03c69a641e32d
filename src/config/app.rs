// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::CoreResult as Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    pub logging: Logging,
}

/// Extensions used when deriving an output path from the input name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Extensions {
    pub plaintext: String,
    pub container: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
            logging: default_logging(),
        }
    }
}

impl Default for Extensions {
    fn default() -> Self {
        default_extensions()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file, falling back to built-in defaults if it is missing
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `$AIRCRAFT_CIPHER_CONFIG`, or `aircraft-cipher.toml` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load config once per process
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = Config::from_file(&config_path())?;
    Ok(CONFIG.get_or_init(|| conf))
}
