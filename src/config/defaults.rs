// src/config/defaults.rs
use crate::config::app::{Extensions, Logging};
use crate::consts::{CONTAINER_EXTENSION, PLAINTEXT_EXTENSION};

pub const CONFIG_ENV_VAR: &str = "AIRCRAFT_CIPHER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "aircraft-cipher.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn default_extensions() -> Extensions {
    Extensions {
        plaintext: PLAINTEXT_EXTENSION.into(),
        container: CONTAINER_EXTENSION.into(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
