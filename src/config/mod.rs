// src/config/mod.rs
//! Configuration system for aircraft-cipher
//!
//! Central, lazy-loaded global config from TOML with an env override for the
//! file location. The key and cipher parameters are not configurable.

pub use app::{config_path, load, Config, Extensions, Logging};
pub use defaults::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER};

mod app;
mod defaults;
