// src/error.rs
//! Public error type for the entire crate

use cbc::cipher::block_padding::UnpadError;
use cbc::cipher::InvalidLength;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encrypted data too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("Crypto operation failed: {0}")]
    Crypto(CipherFailure),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Failures reported by the AES-256-CBC primitive itself
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFailure {
    #[error("cipher rejected the key or IV length")]
    InvalidKeyIv,

    /// Misaligned ciphertext or malformed padding: wrong key or corrupted data
    #[error("decryption failed (wrong key or corrupted data)")]
    Padding,
}

impl From<InvalidLength> for CoreError {
    fn from(_: InvalidLength) -> Self {
        CoreError::Crypto(CipherFailure::InvalidKeyIv)
    }
}

impl From<UnpadError> for CoreError {
    fn from(_: UnpadError) -> Self {
        CoreError::Crypto(CipherFailure::Padding)
    }
}
