// src/lib.rs
//! aircraft-cipher — AES-256-CBC containers for aircraft configuration files
//!
//! Features:
//! - IV-prefixed container format shared with the simulator-side decryptor
//! - Fixed, pre-shared 256-bit key
//! - Plaintext buffers wiped on drop via secure-gate

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;

// Re-export everything users need at the crate root
pub use aliases::PlainText;
pub use config::load as load_config;
pub use crypto::{decrypt_to_vec, encrypt_to_vec};
pub use error::{CipherFailure, CoreError, Result as CoreResult};
pub use file_ops::{decrypt_file, default_output_path, encrypt_file, locate_container};
