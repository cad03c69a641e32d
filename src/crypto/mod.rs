// src/crypto/mod.rs
//! Pure cryptographic operations, no I/O
//!
//! AES-256-CBC with PKCS#7 padding under the pre-shared key. Every container
//! is laid out as:
//!
//! ```text
//! offset 0..16   : IV (raw)
//! offset 16..end : ciphertext, a positive multiple of 16 bytes
//! ```
mod decrypt;
mod encrypt;
mod layout;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;
pub use layout::{ciphertext_len, container_len, is_well_formed_container};

pub(crate) type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
pub(crate) type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
