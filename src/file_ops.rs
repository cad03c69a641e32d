// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Thin adapters that read a whole file, run it through the in-memory codec
//! from crypto.rs and write the result. Also derives default output names
//! and finds the container the simulator would pick up for a given XML file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::aliases::PlainText;
use crate::consts::{CONTAINER_EXTENSION, LEGACY_CONTAINER_SUFFIX, PLAINTEXT_EXTENSION};
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::CoreResult as Result;

/// Encrypt a file on disk into an IV-prefixed container
///
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<u64> {
    let plaintext = PlainText::new(std::fs::read(input_path.as_ref())?);
    let container = encrypt_to_vec(plaintext.expose_secret())?;
    std::fs::write(output_path.as_ref(), &container)?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    info!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "encrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// Decrypt a container on disk back to plaintext
///
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<u64> {
    let container = std::fs::read(input_path.as_ref())?;
    let plaintext = decrypt_to_vec(&container)?;
    std::fs::write(output_path.as_ref(), plaintext.expose_secret())?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    info!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "decrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// `plane.xml` → `plane.bin`; anything else gets `.bin` appended
pub fn default_output_path(input: &Path) -> PathBuf {
    default_output_path_with(input, PLAINTEXT_EXTENSION, CONTAINER_EXTENSION)
}

/// Replace a trailing `.{from_ext}` with `.{to_ext}`, or append `.{to_ext}`.
///
/// The match is on the literal file name and is case-sensitive.
pub fn default_output_path_with(input: &Path, from_ext: &str, to_ext: &str) -> PathBuf {
    let from_suffix = format!(".{from_ext}");
    if let Some(stem) = input.to_str().and_then(|s| s.strip_suffix(&from_suffix)) {
        return PathBuf::from(format!("{stem}.{to_ext}"));
    }

    let mut out = OsString::from(input.as_os_str());
    out.push(".");
    out.push(to_ext);
    PathBuf::from(out)
}

/// Find the encrypted counterpart of a plaintext aircraft file, if one exists
///
/// Prefers the encryptor's default `.bin` name, then the `<name>.enc` sibling.
pub fn locate_container(plain_path: &Path) -> Option<PathBuf> {
    let bin = default_output_path(plain_path);
    if bin.is_file() {
        return Some(bin);
    }

    let mut enc = OsString::from(plain_path.as_os_str());
    enc.push(LEGACY_CONTAINER_SUFFIX);
    let enc = PathBuf::from(enc);
    enc.is_file().then_some(enc)
}
