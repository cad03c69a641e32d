// src/crypto/layout.rs
//! Container length arithmetic

use crate::consts::{BLOCK_LEN, IV_LEN};

/// Ciphertext size for `plaintext_len` bytes. PKCS#7 always adds 1..=16
/// bytes, so a full block of padding follows block-aligned input.
#[inline]
pub fn ciphertext_len(plaintext_len: usize) -> usize {
    (plaintext_len / BLOCK_LEN + 1) * BLOCK_LEN
}

#[inline]
pub fn container_len(plaintext_len: usize) -> usize {
    IV_LEN + ciphertext_len(plaintext_len)
}

/// Check if data has the shape of a container: an IV followed by at least one
/// whole ciphertext block. Says nothing about whether it decrypts.
pub fn is_well_formed_container(data: &[u8]) -> bool {
    data.len() >= IV_LEN + BLOCK_LEN && (data.len() - IV_LEN) % BLOCK_LEN == 0
}
