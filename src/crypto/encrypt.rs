// src/crypto/encrypt.rs
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use tracing::debug;

use super::Aes256CbcEnc;
use crate::consts::{AES_KEY, IV_LEN};
use crate::CoreResult as Result;

/// Encrypt plaintext → `IV || ciphertext` container (in-memory)
///
/// The IV is drawn fresh from the thread-local CSPRNG on every call, so two
/// containers for the same plaintext never match.
pub fn encrypt_to_vec(plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(&AES_KEY, &iv)?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut container = Vec::with_capacity(IV_LEN + ciphertext.len());
    container.extend_from_slice(&iv);
    container.extend_from_slice(&ciphertext);

    debug!(
        plaintext_len = plaintext.len(),
        container_len = container.len(),
        iv = %hex::encode(iv),
        "encrypted buffer"
    );
    Ok(container)
}
