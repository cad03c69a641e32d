// src/crypto/decrypt.rs
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use tracing::debug;

use super::Aes256CbcDec;
use crate::aliases::PlainText;
use crate::consts::{AES_KEY, IV_LEN, MIN_CONTAINER_LEN};
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Decrypt an `IV || ciphertext` container → plaintext (in-memory)
///
/// Anything shorter than [`MIN_CONTAINER_LEN`] is rejected before the cipher
/// is touched. A ciphertext that is not block-aligned, or whose padding does
/// not check out, is reported as [`crate::CipherFailure::Padding`].
pub fn decrypt_to_vec(container: &[u8]) -> Result<PlainText> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(CoreError::TooShort {
            len: container.len(),
            min: MIN_CONTAINER_LEN,
        });
    }

    let (iv, ciphertext) = container.split_at(IV_LEN);
    let cipher = Aes256CbcDec::new_from_slices(&AES_KEY, iv)?;
    let plaintext = cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?;

    debug!(
        container_len = container.len(),
        plaintext_len = plaintext.len(),
        "decrypted buffer"
    );
    Ok(PlainText::new(plaintext))
}
