use aes::cipher::{BlockEncryptMut, KeyIvInit, block_padding::NoPadding};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::codec::clean;
use crate::{AES_KEY_SIZE, CryptoError, IV_SIZE, Result};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;

/// Encrypt a text field for the relay.
/// Returns the ciphertext as base64 with the relay's character substitution applied.
pub fn encrypt(text: &str, iv: &[u8], key: &[u8]) -> Result<String> {
    encrypt_bytes(text.as_bytes(), iv, key)
}

/// Same as [`encrypt`] for arbitrary bytes.
pub fn encrypt_bytes(data: &[u8], iv: &[u8], key: &[u8]) -> Result<String> {
    let key: &[u8; AES_KEY_SIZE] = key.try_into().map_err(|_| CryptoError::InvalidKeySize {
        expected: AES_KEY_SIZE,
        actual: key.len(),
    })?;
    let iv: &[u8; IV_SIZE] = iv.try_into().map_err(|_| CryptoError::InvalidIvSize {
        expected: IV_SIZE,
        actual: iv.len(),
    })?;

    // Block size follows the key length, which is always one AES block here.
    let padded = pkcs7_pad(data, key.len())?;

    let ciphertext =
        Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<NoPadding>(&padded);

    Ok(clean(&BASE64.encode(ciphertext)))
}

/// Append PKCS#7 padding.
///
/// Always pads: aligned input gets a whole extra block of `block_size`
/// bytes, each equal to `block_size`.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > 256 {
        return Err(CryptoError::InvalidBlockSize(block_size));
    }

    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    // pad_len is 256 only for a 256-byte block, which PKCS#7 writes as 0x00
    padded.resize(data.len() + pad_len, pad_len as u8);
    Ok(padded)
}
