use rand::{TryRngCore, rngs::OsRng};
use sha1::{Digest, Sha1};

use crate::{CryptoError, IV_SIZE, Result};

/// Length of a SHA-1 digest.
pub const PASSWORD_HASH_SIZE: usize = 20;

/// Hash a password with a single unsalted SHA-1 round.
///
/// The relay derives the same key from the password the user typed into the
/// app, so salting or stretching here would break decryption on the device.
pub fn hash_password(password: &str) -> [u8; PASSWORD_HASH_SIZE] {
    Sha1::digest(password.as_bytes()).into()
}

/// Generate a random 16-byte IV from the OS entropy source.
pub fn random_iv() -> Result<[u8; IV_SIZE]> {
    let mut iv = [0u8; IV_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(iv)
}
