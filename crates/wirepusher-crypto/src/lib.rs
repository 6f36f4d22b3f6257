//! WirePusher Crypto Library
//!
//! Message encryption as the WirePusher relay expects it:
//! - SHA-1 of the user's password, first 16 bytes used as an AES-128 key
//! - AES-128-CBC with PKCS#7 padding and a random 16-byte IV
//! - base64 with `+/=` swapped for `-._` so ciphertext survives a query string
//!
//! None of this is modern practice (unsalted hash, IV shared between the
//! title and body of one message). It is fixed by the relay and has to stay
//! byte-compatible with it.

pub mod codec;
pub mod encrypt;
pub mod error;
pub mod keys;

pub use error::{CryptoError, Result};

/// WirePusher uses AES-128, so keys and IVs are both one block long.
pub const AES_KEY_SIZE: usize = 16;
pub const IV_SIZE: usize = 16;
