use thiserror::Error;

/// Errors raised while preparing an encrypted message.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid key length. expected: {expected}, found: {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("invalid iv length. expected: {expected}, found: {actual}")]
    InvalidIvSize { expected: usize, actual: usize },

    #[error("pkcs7: invalid block size {0}")]
    InvalidBlockSize(usize),

    #[error("generation of random iv failed: {0}")]
    RandomSource(String),

    #[error("invalid hex string: {0}")]
    Decode(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
