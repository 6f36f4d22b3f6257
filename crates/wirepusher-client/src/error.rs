use reqwest::StatusCode;
use thiserror::Error;

use wirepusher_crypto::CryptoError;

use crate::transport::TransportError;

/// Everything that can stop a send or clear request. None of these are retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Preparing the encrypted payload failed; nothing was sent.
    #[error("error {operation}")]
    Crypto {
        operation: &'static str,
        #[source]
        source: CryptoError,
    },

    #[error("invalid endpoint {url:?}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot build http client")]
    Client(#[source] reqwest::Error),

    /// The relay answered with something other than 200 OK.
    #[error("unexpected http response code for url {url:?}: {status}")]
    Status { status: StatusCode, url: String },

    /// The request never got an answer (DNS, connect, timeout).
    #[error("error sending {operation} request with url {url:?}")]
    Transport {
        operation: &'static str,
        url: String,
        #[source]
        source: TransportError,
    },
}

impl DispatchError {
    pub(crate) fn crypto(operation: &'static str) -> impl FnOnce(CryptoError) -> Self {
        move |source| Self::Crypto { operation, source }
    }
}
