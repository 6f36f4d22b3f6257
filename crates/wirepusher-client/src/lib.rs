//! WirePusher dispatch.
//!
//! Turns a `(Message, User)` pair into one GET against the relay, encrypting
//! title and body first when the user has a password, and checks the answer.

pub mod error;
pub mod service;
pub mod transport;

pub use error::DispatchError;
pub use service::Service;
pub use transport::{HttpTransport, Transport, TransportError};
