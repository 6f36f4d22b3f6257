use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

use wirepusher_crypto::IV_SIZE;
use wirepusher_crypto::codec::{bytes_to_hex, hex_to_bytes};
use wirepusher_crypto::encrypt::encrypt;
use wirepusher_crypto::keys::random_iv;
use wirepusher_types::api::{
    BASE_URL, CLEAR_ALL_MESSAGES, CLEAR_SINGLE_MESSAGE, PARAM_ACTION, PARAM_ID, PARAM_IMAGE_URL,
    PARAM_IV, PARAM_MESSAGE, PARAM_MESSAGE_ID, PARAM_TITLE, PARAM_TYPE,
};
use wirepusher_types::{Message, User};

use crate::error::DispatchError;
use crate::transport::{DEFAULT_TIMEOUT, HttpTransport, Transport};

/// Title and body as they go on the wire.
struct Payload {
    title: String,
    body: String,
    iv: Option<[u8; IV_SIZE]>,
}

/// WirePusher service. Holds one transport and reuses it for every call.
#[derive(Debug, Clone)]
pub struct Service<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl Service<HttpTransport> {
    /// Service with a default reqwest client and a 10 second timeout.
    pub fn new() -> Result<Self, DispatchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DispatchError> {
        let transport = HttpTransport::new(timeout).map_err(DispatchError::Client)?;
        Self::with_transport(transport)
    }
}

impl<T: Transport> Service<T> {
    pub fn with_transport(transport: T) -> Result<Self, DispatchError> {
        Ok(Self {
            transport,
            base_url: parse_endpoint(BASE_URL)?,
        })
    }

    /// Send to a different endpoint than the public relay.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, DispatchError> {
        self.base_url = parse_endpoint(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send the message. If the user has a password, title and body are
    /// encrypted first.
    ///
    /// Both fields are encrypted under the same IV. That is what the relay
    /// expects (it receives a single `iv` parameter), even though reusing a
    /// CBC IV leaks whether title and body share a first block.
    pub async fn send(&self, msg: &Message, user: &User) -> Result<(), DispatchError> {
        let url = self.send_url(msg, user)?;
        info!(
            username = %user.username,
            msg_type = %msg.msg_type,
            encrypted = user.can_encrypt(),
            "Sending message"
        );
        self.dispatch("message", url).await
    }

    /// Remove the message with `msg_id` from the user's notification tray.
    pub async fn clear_one(&self, msg_id: i64, user: &User) -> Result<(), DispatchError> {
        let url = self.clear_one_url(msg_id, user);
        info!(username = %user.username, msg_id, "Clearing message");
        self.dispatch("clear msg", url).await
    }

    /// Remove every message from the user's notification tray.
    pub async fn clear_all(&self, user: &User) -> Result<(), DispatchError> {
        let url = self.clear_all_url(user);
        info!(username = %user.username, "Clearing all messages");
        self.dispatch("clear all msg", url).await
    }

    /// Build the exact request `send` would issue. Encrypting users get a
    /// fresh IV on every call.
    pub fn send_url(&self, msg: &Message, user: &User) -> Result<Url, DispatchError> {
        let payload = prepare(msg, user)?;

        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair(PARAM_ID, &user.device_id)
                .append_pair(PARAM_TITLE, &payload.title)
                .append_pair(PARAM_MESSAGE, &payload.body)
                .append_pair(PARAM_TYPE, &msg.msg_type);
            if let Some(iv) = payload.iv {
                query.append_pair(PARAM_IV, &bytes_to_hex(&iv));
            }
            if msg.has_id() {
                query.append_pair(PARAM_MESSAGE_ID, &msg.id.to_string());
            }
            if !msg.action_url.is_empty() {
                query.append_pair(PARAM_ACTION, &msg.action_url);
            }
            if !msg.image_url.is_empty() {
                query.append_pair(PARAM_IMAGE_URL, &msg.image_url);
            }
        }
        Ok(url)
    }

    pub fn clear_one_url(&self, msg_id: i64, user: &User) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(PARAM_ID, &user.device_id)
            .append_pair(PARAM_TYPE, CLEAR_SINGLE_MESSAGE)
            .append_pair(PARAM_MESSAGE_ID, &msg_id.to_string());
        url
    }

    pub fn clear_all_url(&self, user: &User) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(PARAM_ID, &user.device_id)
            .append_pair(PARAM_TYPE, CLEAR_ALL_MESSAGES);
        url
    }

    async fn dispatch(&self, operation: &'static str, url: Url) -> Result<(), DispatchError> {
        debug!(operation, host = url.host_str().unwrap_or_default(), "GET");

        let status = self
            .transport
            .get(&url)
            .await
            .map_err(|source| DispatchError::Transport {
                operation,
                url: url.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            warn!(operation, %status, "Relay rejected request");
            return Err(DispatchError::Status {
                status,
                url: url.to_string(),
            });
        }

        debug!(operation, "Relay accepted request");
        Ok(())
    }
}

fn parse_endpoint(base_url: &str) -> Result<Url, DispatchError> {
    Url::parse(base_url).map_err(|source| DispatchError::InvalidEndpoint {
        url: base_url.to_string(),
        source,
    })
}

/// Encrypt title and body when the user has a password, else pass them through.
fn prepare(msg: &Message, user: &User) -> Result<Payload, DispatchError> {
    if !user.can_encrypt() {
        return Ok(Payload {
            title: msg.title.clone(),
            body: msg.body.clone(),
            iv: None,
        });
    }

    let iv = random_iv().map_err(DispatchError::crypto("retrieving random iv"))?;
    let key = hex_to_bytes(&user.password())
        .map_err(DispatchError::crypto("reading password of user"))?;

    let title =
        encrypt(&msg.title, &iv, &key).map_err(DispatchError::crypto("encrypting title"))?;
    let body = encrypt(&msg.body, &iv, &key).map_err(DispatchError::crypto("encrypting body"))?;

    Ok(Payload {
        title,
        body,
        iv: Some(iv),
    })
}
