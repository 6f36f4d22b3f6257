use std::fmt;

use thiserror::Error;
use tracing::debug;

use wirepusher_crypto::AES_KEY_SIZE;
use wirepusher_crypto::codec::bytes_to_hex;
use wirepusher_crypto::keys::{PASSWORD_HASH_SIZE, hash_password};

use crate::api::DEFAULT_TYPE;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("cannot create user {username:?}: {reason}")]
    Creation { username: String, reason: String },
}

/// A WirePusher recipient.
///
/// `device_id` is the WirePusher ID shown in the app. When a password is set
/// the same password must be entered in the app, and messages are encrypted.
#[derive(Clone)]
pub struct User {
    pub username: String,
    pub device_id: String,
    password_hash: Option<[u8; PASSWORD_HASH_SIZE]>,
}

impl User {
    /// Create a user, hashing the password when one is given.
    /// An empty password means messages go out in plaintext.
    pub fn new(username: &str, device_id: &str, password: &str) -> Result<Self, UserError> {
        if device_id.trim().is_empty() {
            return Err(UserError::Creation {
                username: username.to_string(),
                reason: "device id is empty".into(),
            });
        }

        let password_hash = (!password.is_empty()).then(|| hash_password(password));
        debug!(username, encrypted = password_hash.is_some(), "user created");

        Ok(Self {
            username: username.to_string(),
            device_id: device_id.to_string(),
            password_hash,
        })
    }

    /// The first 16 bytes of the password hash, hex-encoded.
    /// Hex-decoded, this is the AES-128 key. Empty without a password.
    pub fn password(&self) -> String {
        self.encryption_key()
            .map(|key| bytes_to_hex(&key))
            .unwrap_or_default()
    }

    /// The raw AES-128 key, if the user has a password.
    pub fn encryption_key(&self) -> Option<[u8; AES_KEY_SIZE]> {
        self.password_hash.map(|hash| {
            let mut key = [0u8; AES_KEY_SIZE];
            key.copy_from_slice(&hash[..AES_KEY_SIZE]);
            key
        })
    }

    /// True when a password was given and messages can be encrypted.
    pub fn can_encrypt(&self) -> bool {
        self.password_hash.is_some()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("device_id", &self.device_id)
            .field("can_encrypt", &self.can_encrypt())
            .finish()
    }
}

/// A notification to send.
///
/// `id == 0` means the message has no identifier and cannot be cleared or
/// replaced later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub msg_type: String,
    pub action_url: String,
    pub image_url: String,
}

impl Message {
    pub fn new(msg_type: &str, title: &str, body: &str) -> Self {
        Self::with_id(0, msg_type, title, body)
    }

    /// A message that can later be cleared or overwritten by referencing `id`.
    pub fn with_id(id: i64, msg_type: &str, title: &str, body: &str) -> Self {
        let msg_type = if msg_type.is_empty() { DEFAULT_TYPE } else { msg_type };
        Self {
            id,
            title: title.to_string(),
            body: body.to_string(),
            msg_type: msg_type.to_string(),
            action_url: String::new(),
            image_url: String::new(),
        }
    }

    /// URI the app opens when the notification is tapped.
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = url.into();
        self
    }

    /// URI of an image shown in the notification.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn has_id(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirepusher_crypto::codec::hex_to_bytes;

    #[test]
    fn user_without_password_cannot_encrypt() {
        let user = User::new("u2", "dev456", "").unwrap();
        assert!(!user.can_encrypt());
        assert_eq!(user.password(), "");
        assert!(user.encryption_key().is_none());
    }

    #[test]
    fn user_with_password_has_hex_key() {
        let user = User::new("u1", "dev123", "secret").unwrap();
        assert!(user.can_encrypt());

        let password = user.password();
        assert_eq!(password.len(), 32);
        assert!(password.chars().all(|c| c.is_ascii_hexdigit()));

        let key = hex_to_bytes(&password).unwrap();
        assert_eq!(key, user.encryption_key().unwrap());
        assert_eq!(key, &hash_password("secret")[..16]);
    }

    #[test]
    fn same_password_same_key() {
        let a = User::new("a", "dev1", "myS3cret").unwrap();
        let b = User::new("b", "dev2", "myS3cret").unwrap();
        assert_eq!(a.password(), b.password());
    }

    #[test]
    fn empty_device_id_is_rejected() {
        let err = User::new("u1", " ", "secret").unwrap_err();
        assert!(matches!(err, UserError::Creation { ref username, .. } if username == "u1"));
    }

    #[test]
    fn debug_hides_password_hash() {
        let user = User::new("u1", "dev123", "secret").unwrap();
        let rendered = format!("{:?}", user);
        assert!(rendered.contains("can_encrypt: true"));
        assert!(!rendered.contains(&user.password()));
    }

    #[test]
    fn message_defaults() {
        let msg = Message::new("", "Hi", "Body");
        assert_eq!(msg.id, 0);
        assert!(!msg.has_id());
        assert_eq!(msg.msg_type, DEFAULT_TYPE);
        assert!(msg.action_url.is_empty());
        assert!(msg.image_url.is_empty());
    }

    #[test]
    fn message_with_id_and_urls() {
        let msg = Message::with_id(7, "Alert", "Hi", "Body")
            .with_action_url("https://example.com")
            .with_image_url("https://example.com/a.png");
        assert!(msg.has_id());
        assert_eq!(msg.msg_type, "Alert");
        assert_eq!(msg.action_url, "https://example.com");
        assert_eq!(msg.image_url, "https://example.com/a.png");
    }
}
