use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{User, UserError};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("cannot read user directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid user directory: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One configured recipient. The password is optional; without it messages
/// are sent in plaintext.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub username: String,
    pub device_id: String,
    #[serde(default)]
    pub password: String,
}

impl UserEntry {
    pub fn to_user(&self) -> Result<User, UserError> {
        User::new(&self.username, &self.device_id, &self.password)
    }
}

/// Known recipients, loaded from a JSON file:
///
/// ```json
/// { "users": [ { "username": "user001", "device_id": "x8Xx7Xx6X", "password": "myS3cret" } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDirectory {
    #[serde(default)]
    users: Vec<UserEntry>,
}

impl UserDirectory {
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json(&json)?;
        info!("Loaded {} user(s) from {}", directory.users.len(), path.display());
        Ok(directory)
    }

    /// Look a user up by name. With duplicate names the first entry wins.
    pub fn get(&self, username: &str) -> Option<&UserEntry> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = r#"{
        "users": [
            { "username": "user001", "device_id": "x8Xx7Xx6X", "password": "myS3cret" },
            { "username": "user002", "device_id": "x5Yx9Yx0X", "password": "myS3cretP@ss" },
            { "username": "user003", "device_id": "z3Xx2Zx1X" }
        ]
    }"#;

    #[test]
    fn parses_and_looks_up() {
        let dir = UserDirectory::from_json(USERS).unwrap();
        assert_eq!(dir.len(), 3);

        let entry = dir.get("user001").unwrap();
        assert_eq!(entry.device_id, "x8Xx7Xx6X");
        assert!(entry.to_user().unwrap().can_encrypt());

        let plain = dir.get("user003").unwrap().to_user().unwrap();
        assert!(!plain.can_encrypt());

        assert!(dir.get("nobody").is_none());
    }

    #[test]
    fn empty_directory() {
        let dir = UserDirectory::from_json("{}").unwrap();
        assert!(dir.is_empty());
        assert!(dir.get("user001").is_none());

        assert!(!UserDirectory::from_json(USERS).unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{ "users": [ { "username": "a", "device_id": "b", "pin": "1" } ] }"#;
        assert!(matches!(
            UserDirectory::from_json(json),
            Err(DirectoryError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = UserDirectory::load(Path::new("/nonexistent/users.json")).unwrap_err();
        assert!(matches!(err, DirectoryError::Io { .. }));
    }
}
