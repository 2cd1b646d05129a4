//! Credential storage with salted SHA-256 hashing. Passwords are never kept
//! in clear text; each user gets a fresh random salt at registration.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

const SALT_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username `{0}` already exists")]
    DuplicateUser(String),
    #[error("username and password must not be empty")]
    EmptyCredentials,
}

/// One stored credential: hex salt plus hex SHA-256 of salt-prefixed password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredCredential {
    pub salt: String,
    pub hash: String,
}

/// Username-keyed credential map, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialVault {
    users: BTreeMap<String, StoredCredential>,
}

impl CredentialVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user; duplicate usernames are rejected without change.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        if self.users.contains_key(username) {
            return Err(AuthError::DuplicateUser(username.to_string()));
        }
        let salt: [u8; SALT_LEN] = rand::rng().random();
        let credential = StoredCredential {
            salt: hex::encode(salt),
            hash: hash_password(&salt, password),
        };
        self.users.insert(username.to_string(), credential);
        Ok(())
    }

    /// Rehashes the supplied password with the stored salt and compares.
    /// Unknown users verify as `false`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(stored) = self.users.get(username) else {
            return false;
        };
        let Ok(salt) = hex::decode(&stored.salt) else {
            return false;
        };
        hash_password(&salt, password) == stored.hash
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn stored(&self, username: &str) -> Option<&StoredCredential> {
        self.users.get(username)
    }
}

fn hash_password(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
