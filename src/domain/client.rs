use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::store::Record;

/// A registered client. Append-only: clients are never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub phone: String,
}

impl Client {
    /// Validates name and phone format before the record can reach a store.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone = phone.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty("client name"));
        }
        if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(ValidationError::InvalidName);
        }
        if phone.is_empty() {
            return Err(ValidationError::Empty("client phone"));
        }
        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self { id: 0, name, phone })
    }
}

impl Record for Client {
    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client {}: {}, phone {}", self.id, self.name, self.phone)
    }
}
