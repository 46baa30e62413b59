//! Account and error-log record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data required to create an account.
///
/// Before it reaches a repository the `password` field holds the hash,
/// never the plaintext.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Copy of this model with the password replaced.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AddAccountModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddAccountModel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A stored account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// Assigned by the repository on creation
    pub id: String,
    pub name: String,
    pub email: String,
    /// Hashed password
    pub password: String,
}

impl AccountModel {
    /// Build a stored account from creation data and a fresh identifier.
    pub fn from_new(id: impl Into<String>, data: AddAccountModel) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            email: data.email,
            password: data.password,
        }
    }
}

impl fmt::Debug for AccountModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountModel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A recorded server failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub stack: String,
    pub date: DateTime<Utc>,
}

impl ErrorLogEntry {
    pub fn new(stack: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            date: Utc::now(),
        }
    }
}
