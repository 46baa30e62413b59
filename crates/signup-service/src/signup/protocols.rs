//! Contracts between the signup controller and its collaborators.

use super::http::{HttpRequest, HttpResponse};
use crate::error::{AddAccountError, EmailValidatorError, EncryptError};
use account_store::{AccountModel, AddAccountModel};
use async_trait::async_trait;

/// Turns a request into a response. Never fails: every error becomes a response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Email syntax check.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

/// One-way password transform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> Result<String, EncryptError>;
}

/// Account creation use case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create an account from plaintext signup data.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AddAccountError>;
}
