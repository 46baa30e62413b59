//! Repository contracts consumed by the signup pipeline.

use crate::error::StoreError;
use crate::types::{AccountModel, AddAccountModel};
use async_trait::async_trait;

/// Persists new accounts.
///
/// Implementations assign a fresh identifier on every call and must stay
/// safe under concurrent use.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store a new account. `account.password` is already hashed.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, StoreError>;
}

/// Records server failure traces for later inspection.
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> Result<(), StoreError>;
}
