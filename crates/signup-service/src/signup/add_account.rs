//! Account creation backed by a password hasher and an account repository.

use super::protocols::{AddAccount, Encrypter};
use crate::error::AddAccountError;
use account_store::{AccountModel, AddAccountModel, AddAccountRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Hashes the password, then hands the account to the repository.
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AddAccountError> {
        let hashed_password = self.encrypter.encrypt(&account.password).await?;
        debug!("Password hashed");

        let created = self
            .repository
            .add(account.with_password(hashed_password))
            .await?;

        Ok(created)
    }
}
