//! In-memory repositories.

use crate::error::StoreError;
use crate::repository::{AddAccountRepository, LogErrorRepository};
use crate::types::{AccountModel, AddAccountModel, ErrorLogEntry};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Accounts indexed by id.
pub(crate) type AccountMap = HashMap<String, AccountModel>;

/// Case-insensitive email comparison, including non-ASCII letters.
fn same_email(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Insert a new account into `accounts`, assigning an unused id.
pub(crate) fn insert_account(
    accounts: &mut AccountMap,
    data: AddAccountModel,
) -> Result<AccountModel, StoreError> {
    if accounts.values().any(|a| same_email(&a.email, &data.email)) {
        return Err(StoreError::EmailInUse);
    }

    let mut id = Uuid::new_v4().to_string();
    while accounts.contains_key(&id) {
        id = Uuid::new_v4().to_string();
    }

    let account = AccountModel::from_new(id.clone(), data);
    accounts.insert(id, account.clone());
    Ok(account)
}

/// Account repository that keeps everything in process memory.
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Arc<RwLock<AccountMap>>,
}

impl MemoryAccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Look up an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Option<AccountModel> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| same_email(&a.email, email))
            .cloned()
    }
}

#[async_trait]
impl AddAccountRepository for MemoryAccountRepository {
    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, StoreError> {
        let mut accounts = self.accounts.write().await;
        let created = insert_account(&mut accounts, account)?;
        debug!(id = %created.id, "Account stored in memory");
        Ok(created)
    }
}

/// Error log that keeps entries in process memory.
#[derive(Clone, Default)]
pub struct MemoryLogRepository {
    entries: Arc<RwLock<Vec<ErrorLogEntry>>>,
}

impl MemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    pub async fn entries(&self) -> Vec<ErrorLogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl LogErrorRepository for MemoryLogRepository {
    async fn log_error(&self, stack: &str) -> Result<(), StoreError> {
        self.entries.write().await.push(ErrorLogEntry::new(stack));
        Ok(())
    }
}
