//! Storage backends selected at startup.

use crate::error::StoreError;
use crate::file::{FileAccountRepository, FileLogRepository};
use crate::memory::{MemoryAccountRepository, MemoryLogRepository};
use crate::repository::{AddAccountRepository, LogErrorRepository};
use crate::types::{AccountModel, AddAccountModel};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Account storage that works with or without persistence.
pub enum AccountStore {
    /// JSON file on disk
    File(FileAccountRepository),
    /// In-memory only (no persistence)
    Memory(MemoryAccountRepository),
}

impl AccountStore {
    /// Open a file-backed store at `path`.
    pub async fn file(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(AccountStore::File(FileAccountRepository::open(path).await?))
    }

    pub fn memory() -> Self {
        AccountStore::Memory(MemoryAccountRepository::new())
    }

    /// Open the store configured by `persist`.
    pub async fn open(path: impl Into<PathBuf>, persist: bool) -> Result<Self, StoreError> {
        if persist {
            Self::file(path).await
        } else {
            info!("Persistence disabled, accounts are kept in memory");
            Ok(Self::memory())
        }
    }

    /// Number of stored accounts.
    pub async fn count(&self) -> usize {
        match self {
            AccountStore::File(s) => s.count().await,
            AccountStore::Memory(s) => s.count().await,
        }
    }
}

#[async_trait]
impl AddAccountRepository for AccountStore {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, StoreError> {
        match self {
            AccountStore::File(s) => s.add(account).await,
            AccountStore::Memory(s) => s.add(account).await,
        }
    }
}

/// Error-log storage that works with or without persistence.
pub enum LogStore {
    File(FileLogRepository),
    Memory(MemoryLogRepository),
}

impl LogStore {
    pub fn open(path: impl Into<PathBuf>, persist: bool) -> Self {
        if persist {
            LogStore::File(FileLogRepository::new(path))
        } else {
            LogStore::Memory(MemoryLogRepository::new())
        }
    }
}

#[async_trait]
impl LogErrorRepository for LogStore {
    async fn log_error(&self, stack: &str) -> Result<(), StoreError> {
        match self {
            LogStore::File(s) => s.log_error(stack).await,
            LogStore::Memory(s) => s.log_error(stack).await,
        }
    }
}
