//! File-backed repositories.

use crate::error::StoreError;
use crate::memory::{insert_account, AccountMap};
use crate::repository::{AddAccountRepository, LogErrorRepository};
use crate::types::{AccountModel, AddAccountModel, ErrorLogEntry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

/// On-disk layout of the accounts file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    accounts: Vec<AccountModel>,
}

/// Account repository persisted as a single JSON document.
///
/// The whole document is rewritten on every insert. Writes go to a temp
/// file first and are then renamed over the target.
pub struct FileAccountRepository {
    path: PathBuf,
    accounts: RwLock<AccountMap>,
}

impl FileAccountRepository {
    /// Open the repository, loading existing accounts from `path`.
    ///
    /// A missing file yields an empty repository.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let accounts = load_accounts(&path).await?;

        info!(
            "Loaded {} accounts from {:?}",
            accounts.len(),
            path
        );

        Ok(Self {
            path,
            accounts: RwLock::new(accounts),
        })
    }

    /// Number of stored accounts.
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

async fn load_accounts(path: &Path) -> Result<AccountMap, StoreError> {
    if !fs::try_exists(path).await? {
        info!("Accounts file not found at {:?}, starting empty", path);
        return Ok(AccountMap::new());
    }

    let data = fs::read(path).await?;
    if data.is_empty() {
        warn!("Accounts file {:?} is empty, starting empty", path);
        return Ok(AccountMap::new());
    }

    let file: AccountsFile = serde_json::from_slice(&data)?;
    Ok(file
        .accounts
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect())
}

async fn save_accounts(path: &Path, accounts: &AccountMap) -> Result<(), StoreError> {
    let mut sorted: Vec<AccountModel> = accounts.values().cloned().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    let data = serde_json::to_vec_pretty(&AccountsFile { accounts: sorted })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &data).await?;
    fs::rename(&temp_path, path).await?;

    debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

#[async_trait]
impl AddAccountRepository for FileAccountRepository {
    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, StoreError> {
        let mut accounts = self.accounts.write().await;
        let created = insert_account(&mut accounts, account)?;

        // Keep memory and disk in step: undo the insert if the write fails.
        if let Err(e) = save_accounts(&self.path, &accounts).await {
            accounts.remove(&created.id);
            return Err(e);
        }

        debug!(id = %created.id, "Account persisted");
        Ok(created)
    }
}

/// Error log appended to a JSON Lines file, one entry per line.
pub struct FileLogRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read back every entry in the log. Unparseable lines are skipped.
    pub async fn entries(&self) -> Result<Vec<ErrorLogEntry>, StoreError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path).await?;
        Ok(data
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping malformed error log line: {}", e);
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl LogErrorRepository for FileLogRepository {
    async fn log_error(&self, stack: &str) -> Result<(), StoreError> {
        let mut line = serde_json::to_vec(&ErrorLogEntry::new(stack))?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        Ok(())
    }
}
