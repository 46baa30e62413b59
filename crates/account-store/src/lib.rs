//! Persistence for the signup service.
//!
//! Provides the repository contracts the signup pipeline depends on,
//! together with in-memory and JSON-file implementations:
//! - accounts, with unique ids and unique email addresses
//! - server failure traces, appended as JSON Lines

mod error;
mod file;
mod memory;
mod repository;
mod store;
mod types;

pub use error::StoreError;
pub use file::{FileAccountRepository, FileLogRepository};
pub use memory::{MemoryAccountRepository, MemoryLogRepository};
pub use repository::{AddAccountRepository, LogErrorRepository};
pub use store::{AccountStore, LogStore};
pub use types::*;
