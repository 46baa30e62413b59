//! bcrypt password hashing.

use crate::error::EncryptError;
use crate::signup::Encrypter;
use async_trait::async_trait;
use tracing::{instrument, warn};

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// [`Encrypter`] backed by bcrypt.
///
/// Hashing runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    /// Create an adapter with the given work factor, clamped to bcrypt's range.
    pub fn new(cost: u32) -> Self {
        let clamped = cost.clamp(MIN_COST, MAX_COST);
        if clamped != cost {
            warn!(requested = cost, used = clamped, "bcrypt cost out of range");
        }
        Self { cost: clamped }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptAdapter {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    #[instrument(skip_all)]
    async fn encrypt(&self, value: &str) -> Result<String, EncryptError> {
        let value = value.to_owned();
        let cost = self.cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(value, cost)).await??;
        Ok(hash)
    }
}
