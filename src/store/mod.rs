pub mod memory;
pub mod redis;

use async_trait::async_trait;
use serde_json::Value;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store write failed: {0}")]
    Write(#[from] ::redis::RedisError),
    #[error("document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Put-only document store. The simulator never reads, queries or deletes;
/// `put` is create-or-replace by key.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, key: &str, document: Value) -> Result<(), StoreError>;
}
