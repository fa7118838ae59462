use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use serde_json::Value;

use super::{DocumentStore, StoreError};

// Документы лежат в Redis как JSON-строки под ключом "<bucket>:<key>"
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
    bucket: String,
}

impl RedisStore {
    pub async fn new(store_url: &str, bucket: &str) -> redis::RedisResult<Self> {
        let client = Client::open(store_url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(RedisStore {
            conn,
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn put(&self, key: &str, document: Value) -> Result<(), StoreError> {
        let data = serde_json::to_string(&document)?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(format!("{}:{}", self.bucket, key), data)
            .await?;
        Ok(())
    }
}
