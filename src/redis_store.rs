use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::OnceCell;

use crate::config::Config;
use crate::store::{KvStore, StoreError};

/// Redis-backed [`KvStore`]
///
/// The connection is opened on first use rather than at construction, so the
/// service starts even while Redis is unreachable; failed store calls are then
/// reported to callers like any other store error. Connecting is attempted
/// once per call with no retries, so an outage fails fast. Once established,
/// the `ConnectionManager` reconnects on the next call after a dropped
/// connection.
pub struct RedisStore {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisStore {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())
            .context("Failed to create Redis client")?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                tracing::info!("Connecting to Redis");
                let config = ConnectionManagerConfig::new().set_number_of_retries(0);
                let manager =
                    ConnectionManager::new_with_config(self.client.clone(), config).await?;
                tracing::info!("Connected to Redis");
                Ok::<_, redis::RedisError>(manager)
            })
            .await?;

        Ok(manager.clone())
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        tracing::debug!("SET {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        tracing::debug!("GET {} (found: {})", key, value.is_some());
        Ok(value)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(StoreError::Response(format!("Unexpected PING reply: {}", reply)))
        }
    }
}
