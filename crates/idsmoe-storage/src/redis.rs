use async_trait::async_trait;
use idsmoe_core::error::Result;
use idsmoe_core::{KeyValueStore, StorageError};
use redis::AsyncCommands;
use tracing::{debug, trace, warn};

/// A Redis-backed implementation of [`KeyValueStore`].
///
/// Values are read with plain `GET`s over a single multiplexed connection,
/// which is cheap to clone and shared by all requests.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a store over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: String::new(),
        }
    }

    /// Creates a store that prepends `key_prefix` to every key.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Prefix for store keys (e.g., "ids:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a client for `redis_url` and establishes the shared connection.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid Redis connection info", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::new(conn))
    }

    fn store_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let store_key = self.store_key(key);
        trace!(key = %store_key, "reading key from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&store_key).await {
            Ok(Some(value)) => {
                debug!(key = %store_key, "Redis hit");
                Ok(Some(value))
            }
            Ok(None) => {
                trace!(key = %store_key, "Redis miss");
                Ok(None)
            }
            Err(e) => {
                warn!(key = %store_key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }
}
