use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the precomputed key-value store.
///
/// Keys are either first-hop lookup keys (`platform/id`, value is the
/// decimal internal id) or internal ids (value is the JSON record).
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `Ok(None)` on a miss.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }
}
