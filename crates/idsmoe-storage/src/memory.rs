use async_trait::async_trait;
use dashmap::DashMap;
use idsmoe_core::error::Result;
use idsmoe_core::{AnimeRecord, InternalId, KeyValueStore, LookupKey};

/// In-memory implementation of [`KeyValueStore`] backed by a `DashMap`.
///
/// Useful for tests and local runs without Redis.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Stores a raw value under `key`, replacing any previous value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Stores `record` under `internal_id` and points every lookup key at it.
    pub fn insert_record<I>(
        &self,
        internal_id: InternalId,
        record: &AnimeRecord,
        keys: I,
    ) -> serde_json::Result<()>
    where
        I: IntoIterator<Item = LookupKey>,
    {
        let json = serde_json::to_string(record)?;
        self.entries.insert(internal_id.to_string(), json);
        for key in keys {
            self.entries
                .insert(key.as_str().to_owned(), internal_id.to_string());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let store = InMemoryStore::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }
}
