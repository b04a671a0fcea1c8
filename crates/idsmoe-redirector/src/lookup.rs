use std::sync::Arc;

use crate::error::LookupError;
use idsmoe_core::{AnimeRecord, InternalId, KeyValueStore, LookupKey, Platform};
use jiff::Timestamp;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, LookupError>;

/// Store key holding the unix time of the last data refresh.
pub const LAST_UPDATED_KEY: &str = "last_updated";

/// Resolves `(platform, id)` pairs to full records.
///
/// Every fetch performs two sequential reads: the lookup key yields an
/// internal id, and the internal id yields the JSON record. Nothing is
/// cached; records are read fresh on each call.
pub struct LookupService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for LookupService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> LookupService<S> {
    /// Creates a new LookupService owning the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: KeyValueStore + ?Sized> LookupService<S> {
    /// Creates a LookupService over a store shared with other components.
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches the record for `raw_id` on `platform`.
    ///
    /// `platform` is used literally; resolve aliases before calling. The id is
    /// normalized as described on [`LookupKey::new`].
    ///
    /// # Returns
    ///
    /// * `Ok(record)` - The record both hops resolved to
    /// * `Err(LookupError::NotFound)` - If either hop missed
    /// * `Err(LookupError::DataCorruption)` - If a stored value failed to parse
    /// * `Err(LookupError::Storage)` - If the store could not be read
    pub async fn fetch(&self, platform: &str, raw_id: &str) -> Result<AnimeRecord> {
        self.fetch_key(&LookupKey::new(platform, raw_id)).await
    }

    /// Fetches the record for an already composed lookup key.
    pub async fn fetch_key(&self, key: &LookupKey) -> Result<AnimeRecord> {
        trace!(key = %key, "resolving lookup key");

        let Some(raw_internal_id) = self.store.get(key.as_str()).await? else {
            trace!(key = %key, "lookup key not found");
            return Err(LookupError::NotFound(key.to_string()));
        };

        let internal_id: InternalId = raw_internal_id.parse().map_err(|e| {
            warn!(key = %key, value = %raw_internal_id, "stored internal id is not an integer");
            LookupError::DataCorruption(format!(
                "invalid internal id '{raw_internal_id}' for key '{key}': {e}"
            ))
        })?;

        let Some(raw_record) = self.store.get(&internal_id.to_string()).await? else {
            trace!(key = %key, internal_id = %internal_id, "record not found");
            return Err(LookupError::NotFound(internal_id.to_string()));
        };

        let record = AnimeRecord::from_json(&raw_record).map_err(|e| {
            warn!(key = %key, internal_id = %internal_id, error = %e, "stored record is not a JSON object");
            LookupError::DataCorruption(format!("invalid record for internal id {internal_id}: {e}"))
        })?;

        debug!(key = %key, internal_id = %internal_id, "resolved record");
        Ok(record)
    }

    /// Verifies the store with a known entry: MyAnimeList id 1 must resolve
    /// to a record whose `myanimelist` field is 1.
    pub async fn check_integrity(&self) -> Result<()> {
        let record = self.fetch(Platform::MyAnimeList.key(), "1").await?;
        match record.id(Platform::MyAnimeList.key()).as_deref() {
            Some("1") => Ok(()),
            other => {
                warn!(myanimelist = ?other, "integrity record does not match");
                Err(LookupError::DataCorruption(
                    "Data integrity check failed".to_string(),
                ))
            }
        }
    }

    /// Reads the time of the last data refresh.
    ///
    /// Returns `Ok(None)` if the key is absent or does not hold unix seconds.
    pub async fn last_updated(&self) -> Result<Option<Timestamp>> {
        let Some(raw) = self.store.get(LAST_UPDATED_KEY).await? else {
            return Ok(None);
        };

        let parsed = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|seconds| Timestamp::from_second(seconds).ok());
        if parsed.is_none() {
            warn!(value = %raw, "last_updated is not a unix timestamp");
        }
        Ok(parsed)
    }
}
