//! Core types for the ids.moe anime ID lookup service.
//!
//! This crate provides everything that does not touch I/O: the platform
//! registry, the record shape stored in the key-value store, lookup key
//! normalization and target URI synthesis. It also defines the
//! [`KeyValueStore`] contract implemented by `idsmoe-storage`.

pub mod error;
pub mod lookup_key;
pub mod platform;
pub mod record;
pub mod store;
pub mod uri;

pub use error::{CoreError, StorageError, UriError};
pub use lookup_key::{InternalId, LookupKey};
pub use platform::{is_valid_target, resolve, route_base, Platform};
pub use record::AnimeRecord;
pub use store::KeyValueStore;
pub use uri::{build_source_uri, build_target_uri};
