//! Lookup and redirect services for the ids.moe anime ID mapper.
//!
//! [`LookupService`] resolves a `(platform, id)` pair to its full
//! cross-platform record with two reads against a [`KeyValueStore`]:
//! `platform/id` yields an internal id, and the internal id yields the
//! JSON record. [`Redirector`] builds on top of it to convert an id from
//! one platform into a link on another.
//!
//! # Example
//!
//! ```rust
//! use idsmoe_core::{AnimeRecord, InternalId, LookupKey};
//! use idsmoe_redirector::{LookupService, RedirectQuery, Redirector};
//! use idsmoe_storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! let record = AnimeRecord::from_json(r#"{"myanimelist":1,"anilist":1}"#)?;
//! store.insert_record(InternalId::new(1), &record, [LookupKey::new("myanimelist", "1")])?;
//!
//! let redirector = Redirector::new(LookupService::new(store));
//! let query = RedirectQuery::builder()
//!     .platform("mal")
//!     .id("1")
//!     .target("anilist")
//!     .build();
//! let redirect = redirector.redirect(&query).await?;
//! assert_eq!(redirect.uri, "https://anilist.co/anime/1");
//! # Ok(())
//! # }
//! ```
//!
//! [`KeyValueStore`]: idsmoe_core::KeyValueStore

pub mod error;
pub mod lookup;
pub mod redirect;

pub use error::{LookupError, RedirectError};
pub use lookup::LookupService;
pub use redirect::{Redirect, RedirectQuery, Redirector};
