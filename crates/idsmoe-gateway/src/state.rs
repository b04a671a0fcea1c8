use std::sync::Arc;

use idsmoe_core::KeyValueStore;
use idsmoe_redirector::{LookupService, Redirector};
use typed_builder::TypedBuilder;

pub const DEFAULT_DATASET_BASE_URL: &str =
    "https://raw.githubusercontent.com/nattadasu/animeApi/v3/database";
pub const DEFAULT_HOMEPAGE_URL: &str = "https://github.com/tajoumaru/ids.moe";

/// Deployment-specific URLs used by the gateway.
#[derive(Debug, Clone, TypedBuilder)]
pub struct Settings {
    /// Base URL of the bulk dataset files served by `GET /{platform}`.
    #[builder(default = DEFAULT_DATASET_BASE_URL.to_string(), setter(into))]
    pub dataset_base_url: String,
    /// Where `GET /` redirects to.
    #[builder(default = DEFAULT_HOMEPAGE_URL.to_string(), setter(into))]
    pub homepage_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone)]
pub struct AppState {
    lookup: LookupService<dyn KeyValueStore>,
    redirector: Redirector<dyn KeyValueStore>,
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: Settings) -> Self {
        let lookup = LookupService::from_shared(store);
        Self {
            redirector: Redirector::new(lookup.clone()),
            lookup,
            settings: Arc::new(settings),
        }
    }

    pub fn lookup(&self) -> &LookupService<dyn KeyValueStore> {
        &self.lookup
    }

    pub fn redirector(&self) -> &Redirector<dyn KeyValueStore> {
        &self.redirector
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
