use idsmoe_core::{Platform, StorageError};
use thiserror::Error;

/// Errors returned by [`LookupService`](crate::LookupService).
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// One of the two hops missed.
    #[error("key not found: {0}")]
    NotFound(String),
    /// A stored value does not parse as an internal id or a JSON record.
    #[error("stored data is invalid: {0}")]
    DataCorruption(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors returned by [`Redirector`](crate::Redirector).
///
/// The display form of each variant is the message shown to clients.
#[derive(Debug, Clone, Error)]
pub enum RedirectError {
    #[error("Platform not found, please specify platform by adding `platform` parameter.")]
    PlatformRequired,
    #[error("Platform ID not found, please specify platform ID by adding `platform_id` parameter")]
    IdRequired,
    #[error("Platform `{0}` is not supported as redirect source (one-way)")]
    OneWaySource(Platform),
    #[error("Target {0} not found")]
    UnknownTarget(String),
    #[error("Trakt ID for {0} is not an `int`. Please convert the slug to `int` ID using Trakt API to proceed")]
    TraktSlug(String),
    #[error("Unable to build URI for platform {0}")]
    NoRoute(String),
    #[error("Platform {platform} with ID {id} not found")]
    NotFound { platform: String, id: String },
    #[error("{title} does not exist on {target} using {platform} with ID {id}")]
    MissingOnTarget {
        title: String,
        target: Platform,
        platform: String,
        id: String,
    },
    #[error("stored data is invalid: {0}")]
    DataCorruption(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RedirectError {
    /// Short error title used in the error body.
    pub fn title(&self) -> &'static str {
        match self {
            RedirectError::PlatformRequired | RedirectError::NoRoute(_) => "Invalid platform",
            RedirectError::IdRequired => "Invalid platform ID",
            RedirectError::OneWaySource(_) => "Invalid platform source",
            RedirectError::UnknownTarget(_) => "Invalid target",
            RedirectError::TraktSlug(_) => "Invalid Trakt ID",
            RedirectError::NotFound { .. } | RedirectError::MissingOnTarget { .. } => "Not found",
            RedirectError::DataCorruption(_) | RedirectError::Storage(_) => {
                "Internal server error"
            }
        }
    }

    /// Whether the request itself was invalid, as opposed to a lookup miss or
    /// a server-side failure.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RedirectError::PlatformRequired
                | RedirectError::IdRequired
                | RedirectError::OneWaySource(_)
                | RedirectError::UnknownTarget(_)
                | RedirectError::TraktSlug(_)
                | RedirectError::NoRoute(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RedirectError::NotFound { .. } | RedirectError::MissingOnTarget { .. }
        )
    }
}
