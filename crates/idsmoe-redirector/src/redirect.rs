use std::collections::HashMap;

use crate::error::{LookupError, RedirectError};
use crate::lookup::LookupService;
use idsmoe_core::{build_source_uri, build_target_uri, resolve, KeyValueStore, Platform};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, RedirectError>;

/// Query parameters of a redirect request.
///
/// Each field accepts several parameter names; the first non-empty one in
/// the listed order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
pub struct RedirectQuery {
    /// Source platform or alias (`platform`, `from`, `f`).
    #[builder(default, setter(strip_option, into))]
    pub platform: Option<String>,
    /// Id on the source platform (`mediaid`, `id`, `i`).
    #[builder(default, setter(strip_option, into))]
    pub id: Option<String>,
    /// Target platform or alias (`target`, `to`, `t`).
    #[builder(default, setter(strip_option, into))]
    pub target: Option<String>,
    /// Respond with the URI as text instead of redirecting (`israw`, `raw`, `r`).
    #[builder(default)]
    pub raw: bool,
}

impl RedirectQuery {
    pub const PLATFORM_PARAMS: [&'static str; 3] = ["platform", "from", "f"];
    pub const ID_PARAMS: [&'static str; 3] = ["mediaid", "id", "i"];
    pub const TARGET_PARAMS: [&'static str; 3] = ["target", "to", "t"];
    pub const RAW_PARAMS: [&'static str; 3] = ["israw", "raw", "r"];

    /// Builds a query from decoded URL parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            platform: first_non_empty(params, &Self::PLATFORM_PARAMS),
            id: first_non_empty(params, &Self::ID_PARAMS),
            target: first_non_empty(params, &Self::TARGET_PARAMS),
            raw: first_non_empty(params, &Self::RAW_PARAMS).is_some(),
        }
    }
}

fn first_non_empty(params: &HashMap<String, String>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| params.get(*name))
        .find(|value| !value.is_empty())
        .cloned()
}

/// The outcome of a successful redirect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub uri: String,
    /// The client asked for the URI as plain text.
    pub raw: bool,
}

/// A redirect request that passed validation and is ready for lookup.
#[derive(Debug)]
struct RedirectPlan<'q> {
    /// Resolved source platform key; may be an unknown literal.
    platform: String,
    source: Option<Platform>,
    /// The id as supplied by the client.
    id: &'q str,
    /// The id used for the lookup after platform-specific adjustments.
    lookup_id: String,
    target: Option<Platform>,
    raw: bool,
}

impl<'q> RedirectPlan<'q> {
    fn from_query(query: &'q RedirectQuery) -> Result<Self> {
        let platform = non_empty(&query.platform).ok_or(RedirectError::PlatformRequired)?;
        let id = non_empty(&query.id).ok_or(RedirectError::IdRequired)?;

        let platform = resolve(platform).into_owned();
        let source = Platform::from_alias(&platform);
        if let Some(source) = source.filter(|p| p.is_one_way()) {
            return Err(RedirectError::OneWaySource(source));
        }

        let target = match non_empty(&query.target) {
            Some(target) => {
                let target = resolve(target).into_owned();
                Some(
                    Platform::from_alias(&target)
                        .ok_or(RedirectError::UnknownTarget(target))?,
                )
            }
            None => None,
        };

        let lookup_id = match source {
            Some(Platform::Trakt) => {
                validate_trakt_id(id)?;
                id.to_string()
            }
            Some(Platform::TheMovieDb) if !id.contains("movie") => format!("movie/{id}"),
            _ => id.to_string(),
        };

        Ok(Self {
            platform,
            source,
            id,
            lookup_id,
            target,
            raw: query.raw,
        })
    }

    /// The id appended to the source platform's route base.
    ///
    /// Unlike a verbatim append, the `movie/` prefix added for TMDB lookups
    /// is dropped here, since the route base already ends in `/movie/`.
    fn source_id(&self) -> &str {
        match self.source {
            Some(Platform::TheMovieDb) => self
                .lookup_id
                .strip_prefix("movie/")
                .unwrap_or(&self.lookup_id),
            _ => &self.lookup_id,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Trakt ids come as `type/id`; the id segment must be numeric since slugs
/// are not stored.
fn validate_trakt_id(id: &str) -> Result<()> {
    let mut parts = id.split('/');
    let media_type = parts.next().unwrap_or_default();
    match parts.next() {
        Some(trakt_id) if trakt_id.is_empty() || !trakt_id.bytes().all(|b| b.is_ascii_digit()) => {
            Err(RedirectError::TraktSlug(format!("{media_type}/{trakt_id}")))
        }
        _ => Ok(()),
    }
}

/// Converts an id on one platform into a link to another.
pub struct Redirector<S: ?Sized> {
    lookup: LookupService<S>,
}

impl<S: ?Sized> Clone for Redirector<S> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
        }
    }
}

impl<S: KeyValueStore + ?Sized> Redirector<S> {
    pub fn new(lookup: LookupService<S>) -> Self {
        Self { lookup }
    }

    /// Resolves a redirect request to the URI the client should be sent to.
    ///
    /// Parameters are validated before the store is touched. Without a
    /// target the URI points back at the source platform; the record is
    /// still fetched so unknown ids are reported as not found.
    pub async fn redirect(&self, query: &RedirectQuery) -> Result<Redirect> {
        let plan = RedirectPlan::from_query(query)?;
        trace!(
            platform = %plan.platform,
            id = %plan.lookup_id,
            target = ?plan.target,
            "redirect request validated"
        );

        let record = match self.lookup.fetch(&plan.platform, &plan.lookup_id).await {
            Ok(record) => record,
            Err(LookupError::NotFound(_)) => {
                return Err(RedirectError::NotFound {
                    platform: plan.platform,
                    id: plan.id.to_string(),
                })
            }
            Err(LookupError::DataCorruption(message)) => {
                return Err(RedirectError::DataCorruption(message))
            }
            Err(LookupError::Storage(err)) => return Err(RedirectError::Storage(err)),
        };

        let uri = match plan.target {
            None => {
                let Some(source) = plan.source else {
                    return Err(RedirectError::NoRoute(plan.platform));
                };
                build_source_uri(source, plan.source_id())
            }
            Some(target) => build_target_uri(target, &record).map_err(|_| {
                let title = record
                    .title()
                    .filter(|title| !title.is_empty())
                    .unwrap_or("Unknown title");
                RedirectError::MissingOnTarget {
                    title: title.to_string(),
                    target,
                    platform: plan.platform.clone(),
                    id: plan.id.to_string(),
                }
            })?,
        };

        debug!(platform = %plan.platform, id = %plan.id, uri = %uri, "resolved redirect");
        Ok(Redirect { uri, raw: plan.raw })
    }
}
