use crate::error::UriError;
use crate::platform::Platform;
use crate::record::AnimeRecord;

/// How the id for a target platform is extracted from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetRule {
    /// `{base}{type}/{trakt}[/seasons/{season}]`.
    Trakt,
    /// Platforms addressed by the MyAnimeList id.
    MyAnimeListKeyed,
    /// Platforms addressed by the TMDB id.
    TheMovieDbKeyed,
    /// The record's own field for the platform.
    Direct(Platform),
}

impl From<Platform> for TargetRule {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Trakt => TargetRule::Trakt,
            Platform::Kurozora | Platform::MyAniLi => TargetRule::MyAnimeListKeyed,
            Platform::Letterboxd => TargetRule::TheMovieDbKeyed,
            other => TargetRule::Direct(other),
        }
    }
}

/// Builds the URI of an entry on its own platform, appending `raw_id`
/// verbatim to the platform's route base.
pub fn build_source_uri(platform: Platform, raw_id: &str) -> String {
    format!("{}{}", platform.route_base(), raw_id)
}

/// Builds the URI of `record` on the `target` platform.
pub fn build_target_uri(target: Platform, record: &AnimeRecord) -> Result<String, UriError> {
    let base = target.route_base();

    match TargetRule::from(target) {
        TargetRule::Trakt => {
            let trakt = required(record, Platform::Trakt.key())?;
            let media_type = record.trakt_type().unwrap_or("movies");
            match record.trakt_season() {
                Some(season) => Ok(format!("{base}{media_type}/{trakt}/seasons/{season}")),
                None => Ok(format!("{base}{media_type}/{trakt}")),
            }
        }
        TargetRule::MyAnimeListKeyed => {
            let mal = required(record, Platform::MyAnimeList.key())?;
            Ok(format!("{base}{mal}"))
        }
        TargetRule::TheMovieDbKeyed => {
            let tmdb = required(record, Platform::TheMovieDb.key())?;
            Ok(format!("{base}{tmdb}"))
        }
        TargetRule::Direct(platform) => {
            let id = required(record, platform.key())?;
            Ok(format!("{base}{id}"))
        }
    }
}

fn required(record: &AnimeRecord, field: &'static str) -> Result<String, UriError> {
    record.id(field).ok_or(UriError::FieldMissing { field })
}
