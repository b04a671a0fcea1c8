use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// First-hop key into the key-value store, formed as `platform/id`.
///
/// The id part may itself contain path segments, e.g. Trakt keys look like
/// `trakt/shows/30857/seasons/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    /// Builds a lookup key from a platform key and a client-supplied id.
    ///
    /// The id has a trailing `.json` or `.html` stripped and is then
    /// percent-decoded. Ids that fail to decode are used as-is.
    pub fn new(platform: &str, raw_id: &str) -> Self {
        Self(format!("{}/{}", platform, normalize_id(raw_id)))
    }

    /// Builds a Trakt key from its media type, id and optional season.
    pub fn trakt(media_type: &str, id: &str, season: Option<&str>) -> Self {
        let composite = match season {
            Some(season) => format!("{media_type}/{id}/seasons/{season}"),
            None => format!("{media_type}/{id}"),
        };
        Self::new("trakt", &composite)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips a trailing `.json` / `.html` suffix and percent-decodes the id.
pub fn normalize_id(raw_id: &str) -> String {
    let id = raw_id.strip_suffix(".json").unwrap_or(raw_id);
    let id = id.strip_suffix(".html").unwrap_or(id);
    match urlencoding::decode(id) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => id.to_string(),
    }
}

/// The store's primary numeric key, joining a first-hop lookup to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternalId(u64);

impl InternalId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for InternalId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for InternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
