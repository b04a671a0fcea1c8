use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The cross-platform ID mapping for a single anime title.
///
/// Records are stored as JSON objects keyed by platform key plus a few
/// auxiliary fields (`title`, `trakt_type`, `trakt_season`, ...). Values are
/// strings, numbers or `null`. The record is republished verbatim, so it is
/// kept as a JSON object rather than a fixed struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeRecord(Map<String, Value>);

impl AnimeRecord {
    /// Parses a record from its stored JSON form. Anything but a JSON object
    /// is rejected.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Returns the id stored under `field`, rendered as a string.
    ///
    /// `None` when the field is absent or `null`. Strings are returned
    /// without quotes; any other value in its JSON form.
    pub fn id(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Trakt media type segment (`shows` or `movies`).
    pub fn trakt_type(&self) -> Option<&str> {
        self.0.get("trakt_type").and_then(Value::as_str)
    }

    pub fn trakt_season(&self) -> Option<String> {
        self.id("trakt_season")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AnimeRecord {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
