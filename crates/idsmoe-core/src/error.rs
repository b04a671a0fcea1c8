use thiserror::Error;

/// Result type for key-value store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures of the key-value store transport.
///
/// A missing key is not an error: stores report it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Errors raised while building a target platform URI from a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("record has no `{field}` id")]
    FieldMissing { field: &'static str },
}
