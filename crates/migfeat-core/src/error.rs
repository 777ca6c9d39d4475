//! Error types for migfeat-core

use thiserror::Error;

/// Result type alias for feature-extraction operations
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors raised while discovering catalogs or extracting features
///
/// No variant is retried internally; a failure mid-extraction invalidates
/// the whole `build` call and propagates to the caller.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The data source could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query was rejected or failed mid-execution
    #[error("Query error: {0}")]
    Query(String),

    /// A stored value field could not be converted to a number
    #[error("Cannot parse value {value:?} for tag {tag:?} as a number")]
    Parse { value: String, tag: String },

    /// A row referenced a tag that is not in the catalog
    #[error("Tag not in catalog: {0}")]
    UnknownTag(String),

    /// Invalid builder configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for FeatureError {
    fn from(err: rusqlite::Error) -> Self {
        FeatureError::Query(err.to_string())
    }
}
