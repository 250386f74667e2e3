use thiserror::Error;

/// Top-level error type for the HomeScout data layer.
///
/// Covers configuration loading, catalog construction, and serialization.
/// The chat crate wraps these in its own error type so that `?` works across
/// crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },

    #[error("Duplicate listing id: {0}")]
    DuplicateListing(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for HomeScout core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
