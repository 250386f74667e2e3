//! Error types for the conversational engine.

use homescout_core::CoreError;

/// Errors from the chat engine.
///
/// Classification itself never fails: unmatched text falls through to the
/// help response, and unusable numbers fall back to configured defaults.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("comparison requires 2 or 3 listings, got {0}")]
    InvalidArity(usize),
    #[error("listing {0} cannot be compared: living area is zero")]
    InvalidListing(String),
    #[error("listing not found: {0}")]
    ListingNotFound(String),
    #[error("core error: {0}")]
    Core(String),
}

impl From<CoreError> for ChatError {
    fn from(err: CoreError) -> Self {
        ChatError::Core(err.to_string())
    }
}
