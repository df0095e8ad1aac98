//! Error handling types and utilities.

/// A specialized Result type for taxguide-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a page cannot be scanned for dynamic content.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// One of the scanner's CSS selectors failed to parse.
    #[error("invalid selector '{selector}': {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
    /// The page could not be read or interpreted.
    #[error("unreadable page: {0}")]
    Page(String),
}

/// Error returned when reading or writing the navigation bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to serialize search results: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored search results are corrupt: {0}")]
    Deserialize(#[source] serde_json::Error),
}
