use thiserror::Error;

/// Result type for route registry operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors that can occur while loading route metadata
#[derive(Error, Debug)]
pub enum RouteError {
    /// IO error while reading a manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed route manifest
    #[error("Invalid route manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
