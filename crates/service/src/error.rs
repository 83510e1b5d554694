use std::path::PathBuf;
use thiserror::Error;

use routetype_annotate::AnnotateError;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur in the augmented service layer
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The file is not registered as a route module.
    #[error("not a route module: '{0}'")]
    NotARoute(PathBuf),

    /// The delegate host has no text for the file.
    #[error("missing source text for '{0}'")]
    MissingSource(PathBuf),

    /// Splice planning failed; augmentation is disabled for the file and
    /// queries fall back to the native service.
    #[error(transparent)]
    Annotate(#[from] AnnotateError),

    /// File watcher setup failed.
    #[error("watcher error: {0}")]
    Watch(String),
}
