use std::path::PathBuf;
use thiserror::Error;

/// Result type for annotation planning
pub type Result<T> = std::result::Result<T, AnnotateError>;

/// Errors that can occur while planning splices for a route module
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// The module uses the `export =` form, which augmentation has no
    /// semantics for. Fatal for this one file's augmentation.
    #[error("unexpected 'export =' in '{file}' at offset {offset}")]
    ExportEquals { file: PathBuf, offset: usize },

    /// An export-assignment node was found but the literal
    /// `export default` keywords were not where the tree said they are.
    #[error("expected 'export default' in '{file}' at offset {offset}")]
    MissingDefaultKeyword { file: PathBuf, offset: usize },

    /// Tree-sitter refused the grammar (version mismatch).
    #[error("tree-sitter error: {0}")]
    Grammar(String),

    /// Tree-sitter produced no tree at all.
    #[error("failed to parse '{file}'")]
    Parse { file: PathBuf },
}
