use std::path::Path;
use tree_sitter::{Parser, Tree};

use crate::{AnnotateError, Result};

/// Parse a route module, picking the TSX grammar for `.tsx`/`.jsx` files
/// and the plain TypeScript grammar otherwise.
pub(crate) fn parse_source(file: &Path, text: &str) -> Result<Tree> {
    let language = match file.extension().and_then(|ext| ext.to_str()) {
        Some("tsx") | Some("jsx") => tree_sitter_typescript::LANGUAGE_TSX,
        _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&language.into())
        .map_err(|e| AnnotateError::Grammar(format!("failed to set language: {e}")))?;

    parser.parse(text, None).ok_or_else(|| AnnotateError::Parse {
        file: file.to_path_buf(),
    })
}
