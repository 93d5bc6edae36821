//! Parser errors.

use std::path::PathBuf;

/// Errors that can occur while parsing a fixture source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load PHP grammar: {message}")]
    GrammarError { message: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },
}
