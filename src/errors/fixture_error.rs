//! Harness errors.

use std::path::PathBuf;

/// Errors that can occur while verifying fixtures.
///
/// Per-line mismatches are not errors — they are data carried in
/// [`crate::verify::Mismatch`]. These variants cover real failures that
/// prevent a fixture from being checked at all.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Unknown rule: {key}")]
    UnknownRule { key: String },

    #[error("IO error reading fixture {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] crate::errors::ParseError),

    #[error(transparent)]
    Scan(#[from] crate::errors::ScanError),
}
