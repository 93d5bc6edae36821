//! Scanner errors.

use std::path::PathBuf;

/// Errors that can occur while discovering fixture files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: PathBuf },
}
