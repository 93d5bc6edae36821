//! Scanner types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for fixture discovery.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Glob patterns to include (e.g. "checks/**/*.php").
    pub patterns: Vec<String>,
    /// Additional patterns to ignore (beyond defaults).
    pub extra_ignores: Vec<String>,
    /// Whether to compute content hashes.
    pub compute_hashes: bool,
    /// Maximum fixture size to process (bytes).
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: vec!["**/*.php".to_string()],
            extra_ignores: vec![],
            compute_hashes: true,
            max_file_size: 1024 * 1024,
        }
    }
}

/// A discovered fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Relative path from the scan root.
    pub path: String,
    /// File size in bytes.
    pub size: u64,
    /// xxh3 hash of file contents (if computed).
    pub hash: Option<String>,
}

/// Statistics about a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_bytes: u64,
    /// Files skipped (too large, not a fixture).
    pub files_skipped: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned.
    pub root: String,
    /// Discovered fixtures, in walk order.
    pub files: Vec<FileInfo>,
    pub stats: ScanStats,
    /// Non-fatal errors encountered along the way.
    pub errors: Vec<String>,
}

// Duration serializes as milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
