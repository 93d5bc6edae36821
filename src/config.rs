//! Harness configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the fixture harness.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Glob patterns for fixture files. Default: `**/*.php`.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Additional ignore patterns (beyond defaults).
    #[serde(default)]
    pub extra_ignores: Vec<String>,
    /// Run per-file verification in parallel. Default: true.
    pub parallel: Option<bool>,
    /// Maximum fixture size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
}

impl HarnessConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Returns the effective include patterns, defaulting to `**/*.php`.
    pub fn effective_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            vec!["**/*.php".to_string()]
        } else {
            self.patterns.clone()
        }
    }

    /// Returns whether verification runs in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns the effective maximum fixture size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1024 * 1024)
    }
}
