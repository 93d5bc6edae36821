//! Default ignore patterns for fixture trees.
//!
//! Fixture directories usually live inside larger repositories; these
//! patterns keep the walk out of dependency and build directories.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Directories to always ignore.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // PHP
    "vendor",
    // JS toolchains living next to PHP code
    "node_modules",
    // Build outputs
    "build",
    "dist",
    "out",
    "target",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Caches
    ".cache",
    "tmp",
    ".tmp",
];

/// File patterns to always ignore.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "composer.lock",
    "*.phar",
    "*.min.js",
    "*.log",
];

/// Compiled ignore set for a scan root.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Build from defaults + custom patterns, plus `.rulecheckignore` and
    /// `.gitignore` files at the root when present.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in DEFAULT_IGNORE_FILES {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        let rulecheckignore = root.join(".rulecheckignore");
        if rulecheckignore.exists() {
            let _ = builder.add(&rulecheckignore);
        }

        let gitignore = root.join(".gitignore");
        if gitignore.exists() {
            let _ = builder.add(&gitignore);
        }

        Self {
            gitignore: builder
                .build()
                .unwrap_or_else(|_| GitignoreBuilder::new(root).build().unwrap()),
        }
    }

    /// Check if a path should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
