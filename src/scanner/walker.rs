//! Fixture walker.
//!
//! Walks the filesystem under a root, applies ignore patterns and include
//! globs, and hashes fixture contents in parallel.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::ScanError;

use super::ignores::IgnorePatterns;
use super::types::{FileInfo, ScanConfig, ScanResult, ScanStats};

/// Fixture file scanner.
pub struct FixtureScanner {
    config: ScanConfig,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl FixtureScanner {
    /// Create a scanner for the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        let ignores = IgnorePatterns::new(&config.root, &config.extra_ignores);

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.patterns {
            if let Ok(glob) = Glob::new(pattern) {
                builder.add(glob);
            }
        }
        let include_globs = builder
            .build()
            .unwrap_or_else(|_| GlobSetBuilder::new().build().unwrap());

        Self {
            config,
            ignores,
            include_globs,
        }
    }

    /// Scan the filesystem and return discovered fixtures.
    pub fn scan(&self) -> ScanResult {
        let start = Instant::now();

        // Single-threaded walk for deterministic ordering, parallel hashing.
        let candidates = self.collect_files();
        debug!(count = candidates.len(), "collected fixture candidates");

        let files_skipped = AtomicUsize::new(0);
        let errors: Mutex<Vec<String>> = Mutex::new(Vec::new());

        let files: Vec<FileInfo> = candidates
            .par_iter()
            .filter_map(|path| match self.process_file(path) {
                Ok(Some(info)) => Some(info),
                Ok(None) => {
                    files_skipped.fetch_add(1, Ordering::Relaxed);
                    None
                }
                Err(e) => {
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(e.to_string());
                    }
                    None
                }
            })
            .collect();

        let total_bytes = files.iter().map(|f| f.size).sum();

        let stats = ScanStats {
            total_files: files.len(),
            total_bytes,
            files_skipped: files_skipped.load(Ordering::Relaxed),
            duration: start.elapsed(),
        };

        ScanResult {
            root: self.config.root.display().to_string(),
            files,
            stats,
            errors: errors.into_inner().unwrap_or_default(),
        }
    }

    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        self.walk_dir(&self.config.root, &mut files);
        files.sort();
        files
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(_) => return,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(&self.config.root).unwrap_or(&path);

            if path.is_dir() {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if path.is_file()
                && !self.ignores.is_ignored(relative, false)
                && self.include_globs.is_match(relative)
            {
                files.push(path);
            }
        }
    }

    fn process_file(&self, path: &Path) -> Result<Option<FileInfo>, ScanError> {
        let io_err = |source| ScanError::IoError {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(io_err)?;
        let size = metadata.len();

        if size > self.config.max_file_size {
            return Ok(None);
        }

        let relative = path
            .strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let hash = if self.config.compute_hashes {
            let contents = fs::read(path).map_err(io_err)?;
            Some(format!("{:016x}", xxh3_64(&contents)))
        } else {
            None
        };

        Ok(Some(FileInfo {
            path: relative,
            size,
            hash,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut f = fs::File::create(path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_scan_finds_php_fixtures_only() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "checks/a.php", "<?php class A { }");
        write_file(dir.path(), "checks/b.php", "<?php class B { }");
        write_file(dir.path(), "notes.txt", "not a fixture");

        let scanner = FixtureScanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        });
        let result = scanner.scan();

        assert_eq!(result.stats.total_files, 2);
        assert!(result.files.iter().all(|f| f.path.ends_with(".php")));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_scan_respects_ignores() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "checks/a.php", "<?php class A { }");
        write_file(dir.path(), "vendor/dep.php", "<?php class Dep { }");

        let scanner = FixtureScanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        });
        let result = scanner.scan();

        assert_eq!(result.stats.total_files, 1);
        assert_eq!(result.files[0].path, "checks/a.php");
    }

    #[test]
    fn test_scan_skips_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "big.php", &"x".repeat(128));

        let scanner = FixtureScanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            max_file_size: 16,
            ..Default::default()
        });
        let result = scanner.scan();

        assert_eq!(result.stats.total_files, 0);
        assert_eq!(result.stats.files_skipped, 1);
    }

    #[test]
    fn test_hashes_are_stable() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.php", "<?php class A { }");

        let scanner = FixtureScanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        });
        let first = scanner.scan();
        let second = scanner.scan();

        assert_eq!(first.files[0].hash, second.files[0].hash);
    }
}
