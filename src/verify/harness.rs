//! The multi-fixture harness.
//!
//! Wires scanner → parser → rule → diff. Each fixture is checked
//! independently; per-file failures are recorded and never abort the run.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::errors::{FixtureError, ScanError};
use crate::fixtures::parse_fixture;
use crate::parser::PhpParser;
use crate::rules::RuleRegistry;
use crate::scanner::{FixtureScanner, ScanConfig};

use super::diff::diff_findings;
use super::types::{FixtureOutcome, HarnessResult, MismatchTotals};

/// Fixture verification harness.
///
/// Runs ONE rule per invocation against one or many fixtures, matching the
/// one-fixture-per-rule convention the annotation format comes from.
pub struct FixtureHarness {
    registry: RuleRegistry,
    config: HarnessConfig,
}

impl FixtureHarness {
    /// Harness with the shipped rules and default configuration.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_default_rules(),
            config: HarnessConfig::default(),
        }
    }

    pub fn with_config(config: HarnessConfig) -> Self {
        Self {
            registry: RuleRegistry::with_default_rules(),
            config,
        }
    }

    pub fn with_registry(registry: RuleRegistry, config: HarnessConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Verify in-memory fixture source against one rule.
    pub fn verify_source(
        &self,
        source: &str,
        path: &str,
        rule_key: &str,
    ) -> Result<FixtureOutcome, FixtureError> {
        let start = Instant::now();

        let fixture = parse_fixture(source, path);

        // Parsers hold tree-sitter state; one per call keeps this Sync.
        let mut parser = PhpParser::new()?;
        let parse = parser.parse(source, path)?;
        let findings = self.registry.run(rule_key, &parse)?;

        let mismatches = diff_findings(&fixture, &findings);
        debug!(
            file = path,
            findings = findings.len(),
            mismatches = mismatches.len(),
            "verified fixture"
        );

        Ok(FixtureOutcome {
            file: path.to_string(),
            rule_key: rule_key.to_string(),
            passed: mismatches.is_empty(),
            expectations: fixture.expectations.len(),
            findings: findings.len(),
            mismatches,
            execution_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Verify one fixture file on disk against one rule.
    pub fn verify_file(&self, path: &Path, rule_key: &str) -> Result<FixtureOutcome, FixtureError> {
        let source = fs::read_to_string(path).map_err(|e| FixtureError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.verify_source(&source, &path.to_string_lossy(), rule_key)
    }

    /// Discover fixtures under `root` and verify each against one rule.
    ///
    /// Fixture checks are independent, so they fan out per file with no
    /// ordering requirement; outcomes are reassembled in path order.
    pub fn verify_dir(&self, root: &Path, rule_key: &str) -> Result<HarnessResult, FixtureError> {
        let start = Instant::now();

        // Fail fast on inputs no fixture could recover from.
        if self.registry.get(rule_key).is_none() {
            return Err(FixtureError::UnknownRule {
                key: rule_key.to_string(),
            });
        }
        if !root.exists() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let scanner = FixtureScanner::new(ScanConfig {
            root: root.to_path_buf(),
            patterns: self.config.effective_patterns(),
            extra_ignores: self.config.extra_ignores.clone(),
            max_file_size: self.config.effective_max_file_size(),
            ..Default::default()
        });
        let scan = scanner.scan();

        let errors: Mutex<Vec<String>> = Mutex::new(scan.errors.clone());

        let verify_one = |file: &crate::scanner::FileInfo| -> Option<FixtureOutcome> {
            let path = root.join(&file.path);
            match self.verify_file(&path, rule_key) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(format!("{}: {}", file.path, e));
                    }
                    None
                }
            }
        };

        let mut outcomes: Vec<FixtureOutcome> = if self.config.effective_parallel() {
            scan.files.par_iter().filter_map(verify_one).collect()
        } else {
            scan.files.iter().filter_map(verify_one).collect()
        };
        outcomes.sort_by(|a, b| a.file.cmp(&b.file));

        let mut totals = MismatchTotals::default();
        for outcome in &outcomes {
            for mismatch in &outcome.mismatches {
                totals.record(mismatch.kind);
            }
        }

        let files_passed = outcomes.iter().filter(|o| o.passed).count();
        let files_failed = outcomes.len() - files_passed;
        let errors = errors.into_inner().unwrap_or_default();

        let result = HarnessResult {
            root: root.display().to_string(),
            rule_key: rule_key.to_string(),
            overall_passed: files_failed == 0 && errors.is_empty(),
            files_checked: outcomes.len(),
            files_passed,
            files_failed,
            totals,
            outcomes,
            errors,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            root = %result.root,
            rule = rule_key,
            checked = result.files_checked,
            failed = result.files_failed,
            "fixture run complete"
        );

        Ok(result)
    }
}

impl Default for FixtureHarness {
    fn default() -> Self {
        Self::new()
    }
}
