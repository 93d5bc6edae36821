//! Verification result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ways a fixture check can disagree with a rule's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// A `NOK` line produced no finding.
    MissingFinding,
    /// A finding exists at a line not annotated `NOK`, or a `NOK` line
    /// produced more findings than the one expected.
    UnexpectedFinding,
    /// A finding exists at a `NOK` line but its message differs.
    MessageMismatch,
    /// An annotation attempt matched neither recognized pattern.
    MalformedAnnotation,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFinding => write!(f, "missing_finding"),
            Self::UnexpectedFinding => write!(f, "unexpected_finding"),
            Self::MessageMismatch => write!(f, "message_mismatch"),
            Self::MalformedAnnotation => write!(f, "malformed_annotation"),
        }
    }
}

/// One per-line disagreement between fixture and findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub kind: MismatchKind,
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// The annotated message, where one exists.
    pub expected: Option<String>,
    /// The produced message, where one exists.
    pub actual: Option<String>,
    /// Human-readable description.
    pub detail: String,
}

/// Result of checking one fixture against one rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureOutcome {
    pub file: String,
    pub rule_key: String,
    pub passed: bool,
    /// Annotated expectations in the fixture (NOK + OK).
    pub expectations: usize,
    /// Findings the rule produced.
    pub findings: usize,
    pub mismatches: Vec<Mismatch>,
    pub execution_time_ms: u64,
}

/// Mismatch counts by kind across a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MismatchTotals {
    pub missing_findings: usize,
    pub unexpected_findings: usize,
    pub message_mismatches: usize,
    pub malformed_annotations: usize,
}

impl MismatchTotals {
    pub fn record(&mut self, kind: MismatchKind) {
        match kind {
            MismatchKind::MissingFinding => self.missing_findings += 1,
            MismatchKind::UnexpectedFinding => self.unexpected_findings += 1,
            MismatchKind::MessageMismatch => self.message_mismatches += 1,
            MismatchKind::MalformedAnnotation => self.malformed_annotations += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_findings
            + self.unexpected_findings
            + self.message_mismatches
            + self.malformed_annotations
    }
}

/// Aggregate result of a multi-fixture run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessResult {
    pub root: String,
    pub rule_key: String,
    pub overall_passed: bool,
    pub files_checked: usize,
    pub files_passed: usize,
    pub files_failed: usize,
    pub totals: MismatchTotals,
    /// Per-fixture outcomes, in path order.
    pub outcomes: Vec<FixtureOutcome>,
    /// Non-fatal errors (unreadable or unparseable fixtures, scan errors).
    pub errors: Vec<String>,
    pub duration_ms: u64,
}
