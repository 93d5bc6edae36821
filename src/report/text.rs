//! Text reporter — human-readable summary.

use std::fmt::Write;

use crate::verify::HarnessResult;

use super::Reporter;

pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, result: &HarnessResult) -> Result<String, String> {
        let mut out = String::new();

        writeln!(
            out,
            "rule {} against {}: {} ({} fixtures, {} passed, {} failed)",
            result.rule_key,
            result.root,
            if result.overall_passed { "PASS" } else { "FAIL" },
            result.files_checked,
            result.files_passed,
            result.files_failed,
        )
        .map_err(|e| e.to_string())?;

        for outcome in result.outcomes.iter().filter(|o| !o.passed) {
            writeln!(out, "  {}:", outcome.file).map_err(|e| e.to_string())?;
            for mismatch in &outcome.mismatches {
                write!(
                    out,
                    "    line {:>4} {}: {}",
                    mismatch.line, mismatch.kind, mismatch.detail
                )
                .map_err(|e| e.to_string())?;
                if let Some(expected) = &mismatch.expected {
                    write!(out, " (expected: {expected:?})").map_err(|e| e.to_string())?;
                }
                if let Some(actual) = &mismatch.actual {
                    write!(out, " (actual: {actual:?})").map_err(|e| e.to_string())?;
                }
                writeln!(out).map_err(|e| e.to_string())?;
            }
        }

        for error in &result.errors {
            writeln!(out, "  error: {error}").map_err(|e| e.to_string())?;
        }

        Ok(out)
    }
}
