//! JSON reporter — structured machine-readable output.

use serde_json::json;

use crate::verify::HarnessResult;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &HarnessResult) -> Result<String, String> {
        let outcomes: Vec<serde_json::Value> = result
            .outcomes
            .iter()
            .map(|o| {
                json!({
                    "file": o.file,
                    "rule": o.rule_key,
                    "passed": o.passed,
                    "expectations": o.expectations,
                    "findings": o.findings,
                    "mismatch_count": o.mismatches.len(),
                    "mismatches": o.mismatches.iter().map(|m| json!({
                        "kind": format!("{}", m.kind),
                        "line": m.line,
                        "expected": m.expected,
                        "actual": m.actual,
                        "detail": m.detail,
                    })).collect::<Vec<_>>(),
                    "execution_time_ms": o.execution_time_ms,
                })
            })
            .collect();

        let output = json!({
            "root": result.root,
            "rule": result.rule_key,
            "overall_passed": result.overall_passed,
            "files_checked": result.files_checked,
            "files_passed": result.files_passed,
            "files_failed": result.files_failed,
            "totals": {
                "missing_findings": result.totals.missing_findings,
                "unexpected_findings": result.totals.unexpected_findings,
                "message_mismatches": result.totals.message_mismatches,
                "malformed_annotations": result.totals.malformed_annotations,
            },
            "outcomes": outcomes,
            "errors": result.errors,
            "duration_ms": result.duration_ms,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
