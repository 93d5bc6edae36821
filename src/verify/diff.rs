//! The oracle comparison.
//!
//! Pure function from (fixture, findings) to mismatches. The contract is an
//! exact set match: every `NOK` line must have exactly one finding with the
//! annotated message, every other line must have none.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::fixtures::FixtureFile;
use crate::rules::Finding;

use super::types::{Mismatch, MismatchKind};

/// Compare a fixture's expectations against the findings one rule produced.
///
/// Returns mismatches sorted by line. An empty result means the fixture
/// passed.
pub fn diff_findings(fixture: &FixtureFile, findings: &[Finding]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    let mut by_line: FxHashMap<u32, Vec<&Finding>> = FxHashMap::default();
    for finding in findings {
        by_line.entry(finding.line).or_default().push(finding);
    }

    let nok_lines: FxHashSet<u32> = fixture.nok_lines().map(|e| e.line).collect();
    let ok_lines: FxHashSet<u32> = fixture.ok_lines().map(|e| e.line).collect();

    // NOK lines: exactly one finding, message equal.
    for expectation in fixture.nok_lines() {
        let expected = expectation.message.as_deref().unwrap_or_default();
        let Some(at_line) = by_line.get(&expectation.line) else {
            mismatches.push(Mismatch {
                kind: MismatchKind::MissingFinding,
                file: fixture.path.clone(),
                line: expectation.line,
                expected: Some(expected.to_string()),
                actual: None,
                detail: format!(
                    "expected a finding at line {}, none was produced",
                    expectation.line
                ),
            });
            continue;
        };

        let matched = at_line.iter().position(|f| f.message == expected);
        match matched {
            Some(index) => {
                // Surplus findings at a satisfied NOK line are unexpected.
                for (i, finding) in at_line.iter().enumerate() {
                    if i != index {
                        mismatches.push(unexpected(fixture, finding, "NOK line already satisfied"));
                    }
                }
            }
            None => {
                mismatches.push(Mismatch {
                    kind: MismatchKind::MessageMismatch,
                    file: fixture.path.clone(),
                    line: expectation.line,
                    expected: Some(expected.to_string()),
                    actual: Some(at_line[0].message.clone()),
                    detail: format!(
                        "finding at line {} has the wrong message",
                        expectation.line
                    ),
                });
                for finding in at_line.iter().skip(1) {
                    mismatches.push(unexpected(fixture, finding, "NOK line expects one finding"));
                }
            }
        }
    }

    // Every other line must produce nothing.
    for (line, at_line) in &by_line {
        if nok_lines.contains(line) {
            continue;
        }
        let context = if ok_lines.contains(line) {
            "line is annotated OK"
        } else {
            "line carries no annotation"
        };
        for finding in at_line {
            mismatches.push(unexpected(fixture, finding, context));
        }
    }

    for malformed in &fixture.malformed {
        mismatches.push(Mismatch {
            kind: MismatchKind::MalformedAnnotation,
            file: fixture.path.clone(),
            line: malformed.line,
            expected: None,
            actual: None,
            detail: format!("unrecognized annotation: {}", malformed.raw),
        });
    }

    mismatches.sort_by_key(|m| (m.line, m.kind as u8));
    mismatches
}

fn unexpected(fixture: &FixtureFile, finding: &Finding, context: &str) -> Mismatch {
    Mismatch {
        kind: MismatchKind::UnexpectedFinding,
        file: fixture.path.clone(),
        line: finding.line,
        expected: None,
        actual: Some(finding.message.clone()),
        detail: format!("unexpected finding at line {} ({context})", finding.line),
    }
}
