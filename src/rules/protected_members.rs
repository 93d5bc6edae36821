//! Protected class member check.
//!
//! Flags methods declared with `protected` as their only modifier, and
//! properties whose declaration carries a `protected` modifier. A method
//! with further modifiers (e.g. `protected abstract`) is not flagged.

use crate::parser::ParseResult;

use super::types::{Finding, Severity};
use super::Rule;

const KEY: &str = "S3";
const MESSAGE: &str = "Use of protected class members is discouraged.";

pub struct ProtectedMembersRule;

impl Rule for ProtectedMembersRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn name(&self) -> &'static str {
        "Protected class member should not be used."
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, parse: &ParseResult) -> Vec<Finding> {
        let mut findings = Vec::new();

        for class in &parse.classes {
            for method in &class.methods {
                if method.modifiers.len() == 1 && method.modifiers[0] == "protected" {
                    findings.push(Finding::new(
                        KEY,
                        &parse.file,
                        method.line,
                        Some(method.range.start.column),
                        self.severity(),
                        MESSAGE,
                    ));
                }
            }

            for property in &class.properties {
                if property.modifiers.iter().any(|m| m == "protected") {
                    findings.push(Finding::new(
                        KEY,
                        &parse.file,
                        property.line,
                        Some(property.range.start.column),
                        self.severity(),
                        MESSAGE,
                    ));
                }
            }
        }

        findings
    }
}
