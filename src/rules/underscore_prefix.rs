//! Underscore-prefixed property name check.
//!
//! Flags declared property variables named `$_...` — the prefix is a legacy
//! PHP4 idiom for signalling visibility, made redundant by real modifiers.
//! Only declarations that carry modifiers are considered.

use crate::parser::ParseResult;

use super::types::{Finding, Severity};
use super::Rule;

const KEY: &str = "S4";

pub struct UnderscorePrefixRule;

impl Rule for UnderscorePrefixRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn name(&self) -> &'static str {
        "Property name should not be prefixed with an underscore to indicate visibility."
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, parse: &ParseResult) -> Vec<Finding> {
        let mut findings = Vec::new();

        for class in &parse.classes {
            for property in &class.properties {
                if property.modifiers.is_empty() {
                    continue;
                }
                if property.name.starts_with("$_") {
                    findings.push(Finding::new(
                        KEY,
                        &parse.file,
                        property.line,
                        Some(property.range.start.column),
                        self.severity(),
                        format!(
                            "Property name \"{}\" should not be prefixed with an underscore to indicate visibility",
                            property.name
                        ),
                    ));
                }
            }
        }

        findings
    }
}
