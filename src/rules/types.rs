//! Core types for rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// A single diagnostic produced by a rule: a location plus a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Unique ID: "{rule_key}-{file}-{line}"
    pub id: String,
    pub rule_key: String,
    pub file: String,
    /// 1-based line the finding is anchored to.
    pub line: u32,
    pub column: Option<u32>,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(
        rule_key: &str,
        file: &str,
        line: u32,
        column: Option<u32>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("{rule_key}-{file}-{line}"),
            rule_key: rule_key.to_string(),
            file: file.to_string(),
            line,
            column,
            severity,
            message: message.into(),
        }
    }
}
