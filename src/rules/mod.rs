//! The rule trait, registry, and shipped member checks.

mod protected_members;
mod types;
mod underscore_prefix;

pub use protected_members::ProtectedMembersRule;
pub use types::{Finding, Severity};
pub use underscore_prefix::UnderscorePrefixRule;

use crate::errors::FixtureError;
use crate::parser::ParseResult;

/// Trait that every lint rule implements.
pub trait Rule: Send + Sync {
    /// Stable rule key (e.g. "S3").
    fn key(&self) -> &'static str;

    /// Human-readable rule name.
    fn name(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// Run the rule against one parsed file.
    fn check(&self, parse: &ParseResult) -> Vec<Finding>;
}

/// Registry of available rules, keyed by rule key.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry with all shipped rules.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ProtectedMembersRule));
        registry.register(Box::new(UnderscorePrefixRule));
        registry
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn get(&self, key: &str) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.key() == key).map(|r| r.as_ref())
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.key()).collect()
    }

    /// Run one rule by key against a parsed file.
    pub fn run(&self, key: &str, parse: &ParseResult) -> Result<Vec<Finding>, FixtureError> {
        let rule = self.get(key).ok_or_else(|| FixtureError::UnknownRule {
            key: key.to_string(),
        })?;
        Ok(rule.check(parse))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
