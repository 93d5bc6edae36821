//! Reporters over harness results.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use crate::verify::HarnessResult;

/// Trait for rendering a harness result.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, result: &HarnessResult) -> Result<String, String>;
}
