//! Expected-vs-actual comparison and the multi-file harness.

mod diff;
mod harness;
mod types;

pub use diff::diff_findings;
pub use harness::FixtureHarness;
pub use types::{FixtureOutcome, HarnessResult, Mismatch, MismatchKind, MismatchTotals};
