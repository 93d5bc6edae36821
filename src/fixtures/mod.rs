//! Fixture files and their inline verdict annotations.
//!
//! A fixture is a checked-in PHP source file whose lines carry trailing
//! `// NOK {{message}}` / `// OK` comments declaring the findings a rule is
//! expected to produce. The annotations are ordinary PHP comments and do not
//! affect parseability.

mod annotations;
mod types;

pub use annotations::parse_fixture;
pub use types::{Expectation, FixtureFile, MalformedAnnotation, Verdict};
