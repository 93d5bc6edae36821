//! Fixture types.

use serde::{Deserialize, Serialize};

/// The expected presence (`Nok`) or absence (`Ok`) of a finding at a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Nok,
}

/// One annotated line of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// 1-based line the annotation sits on.
    pub line: u32,
    pub verdict: Verdict,
    /// Expected diagnostic text; present only for `Nok`.
    pub message: Option<String>,
}

/// An annotation attempt that matched neither recognized pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedAnnotation {
    /// 1-based line of the comment.
    pub line: u32,
    /// The raw comment text, `//` included.
    pub raw: String,
}

/// A parsed fixture file: an ordered sequence of annotated lines.
///
/// Identity is the file path; fixtures are treated as immutable once
/// checked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFile {
    pub path: String,
    /// Full source text, used for parsing and for rule input.
    pub source: String,
    /// Expectations in line order.
    pub expectations: Vec<Expectation>,
    /// Annotation attempts that did not match the grammar.
    pub malformed: Vec<MalformedAnnotation>,
}

impl FixtureFile {
    /// Lines annotated `NOK`, in order.
    pub fn nok_lines(&self) -> impl Iterator<Item = &Expectation> {
        self.expectations
            .iter()
            .filter(|e| e.verdict == Verdict::Nok)
    }

    /// Lines annotated `OK`, in order.
    pub fn ok_lines(&self) -> impl Iterator<Item = &Expectation> {
        self.expectations
            .iter()
            .filter(|e| e.verdict == Verdict::Ok)
    }
}
