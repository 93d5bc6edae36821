//! Inline verdict annotation parsing.
//!
//! Recognized trailing comments:
//! - `// NOK {{<message>}}` — exactly one expected finding at this line.
//! - `// OK` — no finding expected at this line.
//!
//! A trailing comment whose first token is `NOK` or `OK` but which matches
//! neither pattern is recorded as malformed. Any other comment is inert.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Expectation, FixtureFile, MalformedAnnotation, Verdict};

static NOK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^//\s*NOK\s*\{\{(.*)\}\}\s*$").unwrap());

static OK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//\s*OK\s*$").unwrap());

/// A comment is an annotation attempt if it leads with a bare NOK/OK token.
static ATTEMPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//\s*(NOK|OK)\b").unwrap());

/// Parse a fixture's inline annotations into per-line expectations.
///
/// Lines are 1-based. Lines without a recognized annotation carry no
/// expectation; the verification contract still requires them to produce no
/// findings.
pub fn parse_fixture(source: &str, path: &str) -> FixtureFile {
    let mut expectations = Vec::new();
    let mut malformed = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx as u32 + 1;
        let Some(pos) = line.rfind("//") else {
            continue;
        };
        let comment = &line[pos..];

        if let Some(caps) = NOK_RE.captures(comment) {
            expectations.push(Expectation {
                line: line_no,
                verdict: Verdict::Nok,
                message: Some(caps[1].to_string()),
            });
        } else if OK_RE.is_match(comment) {
            expectations.push(Expectation {
                line: line_no,
                verdict: Verdict::Ok,
                message: None,
            });
        } else if ATTEMPT_RE.is_match(comment) {
            malformed.push(MalformedAnnotation {
                line: line_no,
                raw: comment.to_string(),
            });
        }
    }

    FixtureFile {
        path: path.to_string(),
        source: source.to_string(),
        expectations,
        malformed,
    }
}
