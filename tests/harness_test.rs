//! End-to-end harness tests: discovery, parallel verification, aggregation,
//! and reporting.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rulecheck::{
    FixtureHarness, HarnessConfig, JsonReporter, Reporter, TextReporter,
};

fn fixtures_root(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures/php")
        .join(rel)
}

#[test]
fn test_verify_dir_protected_members_passes() {
    let harness = FixtureHarness::new();
    let result = harness.verify_dir(&fixtures_root("s3"), "S3").unwrap();

    assert!(result.overall_passed, "errors: {:?}", result.errors);
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.files_passed, 1);
    assert_eq!(result.totals.total(), 0);
}

#[test]
fn test_verify_dir_underscore_prefix_passes() {
    let harness = FixtureHarness::new();
    let result = harness.verify_dir(&fixtures_root("s4"), "S4").unwrap();

    assert!(result.overall_passed, "errors: {:?}", result.errors);
    assert_eq!(result.files_checked, 1);
}

/// Running the wrong rule against a fixture fails with missing findings —
/// the fixture declares expectations the rule never produces.
#[test]
fn test_verify_dir_wrong_rule_fails() {
    let harness = FixtureHarness::new();
    let result = harness.verify_dir(&fixtures_root("s3"), "S4").unwrap();

    assert!(!result.overall_passed);
    assert_eq!(result.files_failed, 1);
    assert_eq!(result.totals.missing_findings, 2);
}

#[test]
fn test_verify_dir_malformed_annotations() {
    let harness = FixtureHarness::new();
    let result = harness.verify_dir(&fixtures_root("malformed"), "S3").unwrap();

    assert!(!result.overall_passed);
    assert_eq!(result.totals.malformed_annotations, 2);
}

/// Two runs over an unchanged tree produce identical outcomes.
#[test]
fn test_verify_dir_is_idempotent() {
    let harness = FixtureHarness::new();
    let first = harness.verify_dir(&fixtures_root("s3"), "S3").unwrap();
    let second = harness.verify_dir(&fixtures_root("s3"), "S3").unwrap();

    assert_eq!(first.files_checked, second.files_checked);
    assert_eq!(first.files_passed, second.files_passed);
    assert_eq!(first.totals.total(), second.totals.total());
    for (a, b) in first.outcomes.iter().zip(&second.outcomes) {
        assert_eq!(a.file, b.file);
        assert_eq!(a.passed, b.passed);
        assert_eq!(a.mismatches, b.mismatches);
    }
}

/// Parallel and sequential runs agree.
#[test]
fn test_parallel_matches_sequential() {
    let parallel = FixtureHarness::with_config(HarnessConfig {
        parallel: Some(true),
        ..Default::default()
    });
    let sequential = FixtureHarness::with_config(HarnessConfig {
        parallel: Some(false),
        ..Default::default()
    });

    let root = fixtures_root("");
    let a = parallel.verify_dir(&root, "S3").unwrap();
    let b = sequential.verify_dir(&root, "S3").unwrap();

    assert_eq!(a.files_checked, b.files_checked);
    assert_eq!(a.files_passed, b.files_passed);
    assert_eq!(a.totals.total(), b.totals.total());
}

/// An unreadable fixture is a recorded error, not a run abort.
#[test]
fn test_unreadable_fixture_is_non_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("good.php"),
        "<?php\nclass G {\n    private $v;      // OK\n}\n",
    )
    .unwrap();
    // Invalid UTF-8 — read_to_string fails on this one.
    let mut bad = fs::File::create(dir.path().join("bad.php")).unwrap();
    bad.write_all(&[0x3c, 0x3f, 0x70, 0x68, 0x70, 0xff, 0xfe]).unwrap();
    drop(bad);

    let harness = FixtureHarness::new();
    let result = harness.verify_dir(dir.path(), "S3").unwrap();

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.files_passed, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(!result.overall_passed);
}

#[test]
fn test_json_reporter_output() {
    let harness = FixtureHarness::new();
    let result = harness.verify_dir(&fixtures_root("s3"), "S3").unwrap();

    let rendered = JsonReporter.generate(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(parsed["rule"], "S3");
    assert_eq!(parsed["overall_passed"], true);
    assert_eq!(parsed["files_checked"], 1);
    assert_eq!(parsed["totals"]["missing_findings"], 0);
    assert!(parsed["outcomes"].as_array().unwrap().len() == 1);
}

#[test]
fn test_text_reporter_output() {
    let harness = FixtureHarness::new();

    let pass = harness.verify_dir(&fixtures_root("s3"), "S3").unwrap();
    let rendered = TextReporter.generate(&pass).unwrap();
    assert!(rendered.contains("PASS"));

    let fail = harness.verify_dir(&fixtures_root("malformed"), "S3").unwrap();
    let rendered = TextReporter.generate(&fail).unwrap();
    assert!(rendered.contains("FAIL"));
    assert!(rendered.contains("malformed_annotation"));
}

/// verify_file agrees with verify_dir for a single fixture.
#[test]
fn test_verify_file_matches_dir() {
    let harness = FixtureHarness::new();
    let path = fixtures_root("s3").join("protected_members.php");

    let outcome = harness.verify_file(Path::new(&path), "S3").unwrap();
    assert!(outcome.passed);
    assert_eq!(outcome.expectations, 8);
    assert_eq!(outcome.findings, 2);
}
