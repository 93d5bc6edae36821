//! Rule tests against the checked-in fixtures.

use std::fs;
use std::path::PathBuf;

use rulecheck::{PhpParser, ProtectedMembersRule, Rule, RuleRegistry, UnderscorePrefixRule};

fn load(rel: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures/php")
        .join(rel);
    fs::read_to_string(path).unwrap()
}

const S3_MESSAGE: &str = "Use of protected class members is discouraged.";

/// The protected-members rule must flag the `protected function foo()` line
/// and the `protected $myVariable;` line, and nothing else.
#[test]
fn test_protected_members_rule_on_fixture() {
    let source = load("s3/protected_members.php");
    let mut parser = PhpParser::new().unwrap();
    let parse = parser.parse(&source, "protected_members.php").unwrap();

    let findings = ProtectedMembersRule.check(&parse);

    let lines: Vec<u32> = findings.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![5, 11]);
    assert!(findings.iter().all(|f| f.message == S3_MESSAGE));
    assert!(findings.iter().all(|f| f.rule_key == "S3"));
}

/// No finding on: private static function, protected abstract function,
/// public function, public/private/private-static properties.
#[test]
fn test_protected_members_rule_silent_lines() {
    let source = load("s3/protected_members.php");
    let mut parser = PhpParser::new().unwrap();
    let parse = parser.parse(&source, "protected_members.php").unwrap();

    let findings = ProtectedMembersRule.check(&parse);

    for silent_line in [7, 8, 9, 12, 13, 14] {
        assert!(
            findings.iter().all(|f| f.line != silent_line),
            "line {silent_line} must not be flagged"
        );
    }
}

/// Running the rule twice against an unchanged file yields identical
/// finding sets.
#[test]
fn test_rule_is_idempotent() {
    let source = load("s3/protected_members.php");
    let mut parser = PhpParser::new().unwrap();

    let first_parse = parser.parse(&source, "protected_members.php").unwrap();
    let second_parse = parser.parse(&source, "protected_members.php").unwrap();
    assert_eq!(first_parse.content_hash, second_parse.content_hash);

    let first = ProtectedMembersRule.check(&first_parse);
    let second = ProtectedMembersRule.check(&second_parse);
    assert_eq!(first, second);
}

#[test]
fn test_underscore_prefix_rule_on_fixture() {
    let source = load("s4/underscore_prefix.php");
    let mut parser = PhpParser::new().unwrap();
    let parse = parser.parse(&source, "underscore_prefix.php").unwrap();

    let findings = UnderscorePrefixRule.check(&parse);

    let lines: Vec<u32> = findings.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![5, 6]);
    assert_eq!(
        findings[0].message,
        "Property name \"$_secret\" should not be prefixed with an underscore to indicate visibility"
    );
    assert_eq!(
        findings[1].message,
        "Property name \"$_config\" should not be prefixed with an underscore to indicate visibility"
    );
}

/// Registry dispatch matches calling the rules directly.
#[test]
fn test_registry_dispatch() {
    let source = load("s3/protected_members.php");
    let mut parser = PhpParser::new().unwrap();
    let parse = parser.parse(&source, "protected_members.php").unwrap();

    let registry = RuleRegistry::with_default_rules();
    let via_registry = registry.run("S3", &parse).unwrap();
    let direct = ProtectedMembersRule.check(&parse);

    assert_eq!(via_registry, direct);
}
