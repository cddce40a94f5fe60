// Integration tests for the `selftest` subcommand.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn selftest_reports_pass_and_fail_lines() {
    let mut cmd = Command::cargo_bin("verdict").unwrap();
    cmd.arg("selftest").arg("--no-color");
    // One comparison fails by design, so the exit code is nonzero.
    cmd.assert().failure().stdout(
        contains("verdict: successful test: PASS (")
            .and(contains("verdict: failed test: FAIL ("))
            .and(contains("1 passed, 1 failed")),
    );
}

#[test]
fn selftest_json_contains_both_outcomes() {
    let mut cmd = Command::cargo_bin("verdict").unwrap();
    let output = cmd.arg("selftest").arg("--json").output().unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["label"], "verdict: successful test");
    assert_eq!(outcomes[0]["passed"], true);
    assert_eq!(outcomes[1]["passed"], false);
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["summary"]["failed"], 1);
}
