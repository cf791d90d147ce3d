use crate::common::{cmd, TestContext};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mock-class"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_subcommands_listed() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_for_bash() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mock-class"));
}
