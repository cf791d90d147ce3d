use crate::common::{cmd, simple_print_manifest, TestContext};
use predicates::prelude::*;

#[test]
fn test_scaffold_prints_to_stdout() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();

    cmd(&ctx)
        .args(["scaffold", "--class", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("pub trait SimplePrint {"))
        .stdout(predicate::str::contains(
            "fn print(&self, something: String) -> i64;",
        ))
        .stdout(predicate::str::contains("fn test_simple_print_mock()"));
}

#[test]
fn test_scaffold_writes_and_appends() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();
    let output = ctx.temp_path().join("tests").join("mocks.rs");

    for _ in 0..2 {
        cmd(&ctx)
            .args([
                "scaffold",
                "--class",
                manifest.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();
    }

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.matches("pub trait SimplePrint").count(), 2);
}

#[test]
fn test_scaffold_overwrite() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();
    let output = ctx.create_file("mocks.rs", "// stale\n").unwrap();

    cmd(&ctx)
        .args([
            "scaffold",
            "--class",
            manifest.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--overwrite",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.contains("pub trait SimplePrint"));
}

#[test]
fn test_scaffold_value_type_flag() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file(
            "store.json",
            r#"{"name": "Store", "members": [{"name": "get", "params": [{"name": "key"}]}]}"#,
        )
        .unwrap();

    cmd(&ctx)
        .args([
            "scaffold",
            "--class",
            manifest.to_str().unwrap(),
            "--value-type",
            "String",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fn get(&self, key: String) -> Option<String>;",
        ));
}

#[test]
fn test_scaffold_rejects_invalid_identifier() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file(
            "bad.json",
            r#"{"name": "Bad", "members": [{"name": "9lives"}]}"#,
        )
        .unwrap();

    cmd(&ctx)
        .args(["scaffold", "--class", manifest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9lives"));
}
