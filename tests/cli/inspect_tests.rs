use crate::common::{cmd, simple_print_manifest, TestContext};
use predicates::prelude::*;

#[test]
fn test_inspect_requires_class_arg() {
    let ctx = TestContext::default();
    cmd(&ctx).args(["inspect"]).assert().failure().stderr(
        predicate::str::contains("class")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("missing")),
    );
}

#[test]
fn test_inspect_with_missing_manifest_file() {
    let ctx = TestContext::default();
    cmd(&ctx)
        .args(["inspect", "--class", "/nonexistent/class.json"])
        .assert()
        .failure();
}

#[test]
fn test_inspect_lists_methods_and_recorders() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();

    cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mock class: SimplePrint"))
        .stdout(predicate::str::contains("Recorders:\n  - constructor\n  - print"))
        .stdout(predicate::str::contains("toString").not());
}

#[test]
fn test_inspect_json_output() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();

    let output = cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["result"]["class"], "SimplePrint");
    assert_eq!(value["result"]["methods"], serde_json::json!(["print"]));
    assert_eq!(
        value["result"]["recorders"],
        serde_json::json!(["constructor", "print"])
    );
}

#[test]
fn test_inspect_opaque_manifest_fails() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("blob.json", r#"{"name": "Blob"}"#)
        .unwrap();

    cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Blob"));
}

#[test]
fn test_inspect_opaque_manifest_json_reports_error() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("blob.json", r#"{"name": "Blob"}"#)
        .unwrap();

    let output = cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "error");
    assert!(value["errors"][0].as_str().unwrap().contains("Blob"));
}

#[test]
fn test_inspect_reads_toml_manifest() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file(
            "repo.toml",
            "name = \"Repo\"\n\n[[members]]\nname = \"load\"\n\n[[members]]\nname = \"save\"\n",
        )
        .unwrap();

    cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - load\n  - save"));
}

#[test]
fn test_config_selects_json_format() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();
    ctx.create_file(".mock-class.toml", "[output]\nformat = \"json\"\n")
        .unwrap();

    cmd(&ctx)
        .args(["inspect", "--class", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""));
}

#[test]
fn test_verbose_inspect_shows_signatures() {
    let ctx = TestContext::default();
    let manifest = ctx
        .create_file("simple_print.json", &simple_print_manifest())
        .unwrap();

    cmd(&ctx)
        .args(["--verbose", "inspect", "--class", manifest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("print(something)"));
}
