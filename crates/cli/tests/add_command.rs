use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn addend() -> Command {
    let mut cmd = Command::cargo_bin("addend").expect("binary");
    cmd.env_remove("ADDEND_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_prints_sum() {
    addend()
        .args(["add", "1,2"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn add_accepts_escaped_newline_header() {
    addend()
        .args(["add", r"//;\n1;2;3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn add_trims_and_strips_quotes() {
    addend()
        .args(["add", "  \"1,2\"  "])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn add_reads_stdin_when_no_input() {
    addend()
        .arg("add")
        .write_stdin("1\n2,3\n")
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn add_rejects_negatives_on_stderr() {
    addend()
        .args(["add", "1,-2,3,-4"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Negative numbers not allowed: -2, -4",
        ));
}

#[test]
fn add_accepts_input_starting_with_minus() {
    addend()
        .args(["add", "-1,2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Negative numbers not allowed: -1"));

    addend()
        .args(["add", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Negative numbers not allowed: -5"));
}

#[test]
fn add_json_reports_outcome() {
    let output = addend()
        .args(["add", "--json", "2,1001"])
        .output()
        .expect("command run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body, serde_json::json!({"ok": true, "value": 2}));
}

#[test]
fn add_json_rejection_lists_negatives() {
    let output = addend()
        .args(["add", "--json", "-1,5,-7"])
        .output()
        .expect("command run");
    assert_eq!(output.status.code(), Some(1));
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["ok"], false);
    assert_eq!(body["negatives"], serde_json::json!([-1, -7]));
    assert_eq!(body["message"], "Negative numbers not allowed: -1, -7");
}

#[test]
fn add_explain_shows_breakdown() {
    addend()
        .args(["add", "--explain", "1,abc,5000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("counted 1")
                .and(predicate::str::contains("ignored (not a number)"))
                .and(predicate::str::contains("ignored 5000 (out of range)"))
                .and(predicate::str::ends_with("\n1\n")),
        );
}

#[test]
fn config_flag_changes_rules() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("addend.toml");
    fs::write(&path, "default_delimiters = [\";\"]\nmax_value = 10\n").unwrap();

    addend()
        .arg("--config")
        .arg(&path)
        .args(["add", "4;5;11"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn config_env_is_used_without_flag() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("addend.toml");
    fs::write(&path, "max_value = 2\n").unwrap();

    addend()
        .env("ADDEND_CONFIG", &path)
        .args(["add", "1,2,3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn invalid_config_fails() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("addend.toml");
    fs::write(&path, "max_value = -1\n").unwrap();

    addend()
        .arg("--config")
        .arg(&path)
        .args(["add", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_value"));
}
