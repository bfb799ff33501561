//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;

/// Command for the compiled binary with no ambient credentials
fn tfcctl(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfcctl"));
    cmd.env("HOME", home)
        .env_remove("TOKEN")
        .env_remove("TFE_TOKEN")
        .env_remove("TFE_HOSTNAME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Manage HCP Terraform workspaces, variables, configuration uploads and runs",
        ))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("--explain"));
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfcctl"));
}

#[test]
fn test_upload_rejects_invalid_run_value() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .args(["upload", "acme", "web", "--run", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maybe"));
}

#[test]
fn test_missing_token_fails_before_any_request() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .args(["ws", "list", "acme", "-H", "127.0.0.1:1"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: No API token found"));
}

#[test]
fn test_token_from_credentials_file_is_used() {
    let home = tempfile::tempdir().unwrap();
    let creds_dir = home.path().join(".terraform.d");
    std::fs::create_dir_all(&creds_dir).unwrap();
    std::fs::write(
        creds_dir.join("credentials.tfrc.json"),
        r#"{"credentials": {"127.0.0.1:1": {"token": "file-token"}}}"#,
    )
    .unwrap();

    // Token resolution succeeds; the request itself then fails to connect
    tfcctl(home.path())
        .args(["ws", "list", "acme", "-H", "127.0.0.1:1", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API token found").not());
}

#[test]
fn test_explain_prints_curl_without_token() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .args([
            "ws",
            "list",
            "acme",
            "-H",
            "127.0.0.1:1",
            "-t",
            "super-secret",
            "--explain",
            "--batch",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("curl -X GET"))
        .stderr(predicate::str::contains("Bearer $TOKEN"))
        .stderr(predicate::str::contains(
            "https://127.0.0.1:1/api/v2/organizations/acme/workspaces",
        ))
        .stderr(predicate::str::contains("super-secret").not());
}

#[test]
fn test_upload_missing_directory_is_a_configuration_error() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("does-not-exist");
    let archive = home.path().join("out.tar.gz");

    tfcctl(home.path())
        .args(["upload", "acme", "web", "-t", "tok", "-H", "127.0.0.1:1", "--batch"])
        .arg("-d")
        .arg(&missing)
        .arg("-f")
        .arg(&archive)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_var_convert_runs_without_token() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("prod.tfvars");
    let output = home.path().join("prod.csv");
    std::fs::write(&input, "region = \"eu-west-1\"\ncount = 2\n").unwrap();

    tfcctl(home.path())
        .args(["var", "convert"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let converted = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        converted,
        "#[var name],[var value],[var type],[var is sensitive]\n\
         region,eu-west-1,terraform,false\n\
         count,2,terraform,false\n"
    );
}

#[test]
fn test_var_set_requires_key_and_value() {
    let home = tempfile::tempdir().unwrap();
    tfcctl(home.path())
        .args(["var", "set", "acme", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--var"));
}
