//! CLI surface tests: argument handling and pre-flight configuration errors.
//!
//! These runs all fail before any network call, so no server is needed.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mkrepo() -> Command {
    let mut cmd = Command::cargo_bin("mkrepo").unwrap();
    cmd.env_remove("GITHUB_TOKEN").env_remove("GITHUB_ORG");
    cmd
}

#[test]
fn requires_name_and_language_arguments() {
    mkrepo().assert().failure().stderr(predicate::str::contains("Usage"));

    mkrepo().arg("my-app").assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_token_is_a_fatal_configuration_error() {
    mkrepo()
        .args(["my-app", "python"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: GITHUB_TOKEN is not set in environment"));
}

#[test]
fn missing_org_is_a_fatal_configuration_error() {
    mkrepo()
        .args(["my-app", "python"])
        .env("GITHUB_TOKEN", "fake-token")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: GITHUB_ORG is not set in environment"));
}

#[test]
fn unsupported_language_lists_available_templates() {
    let workdir = TempDir::new().unwrap();
    fs::create_dir_all(workdir.path().join("languages/python")).unwrap();
    fs::create_dir_all(workdir.path().join("languages/go")).unwrap();

    mkrepo()
        .args(["my-app", "cobol"])
        .env("GITHUB_TOKEN", "fake-token")
        .env("GITHUB_ORG", "acme")
        .current_dir(workdir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Language 'cobol' is not supported. Available languages: go, python",
        ));
}

#[test]
fn missing_template_root_is_a_fatal_configuration_error() {
    let workdir = TempDir::new().unwrap();

    mkrepo()
        .args(["my-app", "python"])
        .env("GITHUB_TOKEN", "fake-token")
        .env("GITHUB_ORG", "acme")
        .current_dir(workdir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn version_flag_reports_the_binary_version() {
    mkrepo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
