use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_tf-iam-scanner");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tf-iam-scanner-policy-generation/tests/fixtures")
        .join(name)
}

fn scanner() -> Command {
    let mut command = Command::new(BIN);
    command
        .env_remove("TF_IAM_SCANNER_PATH")
        .env_remove("TF_IAM_SCANNER_PERMISSIONS")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn help_lists_flags() {
    let out = scanner()
        .arg("--help")
        .output()
        .expect("failed to run --help");
    let s = String::from_utf8_lossy(&out.stdout);
    for flag in [
        "--path",
        "--output",
        "--include-state-backend",
        "--least-privilege",
        "--format",
        "--permissions-file",
    ] {
        assert!(s.contains(flag), "help should mention {}: {}", flag, s);
    }
}

#[test]
fn test_json_policy_on_stdout_and_summary_on_stderr() {
    scanner()
        .args(["--path"])
        .arg(fixture("simple"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"Version\": \"2012-10-17\""))
        .stdout(predicate::str::contains("\"lambda:*\""))
        .stdout(predicate::str::contains("Summary:").not())
        .stderr(predicate::str::contains("Summary:"))
        .stderr(predicate::str::contains("Resources found: 2"))
        .stderr(predicate::str::contains("Data sources found: 1"));
}

#[test]
fn test_least_privilege_lists_services() {
    scanner()
        .args(["--least-privilege", "-p"])
        .arg(fixture("simple"))
        .assert()
        .success()
        .stdout(predicate::str::contains("arn:aws:lambda:*:*:*"))
        .stderr(predicate::str::contains(
            "Services requiring permissions: iam, lambda, s3, sts",
        ));
}

#[test]
fn test_backend_hint() {
    scanner()
        .arg("--path")
        .arg(fixture("backend"))
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamodb:GetItem"))
        .stderr(predicate::str::contains("Backend detected: s3"))
        .stderr(predicate::str::contains(
            "Use --include-state-backend to add backend permissions",
        ));

    scanner()
        .args(["--include-state-backend", "--path"])
        .arg(fixture("backend"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Use --include-state-backend").not());
}

#[test]
fn test_terraform_format() {
    scanner()
        .args(["-f", "terraform", "-p"])
        .arg(fixture("simple"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "data \"aws_iam_policy_document\" \"generated\" {",
        ))
        .stdout(predicate::str::contains("name   = \"tf-iam-scanner-generated\""));
}

#[test]
fn test_yaml_format() {
    scanner()
        .args(["--format", "yaml", "--path"])
        .arg(fixture("simple"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement:"))
        .stdout(predicate::str::contains("Effect: Allow"));
}

#[test]
fn test_unsupported_format_is_rejected() {
    scanner()
        .args(["--format", "xml", "--path"])
        .arg(fixture("simple"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("policy.json");

    scanner()
        .arg("--path")
        .arg(fixture("simple"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("IAM policy written to:"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"Statement\""));
}

#[test]
fn test_empty_directory_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "nothing here").unwrap();

    scanner()
        .arg("--path")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: No AWS resources or data sources found in",
        ));
}

#[test]
fn test_missing_path_fails() {
    let output = scanner()
        .args(["--path", "definitely/not/a/real/dir"])
        .output()
        .expect("failed to run scanner");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error: "), "stderr was: {}", stderr);
    assert!(
        stderr.contains("definitely/not/a/real/dir"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_path_from_environment() {
    scanner()
        .env("TF_IAM_SCANNER_PATH", fixture("malformed"))
        .assert()
        .success()
        .stdout(predicate::str::contains("sqs:*"));
}

#[test]
fn test_custom_permissions_file() {
    let dir = TempDir::new().unwrap();
    let permissions = dir.path().join("permissions.json");
    fs::write(
        &permissions,
        r#"{"aws_s3_bucket": {"actions": ["s3:CreateBucket"]}}"#,
    )
    .unwrap();

    scanner()
        .arg("--path")
        .arg(fixture("simple"))
        .arg("--permissions-file")
        .arg(&permissions)
        .assert()
        .success()
        .stdout(predicate::str::contains("s3:CreateBucket"))
        .stdout(predicate::str::contains("lambda").not());
}
