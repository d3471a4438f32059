//! End-to-end tests for the djsession binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SECRET: &str = "test_django_secret_key_123";
const ANONYMOUS: &str = "eyJ0ZXN0IjoidGVzdCJ9:1tTx2e:cLJA-rvF94U-ejQ_06paewGPjA78IC8Iz2Z_4xiKxlU";
const COMPRESSED: &str = ".eJyrVipJLS5RsoJQOkrxiaUlGfGlxalF8ZkpQGFDVLGkxOTs1DyQREpWYl56vl5yfl5JUWaSHkiJHlS2WM83PyU1xwmqFsWAjMTiDJhttQDHuix7:1tTx5X:f22SIYKmSaV_yYEO1rYVSWr5-eIVXOWW6_Fh3orDXHs";

fn djsession(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("djsession").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DJANGO_SECRET_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn decode_with_secret_flag() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["decode", ANONYMOUS, "--secret", SECRET, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"test\":\"test\"}\n"));
}

#[test]
fn decode_with_secret_from_env() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .env("DJANGO_SECRET_KEY", SECRET)
        .args(["decode", COMPRESSED, "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "_auth_user_backend = django.contrib.auth.backends.ModelBackend",
        ));
}

#[test]
fn decode_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["decode", "-", "--secret", SECRET, "-f", "json"])
        .write_stdin(format!("{ANONYMOUS}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""test":"test""#));
}

#[test]
fn decode_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".djsession.toml"),
        format!("secret_key = \"{SECRET}\"\n"),
    )
    .unwrap();

    djsession(&dir)
        .args(["decode", ANONYMOUS, "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"test":"test"}"#));
}

#[test]
fn missing_secret_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["decode", ANONYMOUS])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No secret key provided"))
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn wrong_secret_exits_with_token_code() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["decode", ANONYMOUS, "--secret", "invalid_key"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid signature"));
}

#[test]
fn token_without_delimiter_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["decode", "eyJ0ZXN0IjoidGVzdCJ9", "--secret", SECRET])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No signature delimiter found"));
}

#[test]
fn verify_prints_segments() {
    let dir = tempfile::tempdir().unwrap();
    djsession(&dir)
        .args(["verify", COMPRESSED, "--secret", SECRET])
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("1tTx5X"));
}
