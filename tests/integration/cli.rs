//! CLI tests for the non-interactive commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kinform(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kinform").expect("binary built");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn save_user(data_dir: &TempDir) {
    kinform(data_dir)
        .args([
            "user",
            "--first-name",
            "Grace",
            "--last-name",
            "Hopper",
            "--email",
            "grace@navy.mil",
            "--contact",
            "555-1234",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved user details for Grace Hopper"));
}

#[test]
fn test_show_on_fresh_data_dir() {
    let dir = TempDir::new().unwrap();

    kinform(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Details\nNot saved"))
        .stdout(predicate::str::contains("Relative Details\nNot saved"));

    assert!(dir.path().join("kinform.db").exists());
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_saved_user_is_shown() {
    let dir = TempDir::new().unwrap();
    save_user(&dir);

    kinform(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("First Name Grace"))
        .stdout(predicate::str::contains("Contact Details 5551234"));
}

#[test]
fn test_invalid_email_is_rejected() {
    let dir = TempDir::new().unwrap();

    kinform(&dir)
        .args([
            "user",
            "--first-name",
            "Grace",
            "--last-name",
            "Hopper",
            "--email",
            "not-an-email",
            "--contact",
            "5551234",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address"));
}

#[test]
fn test_reset_removes_saved_details() {
    let dir = TempDir::new().unwrap();
    save_user(&dir);

    kinform(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved details removed"));

    kinform(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Details\nNot saved"));
}

#[test]
fn test_in_memory_session_saves_nothing() {
    let dir = TempDir::new().unwrap();
    kinform(&dir)
        .args([
            "--in-memory",
            "user",
            "--first-name",
            "Grace",
            "--last-name",
            "Hopper",
            "--email",
            "grace@navy.mil",
            "--contact",
            "5551234",
        ])
        .assert()
        .success();

    kinform(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Details\nNot saved"));
}

#[test]
fn test_in_memory_help_explains_missing_user_details() {
    let dir = TempDir::new().unwrap();

    kinform(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("reports missing user details"));
}
