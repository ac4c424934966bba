//! End-to-end tests that drive the compiled `passvault` binary.
//!
//! Every test gets an isolated home directory and supplies the
//! passphrase through the environment, so no prompt is ever shown.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASSPHRASE: &str = "integration-passphrase";

/// A `passvault` command pointed at an isolated home directory.
fn passvault(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passvault").expect("binary builds");
    cmd.arg("--home").arg(home.path());
    cmd.env_remove("PASSVAULT_HOME");
    cmd.env_remove("PASSVAULT_VAULT");
    cmd.env_remove("PASSVAULT_NEW_PASSPHRASE");
    cmd.env("PASSVAULT_PASSPHRASE", PASSPHRASE);
    cmd
}

/// Create and register a vault named `name`.
fn new_vault(home: &TempDir, name: &str) {
    passvault(home)
        .args(["vault", "new", name])
        .assert()
        .success();
}

#[test]
fn vault_new_registers_and_sets_default() {
    let home = TempDir::new().unwrap();

    new_vault(&home, "work");

    passvault(&home)
        .args(["vault", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work"));

    passvault(&home)
        .args(["vault", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work"));
}

#[test]
fn add_and_show_roundtrip() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "main");

    passvault(&home)
        .args([
            "add",
            "ex.com",
            "bob",
            "--password=s3cret!",
            "url=https://ex.com",
        ])
        .assert()
        .success();

    passvault(&home)
        .args(["show", "ex.com", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password: s3cret!"))
        .stdout(predicate::str::contains("url: https://ex.com"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "main");

    let mut cmd = passvault(&home);
    cmd.env("PASSVAULT_PASSPHRASE", "not-the-passphrase");
    cmd.arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong passphrase"));
}

#[test]
fn missing_default_vault_is_reported() {
    let home = TempDir::new().unwrap();

    passvault(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No default vault"));
}

#[test]
fn alias_points_at_the_same_vault() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "work");

    passvault(&home)
        .args(["vault", "alias", "work", "w"])
        .assert()
        .success();

    passvault(&home)
        .args(["add", "site.org", "alice", "--vault", "w"])
        .assert()
        .success();

    passvault(&home)
        .args(["show", "site.org", "alice", "--vault", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login: alice"));
}

#[test]
fn delete_removes_only_the_exact_record() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "main");

    passvault(&home)
        .args(["add", "ex.com", "bob"])
        .assert()
        .success();
    passvault(&home)
        .args(["add", "ex.com", "carol"])
        .assert()
        .success();

    passvault(&home)
        .args(["delete", "ex.com", "bob", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 record"));

    passvault(&home)
        .args(["show", "ex.com", "carol"])
        .assert()
        .success();

    passvault(&home)
        .args(["show", "ex.com", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record found"));
}

#[test]
fn rotate_key_reencrypts_under_new_passphrase() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "main");

    passvault(&home)
        .args(["add", "ex.com", "bob", "--password=old-secret"])
        .assert()
        .success();

    let mut rotate = passvault(&home);
    rotate.env("PASSVAULT_NEW_PASSPHRASE", "rotated-passphrase");
    rotate.arg("rotate-key").assert().success();

    // The old passphrase no longer opens the vault.
    passvault(&home)
        .args(["show", "ex.com", "bob"])
        .assert()
        .failure();

    // The new one does, and the plaintext survived the rotation.
    let mut show = passvault(&home);
    show.env("PASSVAULT_PASSPHRASE", "rotated-passphrase");
    show.args(["show", "ex.com", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password: old-secret"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let home = TempDir::new().unwrap();

    let output = passvault(&home)
        .args(["generate", "24"])
        .output()
        .expect("run generate");

    assert!(output.status.success());
    let printed = String::from_utf8(output.stdout).expect("ascii password");
    assert_eq!(printed.trim_end_matches('\n').len(), 24);
}

#[test]
fn vault_delete_removes_the_backing_file() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "scratch");

    let vault_file = home.path().join("vault.scratch.json");
    assert!(vault_file.exists());

    passvault(&home)
        .args(["vault", "delete", "scratch", "--force"])
        .assert()
        .success();

    assert!(!vault_file.exists());
}

#[test]
fn rename_site_touches_every_login() {
    let home = TempDir::new().unwrap();
    new_vault(&home, "main");

    passvault(&home)
        .args(["add", "old.com", "u1"])
        .assert()
        .success();
    passvault(&home)
        .args(["add", "old.com", "u2"])
        .assert()
        .success();

    passvault(&home)
        .args(["rename-site", "old.com", "new.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 record(s)"));

    passvault(&home)
        .args(["show", "new.com", "u1"])
        .assert()
        .success();
}
