//! Integration smoke tests for the non-interactive subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneydeck(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneydeck").unwrap();
    cmd.env("MONEYDECK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn bare_invocation_prints_hint() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("moneydeck tui"));
}

#[test]
fn accounts_lists_the_seed() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"))
        .stdout(predicate::str::contains("232.53"))
        .stdout(predicate::str::contains("12,086.34"))
        .stdout(predicate::str::contains(".. 99212"));
}

#[test]
fn accounts_with_id_shows_details() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .args(["accounts", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("THB"))
        .stdout(predicate::str::contains("12,086.34"))
        .stdout(predicate::str::contains(".. 11234"))
        .stdout(predicate::str::contains("EUR").not());
}

#[test]
fn accounts_with_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .args(["accounts", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No account with id '99'"));
}

#[test]
fn transactions_lists_newest_first() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .arg("transactions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shwe Sin Win"))
        .stdout(predicate::str::contains("+1,250.00 USD"))
        .stdout(predicate::str::contains("Pending"));
}

#[test]
fn transactions_limit_truncates_the_feed() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .args(["transactions", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shwe Sin Win"))
        .stdout(predicate::str::contains("To EUR"))
        .stdout(predicate::str::contains("Iberojet").not());
}

#[test]
fn txn_alias_works() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .arg("txn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spotify AB"));
}

#[test]
fn config_shows_resolved_paths() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()))
        .stdout(predicate::str::contains("moneydeck.log"))
        .stdout(predicate::str::contains("Accent color"));
}

#[test]
fn config_respects_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"date_format":"%-d %b","grouped_amounts":false,"accent":"green"}"#,
    )
    .unwrap();

    moneydeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accent color:    green"))
        .stdout(predicate::str::contains("Grouped amounts: false"));
}

#[test]
fn config_accent_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    moneydeck(&dir)
        .args(["config", "--accent", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."))
        .stdout(predicate::str::contains("Accent color:    green"));

    // A fresh invocation reads the saved file
    moneydeck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accent color:    green"));
}

#[test]
fn malformed_settings_fail_with_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

    moneydeck(&dir)
        .arg("accounts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
