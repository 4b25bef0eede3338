use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lockstage() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lockstage"))
}

#[test]
fn test_help_message_shows() {
    lockstage()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lock file"));
}

#[test]
fn test_backup_default_lock_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("composer.lock"), "test lock file content").unwrap();

    lockstage()
        .current_dir(dir.path())
        .arg("backup")
        .assert()
        .success();

    let backup = dir.path().join("storage/statamic/updater/composer.lock.bak");
    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "test lock file content"
    );
}

#[test]
fn test_backup_missing_lock_file_succeeds() {
    let dir = TempDir::new().unwrap();

    lockstage()
        .current_dir(dir.path())
        .args(["backup", "non-existent-file.lock", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to do"));

    assert!(!dir
        .path()
        .join("storage/statamic/updater/composer.lock.bak")
        .exists());
}

#[test]
fn test_mock_custom_lock_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("custom")).unwrap();
    fs::write(
        dir.path().join("custom/composer.lock"),
        "custom lock file content",
    )
    .unwrap();

    lockstage()
        .current_dir(dir.path())
        .args(["mock", "./custom/composer.lock", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created mock"));

    let mock = dir
        .path()
        .join("custom/storage/statamic/updater/composer.lock.mock");
    assert_eq!(fs::read_to_string(mock).unwrap(), "custom lock file content");
}

#[test]
fn test_restore_from_mock() {
    let dir = TempDir::new().unwrap();
    let lock = dir.path().join("composer.lock");
    fs::write(&lock, "staged").unwrap();

    lockstage().arg("mock").arg(&lock).assert().success();
    fs::write(&lock, "live").unwrap();

    lockstage()
        .arg("restore")
        .arg(&lock)
        .args(["--from", "mock"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&lock).unwrap(), "staged");
}

#[test]
fn test_status_lists_artifacts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("composer.lock"), "content").unwrap();

    lockstage()
        .current_dir(dir.path())
        .arg("backup")
        .assert()
        .success();

    lockstage()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("composer.lock.bak (7 bytes"))
        .stdout(predicate::str::contains("[matches lock]"))
        .stdout(predicate::str::contains("composer.lock.mock (missing)"));
}

#[test]
fn test_custom_namespace() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("composer.lock"), "content").unwrap();

    lockstage()
        .current_dir(dir.path())
        .args(["--namespace", "acme", "backup"])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("storage/acme/updater/composer.lock.bak")
        .is_file());
}

#[test]
fn test_invalid_namespace_exit_code() {
    let dir = TempDir::new().unwrap();

    lockstage()
        .current_dir(dir.path())
        .args(["--namespace", "../escape", "backup"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid storage layout segment"));
}

#[test]
fn test_blocked_storage_exit_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("composer.lock"), "content").unwrap();
    fs::write(dir.path().join("storage"), "a file, not a directory").unwrap();

    lockstage()
        .current_dir(dir.path())
        .arg("backup")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create storage directory"));
}

#[test]
fn test_restore_default_lock_file() {
    let dir = TempDir::new().unwrap();
    let lock = dir.path().join("composer.lock");
    fs::write(&lock, "original").unwrap();

    lockstage()
        .current_dir(dir.path())
        .arg("backup")
        .assert()
        .success();
    fs::write(&lock, "broken").unwrap();

    lockstage()
        .current_dir(dir.path())
        .args(["restore", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Restored composer.lock from backup"));

    assert_eq!(fs::read_to_string(&lock).unwrap(), "original");
}
