//! Backup directory, configuration file and exclusion tests

mod common;

use common::*;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_backup_dir_flag() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(
        root,
        &["--backup-dir", "snapshots", "edit", "src/main.cpp", "OldWidget", "W"],
    )
    .success();

    assert_eq!(backup_count(&root.join("snapshots")), 1);
    assert!(!root.join(".txedit_backups").exists());
}

#[test]
fn test_backup_dir_env() {
    let temp = create_test_project();
    let root = temp.path();
    let backups = tempfile::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("txedit");
    cmd.args(["edit", "src/main.cpp", "OldWidget", "W"])
        .env("TXEDIT_BACKUP_DIR", backups.path())
        .current_dir(root)
        .assert()
        .success();

    assert_eq!(backup_count(backups.path()), 1);
    assert!(!root.join(".txedit_backups").exists());
}

#[test]
fn test_config_file_in_root() {
    let temp = create_test_project();
    let root = temp.path();
    write(
        root,
        ".txedit.toml",
        "backup_dir = \"bk\"\nexclude = [\"docs\"]\n",
    );

    // build/ is no longer excluded, docs/ is.
    run_txedit(root, &["rename", "OldWidget", "NewWidget", "--execute"])
        .success()
        .stdout(predicate::str::contains("Renamed 4 occurrences in 4 files"));

    assert_eq!(read(root, "build/gen.cpp"), "NewWidget generated;\n");
    assert_eq!(read(root, "docs/notes.md"), "OldWidget is the main type.\n");
    assert_eq!(backup_count(&root.join("bk")), 4);
}

#[test]
fn test_explicit_config_file() {
    let temp = create_test_project();
    let root = temp.path();
    let config_dir = tempfile::TempDir::new().unwrap();
    let config = config_dir.path().join("txedit.toml");
    std::fs::write(&config, "reference_pattern = \"**/*.cpp\"\n").unwrap();

    run_txedit(
        root,
        &["--config", config.to_str().unwrap(), "move", "src/util.h", "src/w.h"],
    )
    .success()
    .stdout(predicate::str::contains("updated 2 references in 2 files"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = create_test_project();
    let root = temp.path();
    write(root, ".txedit.toml", "exclude = \"build\"\n");

    run_txedit(root, &["rename", "OldWidget", "NewWidget"])
        .failure()
        .stderr(predicate::str::contains("expected an array of strings"));
}

#[test]
fn test_backups_never_scanned() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(root, &["edit", "src/main.cpp", "OldWidget", "NewWidget"]).success();

    // The backup of main.cpp still contains OldWidget but is not counted.
    run_txedit(root, &["rename", "OldWidget", "X"])
        .success()
        .stdout(predicate::str::contains("3 occurrences in 3 files"));
}
