//! Single-file edit tests

mod common;

use common::*;

use predicates::prelude::*;

#[test]
fn test_edit_first_occurrence_by_default() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "foo bar foo baz");

    run_txedit(root, &["edit", "a.txt", "foo", "qux"])
        .success()
        .stdout(predicate::str::contains("Successfully edited a.txt"));

    assert_eq!(read(root, "a.txt"), "qux bar foo baz");
}

#[test]
fn test_edit_nth_occurrence() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "foo bar foo baz");

    run_txedit(root, &["edit", "a.txt", "foo", "qux", "--occurrence", "2"]).success();

    assert_eq!(read(root, "a.txt"), "foo bar qux baz");
}

#[test]
fn test_edit_all_occurrences() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "foo bar foo baz");

    run_txedit(root, &["edit", "a.txt", "foo", "qux", "--all"]).success();

    assert_eq!(read(root, "a.txt"), "qux bar qux baz");
    assert_eq!(backup_count(&root.join(".txedit_backups")), 1);
}

#[test]
fn test_edit_missing_pattern_fails_without_writing() {
    let temp = create_test_project();
    let root = temp.path();
    let before = read(root, "src/main.cpp");

    run_txedit(root, &["edit", "src/main.cpp", "NoSuchThing", "x"])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Pattern not found"));

    assert_eq!(read(root, "src/main.cpp"), before);
}

#[test]
fn test_edit_occurrence_out_of_range() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    write(root, "a.txt", "foo foo");

    run_txedit(root, &["edit", "a.txt", "foo", "x", "--occurrence", "3"])
        .failure()
        .stderr(predicate::str::contains("occurrence 3, found 2"));

    assert_eq!(read(root, "a.txt"), "foo foo");
}

#[test]
fn test_edit_missing_file() {
    let temp = tempfile::TempDir::new().unwrap();

    run_txedit(temp.path(), &["edit", "nope.txt", "a", "b"])
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_all_conflicts_with_occurrence() {
    let temp = tempfile::TempDir::new().unwrap();
    write(temp.path(), "a.txt", "foo");

    run_txedit(temp.path(), &["edit", "a.txt", "foo", "x", "--all", "--occurrence", "1"])
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert_eq!(read(temp.path(), "a.txt"), "foo");
}
