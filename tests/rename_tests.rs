//! Project-wide rename tests (preview and execute)

mod common;

use common::*;

use predicates::prelude::*;

#[test]
fn test_preview_does_not_modify() {
    let temp = create_test_project();
    let root = temp.path();
    let before = read(root, "src/util.h");

    run_txedit(root, &["rename", "OldWidget", "NewWidget"])
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Would rename 'OldWidget' to 'NewWidget':"))
        .stdout(predicate::str::contains("4 occurrences in 4 files"))
        .stdout(predicate::str::contains("src/util.h: 1 occurrence"))
        .stdout(predicate::str::contains("build/gen.cpp").not());

    assert_eq!(read(root, "src/util.h"), before);
    assert!(!root.join(".txedit_backups").exists());
}

#[test]
fn test_execute_renames_whole_identifiers() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(
        root,
        &["rename", "OldWidget", "NewWidget", "--pattern", "**/*.{cpp,h}", "--execute"],
    )
    .success()
    .stdout(predicate::str::contains("Renamed 3 occurrences in 3 files"));

    let header = read(root, "src/util.h");
    assert!(header.contains("class NewWidget {"));
    assert!(header.contains("class OldWidgetFactory {}"));
    assert!(read(root, "src/util.cpp").contains("int NewWidget::run()"));
    assert!(read(root, "src/main.cpp").contains("NewWidget w;"));

    // Outside the pattern, and in an excluded directory.
    assert_eq!(read(root, "docs/notes.md"), "OldWidget is the main type.\n");
    assert_eq!(read(root, "build/gen.cpp"), "OldWidget generated;\n");

    assert_eq!(backup_count(&root.join(".txedit_backups")), 3);
}

#[test]
fn test_literal_mode_renames_substrings() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(
        root,
        &[
            "rename",
            "OldWidget",
            "NewWidget",
            "--pattern",
            "src/*.h",
            "--mode",
            "literal",
            "--execute",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Renamed 2 occurrences in 1 file"));

    assert!(read(root, "src/util.h").contains("class NewWidgetFactory {}"));
}

#[test]
fn test_preview_and_execute_agree() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(root, &["rename", "run", "start", "--pattern", "src/**"])
        .success()
        .stdout(predicate::str::contains("3 occurrences in 3 files"));

    run_txedit(root, &["rename", "run", "start", "--pattern", "src/**", "--execute"])
        .success()
        .stdout(predicate::str::contains("Renamed 3 occurrences in 3 files"));

    assert!(read(root, "src/main.cpp").contains("return w.start();"));
}

#[test]
fn test_rename_rejects_escaping_pattern() {
    let temp = create_test_project();

    run_txedit(temp.path(), &["rename", "OldWidget", "X", "--pattern", "../**"])
        .failure()
        .stderr(predicate::str::contains("outside the project root"));
}
