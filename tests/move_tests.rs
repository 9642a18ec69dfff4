//! File move tests (with and without reference updates)

mod common;

use common::*;

use predicates::prelude::*;

#[test]
fn test_move_updates_includes() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(root, &["move", "src/util.h", "include/core/helpers.h"])
        .success()
        .stdout(predicate::str::contains(
            "Moved src/util.h to include/core/helpers.h; updated 2 references in 2 files",
        ))
        .stdout(predicate::str::contains("src/util.h → include/core/helpers.h"));

    assert!(!root.join("src/util.h").exists());
    assert!(read(root, "include/core/helpers.h").contains("class OldWidget"));
    assert!(read(root, "src/main.cpp").starts_with("#include \"helpers.h\"\n"));
    assert!(read(root, "src/util.cpp").starts_with("#include \"helpers.h\"\n"));
}

#[test]
fn test_move_no_update() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(root, &["move", "src/util.h", "src/helpers.h", "--no-update"])
        .success()
        .stdout(predicate::str::contains("Moved src/util.h to src/helpers.h"))
        .stdout(predicate::str::contains("updated").not());

    assert!(root.join("src/helpers.h").exists());
    assert!(read(root, "src/main.cpp").starts_with("#include \"util.h\"\n"));
}

#[test]
fn test_move_keeps_directory_prefix_of_reference() {
    let temp = create_test_project();
    let root = temp.path();
    write(root, "app/app.cpp", "#include \"../src/util.h\"\n#include <util.h>\n");

    run_txedit(root, &["move", "src/util.h", "src/widget.h"]).success();

    assert_eq!(
        read(root, "app/app.cpp"),
        "#include \"../src/widget.h\"\n#include <util.h>\n"
    );
}

#[test]
fn test_move_missing_source() {
    let temp = create_test_project();

    run_txedit(temp.path(), &["move", "src/missing.h", "src/other.h"])
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_move_refuses_existing_destination() {
    let temp = create_test_project();
    let root = temp.path();

    run_txedit(root, &["move", "src/util.h", "src/util.cpp"])
        .failure()
        .stderr(predicate::str::contains("Destination already exists"));

    assert!(read(root, "src/util.h").contains("#pragma once"));
    assert!(read(root, "src/util.cpp").contains("int OldWidget::run()"));
}
