//! Integration tests for txedit
//!
//! These tests build small project trees on disk and drive them through the
//! `txedit` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a small C++ project:
///
/// ```text
/// src/main.cpp     includes "util.h" and calls OldWidget
/// src/util.h       declares OldWidget and OldWidgetFactory
/// src/util.cpp     defines OldWidget
/// docs/notes.md    mentions OldWidget
/// build/gen.cpp    generated, excluded by default
/// ```
#[allow(unused)]
pub fn create_test_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    write(
        temp.path(),
        "src/main.cpp",
        "#include \"util.h\"\n\nint main() {\n    OldWidget w;\n    return w.run();\n}\n",
    );
    write(
        temp.path(),
        "src/util.h",
        "#pragma once\n\nclass OldWidget {\npublic:\n    int run();\n};\n\nclass OldWidgetFactory {};\n",
    );
    write(
        temp.path(),
        "src/util.cpp",
        "#include \"util.h\"\n\nint OldWidget::run() { return 0; }\n",
    );
    write(temp.path(), "docs/notes.md", "OldWidget is the main type.\n");
    write(temp.path(), "build/gen.cpp", "OldWidget generated;\n");

    temp
}

#[allow(unused)]
pub fn write(root: &Path, file: &str, content: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read(root: &Path, file: &str) -> String {
    fs::read_to_string(root.join(file)).unwrap()
}

/// Number of backup files in `dir`, or 0 if it does not exist.
#[allow(unused)]
pub fn backup_count(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Helper to run txedit against `root`
pub fn run_txedit(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("txedit");
    cmd.arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("TXEDIT_BACKUP_DIR")
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
