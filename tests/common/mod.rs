//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Get the path to the testdata directory
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Read a file from testdata/snippets
pub fn read_snippet(name: &str) -> String {
    let path = testdata_dir().join("snippets").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Copy the sample project into a fresh temporary directory so tests can
/// rewrite it freely
pub fn copy_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    copy_dir(&testdata_dir().join("project"), dir.path());
    dir
}

fn copy_dir(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let relative = entry.path().strip_prefix(from).expect("entry is under root");
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).expect("Failed to create dir");
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy file");
        }
    }
}

/// Path to the compiled `yoda` binary
pub fn yoda_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_yoda"))
}
