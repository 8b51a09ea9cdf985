use super::FileUtils;
use crate::error::HistoryError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn expand_path_expands_home() {
    let home = dirs::home_dir().expect("home dir");
    let path = FileUtils::expand_path("~/history-exports").expect("expanded");
    assert_eq!(path, home.join("history-exports"));
}

#[test]
fn expand_path_expands_bare_tilde() {
    let home = dirs::home_dir().expect("home dir");
    assert_eq!(FileUtils::expand_path("~").expect("expanded"), home);
}

#[test]
fn expand_path_leaves_non_tilde_unchanged() {
    let path = FileUtils::expand_path("/tmp/exports").expect("expanded");
    assert_eq!(path, PathBuf::from("/tmp/exports"));
    let path = FileUtils::expand_path("~someone/exports").expect("expanded");
    assert_eq!(path, PathBuf::from("~someone/exports"));
}

#[test]
fn check_output_dir_validates_paths() {
    let temp = tempdir().expect("tempdir");
    FileUtils::check_output_dir(temp.path()).expect("existing dir");
    FileUtils::check_output_dir(&temp.path().join("new")).expect("missing dir");

    let file_path = temp.path().join("file.txt");
    fs::write(&file_path, "data").expect("write file");
    let err = FileUtils::check_output_dir(&file_path).expect_err("file path");
    assert!(matches!(err, HistoryError::Config(_)));
}
