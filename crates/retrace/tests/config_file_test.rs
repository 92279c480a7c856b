//! Tests for loading configuration files from disk.

use retrace::Config;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "side = 3\nsort_descending = true").expect("write config");

    let config = Config::from_file(file.path()).expect("valid config");

    assert_eq!(*config.side(), 3);
    assert!(*config.sort_descending());
    assert_eq!(config.log_file(), &PathBuf::from("retrace.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();

    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(Config::load(None).expect("defaults"), Config::default());
}
