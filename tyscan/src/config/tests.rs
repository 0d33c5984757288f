#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::tempdir;

use super::Config;

#[test]
fn test_defaults_when_no_file_exists() {
    let dir = tempdir().unwrap();
    let config = Config::load_from_path(dir.path());
    assert!(config.config_file_path.is_none());
    assert!(config.tyscan.alias.allow_destructuring);
    assert!(config.tyscan.alias.allowed_names.is_empty());
    assert!(config.tyscan.no_this_alias.is_none());
}

#[test]
fn test_loads_options_from_tyscan_toml() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tyscan.toml"),
        r#"
[tyscan]
require_await = false

[tyscan.alias]
allow_destructuring = false
allowed_names = ["self", "that"]
"#,
    )
    .unwrap();

    let config = Config::load_from_path(dir.path());
    assert_eq!(config.tyscan.require_await, Some(false));
    assert!(!config.tyscan.alias.allow_destructuring);
    assert_eq!(config.tyscan.alias.allowed_names, vec!["self", "that"]);
    assert!(config.config_file_path.is_some());
}

#[test]
fn test_traverses_up_to_ancestor_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("tyscan.toml"),
        "[tyscan.alias]\nallowed_names = [\"self\"]\n",
    )
    .unwrap();
    let nested = dir.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let config = Config::load_from_path(&nested);
    assert_eq!(config.tyscan.alias.allowed_names, vec!["self"]);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tyscan.toml"), "not valid toml [[").unwrap();

    let config = Config::load_from_path(dir.path());
    assert!(config.config_file_path.is_none());
    assert!(config.tyscan.alias.allow_destructuring);
}
