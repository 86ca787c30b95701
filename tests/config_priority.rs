#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that command-line values take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments (or their environment variables)
//! 2. Config file
//! 3. Nothing (token is required, project is checked per command)

use lokalise_cli::config::{ConfigFile, ConfigManager, MissingSetting, ResolveOptions, resolve_config};
use std::fs;
use tempfile::TempDir;

fn config_file() -> ConfigFile {
    ConfigFile {
        token: Some("file_token".to_string()),
        project: Some("file.project".to_string()),
    }
}

#[test]
fn test_cli_token_overrides_config_token() {
    let options = ResolveOptions {
        token: Some("cli_token".to_string()),
        project: None,
    };

    let resolved = resolve_config(&options, &config_file()).unwrap();

    assert_eq!(resolved.token, "cli_token");
}

#[test]
fn test_cli_project_overrides_config_project() {
    let options = ResolveOptions {
        token: None,
        project: Some("cli.project".to_string()),
    };

    let resolved = resolve_config(&options, &config_file()).unwrap();

    assert_eq!(resolved.project().unwrap(), "cli.project");
    assert_eq!(resolved.token, "file_token");
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let resolved = resolve_config(&ResolveOptions::default(), &config_file()).unwrap();

    assert_eq!(resolved.token, "file_token");
    assert_eq!(resolved.project().unwrap(), "file.project");
}

#[test]
fn test_blank_cli_value_counts_as_missing() {
    let options = ResolveOptions {
        token: Some("   ".to_string()),
        project: None,
    };

    let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();

    assert!(err.is::<MissingSetting>());
    assert!(err.to_string().contains("--token"));
}

#[test]
fn test_missing_project_is_reported_on_use() {
    let options = ResolveOptions {
        token: Some("t".to_string()),
        project: None,
    };

    let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

    let err = resolved.project().unwrap_err();
    assert!(err.is::<MissingSetting>());
}

#[test]
fn test_explicit_config_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.cfg");
    fs::write(&path, "token = \" padded \"\nproject = \"p1\"\n").unwrap();

    let loaded = ConfigManager::new(Some(&path)).load().unwrap();
    let resolved = resolve_config(&ResolveOptions::default(), &loaded).unwrap();

    assert_eq!(resolved.token, "padded");
    assert_eq!(resolved.project().unwrap(), "p1");
}
