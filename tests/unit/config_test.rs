//! Tests for configuration loading and environment overrides

use std::fs;

use relcheck::config::{Config, CONFIG_FILE, DEFAULT_LABEL};
use serial_test::serial;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "RELCHECK_GITLAB_HOST",
    "RELCHECK_GITLAB_TOKEN",
    "RELCHECK_GITLAB_PROJECT_ID",
    "RELCHECK_LABEL",
];

fn clear_env() {
    for var in ENV_VARS {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(var) };
    }
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
}

const MINIMAL: &str = r#"
[gitlab]
host = "https://gitlab.example.com"
project_id = 42
"#;

#[test]
#[serial]
fn minimal_config_gets_default_label() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, MINIMAL);

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.gitlab.host, "https://gitlab.example.com");
    assert_eq!(config.gitlab.project_id, 42);
    assert_eq!(config.gitlab.token, None);
    assert_eq!(config.checklist.label, DEFAULT_LABEL);
}

#[test]
#[serial]
fn explicit_label_overrides_default() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
[gitlab]
host = "https://gitlab.example.com"
project_id = 42

[checklist]
label = "Go-live checklist"
"#,
    );

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.checklist.label, "Go-live checklist");
}

#[test]
#[serial]
fn env_vars_override_file_values() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, MINIMAL);

    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::set_var("RELCHECK_GITLAB_HOST", "https://gitlab.internal");
        std::env::set_var("RELCHECK_GITLAB_TOKEN", "secret");
        std::env::set_var("RELCHECK_GITLAB_PROJECT_ID", "7");
        std::env::set_var("RELCHECK_LABEL", "Release gate");
    }

    let config = Config::load(dir.path()).unwrap();
    clear_env();

    assert_eq!(config.gitlab.host, "https://gitlab.internal");
    assert_eq!(config.gitlab.token.as_deref(), Some("secret"));
    assert_eq!(config.gitlab.project_id, 7);
    assert_eq!(config.checklist.label, "Release gate");
}

#[test]
#[serial]
fn non_numeric_project_id_env_is_rejected() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, MINIMAL);

    // SAFETY: tests touching the environment are serialized
    unsafe { std::env::set_var("RELCHECK_GITLAB_PROJECT_ID", "not-a-number") };
    let result = Config::load(dir.path());
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
#[serial]
fn invalid_toml_is_an_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, "not valid toml [");
    assert!(Config::load(dir.path()).is_err());
}

#[test]
#[serial]
fn sample_config_parses() {
    clear_env();
    let dir = TempDir::new().unwrap();
    write_config(&dir, Config::sample());

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.checklist.label, DEFAULT_LABEL);
    assert_eq!(config.gitlab.project_id, 1);
}
