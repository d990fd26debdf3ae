mod common;

use common::NoteboardTest;
use noteboard::config::{CONFIG_DIR_ENV, Config};
use serial_test::serial;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let nb = NoteboardTest::new();

    let output = nb.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("https://notes-api.dicoding.dev/v2"));
    assert!(output.contains("timeout: 30s"));
    assert!(output.contains("title: Notes App"));
}

#[test]
fn test_config_show_json() {
    let nb = NoteboardTest::new();

    let output = nb.run_success(&["config", "show", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["api"]["timeout"], 30);
    assert_eq!(value["ui"]["empty_message"], "No notes found");
}

#[test]
fn test_config_set_then_get() {
    let nb = NoteboardTest::new();

    nb.run_success(&["config", "set", "api.base_url", "http://localhost:5000/v2/"]);
    let output = nb.run_success(&["config", "get", "api.base_url"]);
    assert_eq!(output.trim(), "http://localhost:5000/v2");
}

#[test]
fn test_config_file_created() {
    let nb = NoteboardTest::new();

    nb.run_success(&["config", "set", "ui.title", "Team Notes"]);

    let config_path = nb.config_path();
    assert!(config_path.exists(), "Config file should be created");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("Team Notes"));
}

#[test]
fn test_config_set_invalid_key() {
    let nb = NoteboardTest::new();

    let stderr = nb.run_failure(&["config", "set", "invalid.key", "value"]);
    assert!(stderr.contains("unknown config key"));
    assert!(!nb.config_path().exists());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let nb = NoteboardTest::new();

    let stderr = nb.run_failure(&["config", "set", "api.timeout", "soon"]);
    assert!(stderr.contains("api.timeout"));

    let stderr = nb.run_failure(&["config", "set", "api.base_url", "ftp://example.com"]);
    assert!(stderr.contains("http"));

    nb.run_failure(&["config", "set", "ui.title", "  "]);
}

#[test]
fn test_config_get_json() {
    let nb = NoteboardTest::new();

    let output = nb.run_success(&["config", "get", "api.timeout", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["key"], "api.timeout");
    assert_eq!(value["value"], "30");
}

#[test]
fn test_malformed_config_file_fails() {
    let nb = NoteboardTest::new();
    fs::write(nb.config_path(), "api: [not, a, mapping").unwrap();

    let stderr = nb.run_failure(&["config", "show"]);
    assert!(stderr.contains("YAML"));
}

#[test]
fn test_zero_timeout_in_config_file_fails() {
    let nb = NoteboardTest::new();
    fs::write(nb.config_path(), "api:\n  timeout: 0\n").unwrap();

    let stderr = nb.run_failure(&["config", "show"]);
    assert!(stderr.contains("api.timeout must be at least 1 second"));
}

// ============================================================================
// In-process loading
// ============================================================================

#[test]
#[serial]
fn test_config_load_and_save_in_dir_from_env() {
    let dir = tempfile::TempDir::new().unwrap();
    // SAFETY: serialized with every other test that touches the environment
    unsafe { std::env::set_var(CONFIG_DIR_ENV, dir.path()) };

    assert_eq!(Config::load().unwrap(), Config::default());

    let mut config = Config::default();
    config.set("api.timeout", "5").unwrap();
    config.save().unwrap();
    assert_eq!(Config::load().unwrap().api.timeout, 5);
    assert_eq!(Config::config_path(), dir.path().join("config.yaml"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(Config::config_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
}
