//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use stylepad::config::EditorConfig;
use stylepad::config_paths;
use stylepad::editable::MarkupMode;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("stylepad"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.markup_mode, MarkupMode::Literal);
    assert_eq!(config.history_limit, None);
    assert!(!config.restore_style_on_undo);
}

#[test]
fn test_config_serialize_deserialize() {
    let config = EditorConfig {
        markup_mode: MarkupMode::Canonical,
        history_limit: Some(50),
        restore_style_on_undo: true,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("markup_mode: canonical"));

    let parsed: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let parsed: EditorConfig = serde_yaml::from_str("history_limit: 5\n").unwrap();
    assert_eq!(parsed.history_limit, Some(5));
    assert_eq!(parsed.markup_mode, MarkupMode::Literal);
    assert!(!parsed.restore_style_on_undo);
}

#[test]
fn test_save_then_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        markup_mode: MarkupMode::Canonical,
        ..EditorConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_invalid_yaml_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "markup_mode: [not, a, mode]\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}
