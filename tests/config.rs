use codes::config::{AppConfig, ConfigManager, ConfigSection, CountdownConfig};
use codes::CodesError;
use std::collections::HashMap;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_layered_defaults_without_sources() {
    let manager = ConfigManager::new();
    manager.load_layered_with_env(None, env(&[])).unwrap();
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codes.toml");
    std::fs::write(&path, "[countdown]\nstart = 5\ndelay_ms = 0\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_layered_with_env(Some(path.as_path()), env(&[])).unwrap();

    let config = manager.get();
    assert_eq!(config.countdown, CountdownConfig { start: 5, end: 0, delay_ms: 0 });
    assert_eq!(config.find_dups.separator, ", ");
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codes.toml");
    std::fs::write(&path, "[countdown]\ndelay_ms = 500\n").unwrap();

    let manager = ConfigManager::new();
    manager
        .load_layered_with_env(
            Some(path.as_path()),
            env(&[("CODES_COUNTDOWN__DELAY_MS", "0"), ("CODES_FIND_DUPS__SEPARATOR", "/")]),
        )
        .unwrap();

    let config = manager.get();
    assert_eq!(config.countdown.delay_ms, 0);
    assert_eq!(config.find_dups.separator, "/");
}

#[test]
fn test_invalid_layered_config_keeps_previous() {
    let manager = ConfigManager::new();
    let result = manager.load_layered_with_env(
        None,
        env(&[("CODES_COUNTDOWN__START", "-1"), ("CODES_COUNTDOWN__END", "3")]),
    );
    assert!(matches!(result, Err(CodesError::Configuration(_))));
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new();
    let missing = dir.path().join("absent.toml");
    let result = manager.load_layered_with_env(Some(missing.as_path()), env(&[]));
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let manager = ConfigManager::new();
    manager.update(|c| c.countdown.delay_ms = 20).unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get().countdown.delay_ms, 20);
}

#[test]
fn test_rejected_update_is_discarded() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.find_dups.separator = "\n".to_string());
    assert!(result.is_err());
    assert_eq!(manager.get().find_dups.separator, ", ");
}

#[test]
fn test_section_names() {
    assert_eq!(CountdownConfig::section_name(), "countdown");
    assert_eq!(codes::config::FindDupsConfig::section_name(), "find_dups");
}
