use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;
use weatherdash::api::DEFAULT_API_URL;
use weatherdash::{initialize, Config, Theme, DEFAULT_TRACE_LEVEL};

fn zellij_config(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_empty_configuration_uses_defaults() {
    let config = Config::from_zellij(&BTreeMap::new());

    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.trace_level, DEFAULT_TRACE_LEVEL);
    assert!(config.theme_name.is_none());
    assert!(config.theme_file.is_none());
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = Config::from_zellij(&zellij_config(&[
        ("api_url", "   "),
        ("theme", ""),
        ("trace_level", " "),
    ]));

    assert_eq!(config, Config::default());
}

#[test]
fn test_values_are_trimmed_and_kept() {
    let config = Config::from_zellij(&zellij_config(&[
        ("api_url", " http://weather.internal:8080/ "),
        ("theme", "catppuccin-latte"),
        ("trace_level", "weatherdash=debug"),
        ("unrelated", "ignored"),
    ]));

    assert_eq!(config.api_url, "http://weather.internal:8080/");
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.trace_level, "weatherdash=debug");
}

#[test]
fn test_initialize_points_client_at_configured_backend() {
    let config = Config::from_zellij(&zellij_config(&[("api_url", "http://weather.internal:8080/")]));
    let state = initialize(&config);

    assert_eq!(state.api.base_url(), "http://weather.internal:8080");
    assert!(!state.mounted);
    assert!(state.cities.is_empty());
    assert!(state.health.is_none());
}

#[test]
fn test_builtin_theme_is_selected_by_name() {
    let config = Config {
        theme_name: Some("catppuccin-frappe".to_string()),
        ..Config::default()
    };

    assert_eq!(config.load_theme().name, "catppuccin-frappe");
}

#[test]
fn test_unknown_theme_name_falls_back_to_default() {
    let config = Config {
        theme_name: Some("solarized".to_string()),
        ..Config::default()
    };

    assert_eq!(config.load_theme(), Theme::default());
}

#[test]
fn test_theme_file_takes_precedence_over_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    let mut custom = Theme::from_name("catppuccin-latte").unwrap();
    custom.name = "custom".to_string();
    custom.colors.error_fg = "#ff0000".to_string();
    fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

    let config = Config {
        theme_name: Some("catppuccin-frappe".to_string()),
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };

    assert_eq!(config.load_theme(), custom);
}

#[test]
fn test_broken_theme_file_falls_back_to_named_theme() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"broken\"\n[colors]\nheader_fg = 42\n").unwrap();

    let config = Config {
        theme_name: Some("catppuccin-macchiato".to_string()),
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };

    assert!(Theme::from_file(&path).is_err());
    assert_eq!(config.load_theme().name, "catppuccin-macchiato");
}

#[test]
fn test_missing_theme_file_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        theme_file: Some(dir.path().join("nope.toml").to_string_lossy().into_owned()),
        ..Config::default()
    };

    assert_eq!(config.load_theme(), Theme::default());
}
