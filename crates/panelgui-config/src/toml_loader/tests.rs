//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_panelgui_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        panelgui_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[container]
width = 1024
height = 768

[style]
header_bg = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.container.width, 1024);
    assert_eq!(config.container.height, 768);
    assert_eq!(config.style.header_bg, "#ff0000");
    // Defaults preserved
    assert_eq!(config.style.body_bg, "#fff");
    assert_eq!(config.theme.name, "panelgui-green");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, panelgui_common::ConfigError::ParseError(_)));
}

#[test]
fn load_from_path_leaves_validation_to_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[container]\nwidth = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.container.width, 5);
    assert!(crate::load_config(Some(&path)).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panelgui").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "panelgui-green");
    assert_eq!(config.panel.width, 320);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::PanelGuiConfig;

    let config: PanelGuiConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.theme.name, "panelgui-green");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("panelgui"));
        assert!(path_str.ends_with("config.toml"));
    }
}
