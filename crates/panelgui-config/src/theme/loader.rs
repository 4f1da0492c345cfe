//! Theme resolution and loading.
//!
//! Built-in themes are compiled into the crate. Anything else is treated
//! as a YAML file, either by explicit path or by name under the config
//! directory's `themes/` folder.

use super::types::ThemeOverrides;
use panelgui_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

const MIDNIGHT_YAML: &str = include_str!("../../resources/themes/midnight.yaml");
const PAPER_YAML: &str = include_str!("../../resources/themes/paper.yaml");

fn built_in_source(name: &str) -> Option<&'static str> {
    match name {
        "midnight" => Some(MIDNIGHT_YAML),
        "paper" => Some(PAPER_YAML),
        _ => None,
    }
}

fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_theme = config_dir
            .join("panelgui")
            .join("themes")
            .join(format!("{name}.yaml"));
        if config_theme.exists() {
            return Ok(config_theme);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

fn parse_theme(source: &str, origin: &str) -> Result<ThemeOverrides, ConfigError> {
    serde_yaml::from_str(source)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse theme YAML {origin}: {e}")))
}

/// Load a theme by name.
///
/// "panelgui-green" is the default and always yields empty overrides.
pub fn load_theme(name: &str) -> Result<ThemeOverrides, ConfigError> {
    if name == "panelgui-green" {
        return Ok(ThemeOverrides {
            name: Some("panelgui-green".into()),
            ..Default::default()
        });
    }

    if let Some(source) = built_in_source(name) {
        return parse_theme(source, name);
    }

    let path = resolve_theme_path(name)?;
    load_theme_from_path(&path)
}

/// Load a theme from a specific filesystem path.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme = parse_theme(&content, &path.display().to_string())?;
    info!("loaded theme from {}", path.display());
    Ok(theme)
}
