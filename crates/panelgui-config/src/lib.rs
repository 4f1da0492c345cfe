//! PanelGUI configuration system.
//!
//! Provides TOML-based configuration with theme support and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use panelgui_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::{PanelGuiConfig, CONFIG_SCHEMA_VERSION};
pub use theme::{ThemeOverrides, BUILT_IN_THEMES};

use panelgui_common::ConfigError;
use std::path::Path;

/// Load, theme, and validate the configuration.
///
/// With `path` set the file must exist. Without it, `config.toml` is read
/// from the OS config directory and a default one is created if missing.
pub fn load_config(path: Option<&Path>) -> Result<PanelGuiConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    if config.theme.name != "panelgui-green" {
        match theme::load_theme(&config.theme.name) {
            Ok(overrides) => theme::apply_theme(&mut config, &overrides),
            Err(e) => {
                tracing::warn!("failed to load theme '{}': {e}", config.theme.name);
            }
        }
    }

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PanelGuiConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PanelGuiConfig::default());
        for section in ["theme", "container", "panel", "style", "widgets", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
        assert!(json.contains("\"panelgui-green\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&PanelGuiConfig::default());
        let parsed: PanelGuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme.name, "panelgui-green");
        assert_eq!(parsed.style.header_bg, "#2ecc71");
        assert_eq!(parsed.panel.z_base, 10_000);
    }

    #[test]
    fn load_config_applies_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"midnight\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.style.header_bg, "#1e1e2e");
    }

    #[test]
    fn load_config_unknown_theme_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nname = \"no-such-theme-here\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.style.header_bg, "#2ecc71");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[container]\nwidth = 5\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_missing_explicit_path_fails() {
        let err = load_config(Some(Path::new("/nonexistent/panelgui.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
