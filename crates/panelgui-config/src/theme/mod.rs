//! Style themes: YAML files overriding the default panel colors.

mod apply;
mod loader;
mod types;

pub use apply::apply_theme;
pub use loader::{load_theme, load_theme_from_path};
pub use types::{ThemeOverrides, ThemeStyleOverrides, BUILT_IN_THEMES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PanelGuiConfig;
    use crate::validation;

    #[test]
    fn default_theme_has_no_overrides() {
        let theme = load_theme("panelgui-green").unwrap();
        assert_eq!(theme.name, Some("panelgui-green".into()));
        assert!(theme.style.is_none());
    }

    #[test]
    fn every_built_in_theme_loads_and_validates() {
        for name in BUILT_IN_THEMES {
            let theme = load_theme(name).unwrap();
            let mut config = PanelGuiConfig::default();
            apply_theme(&mut config, &theme);
            assert!(validation::validate(&config).is_ok(), "theme {name}");
        }
    }

    #[test]
    fn midnight_overrides_every_color() {
        let mut config = PanelGuiConfig::default();
        apply_theme(&mut config, &load_theme("midnight").unwrap());
        assert_eq!(config.style.header_bg, "#1e1e2e");
        assert_eq!(config.style.body_bg, "#181825");
    }

    #[test]
    fn partial_theme_keeps_other_colors() {
        let mut config = PanelGuiConfig::default();
        apply_theme(&mut config, &load_theme("paper").unwrap());
        assert_eq!(config.style.header_bg, "#e8e4d9");
        // paper leaves the body background alone
        assert_eq!(config.style.body_bg, "#fff");
    }

    #[test]
    fn apply_empty_theme_changes_nothing() {
        let mut config = PanelGuiConfig::default();
        apply_theme(&mut config, &ThemeOverrides::default());
        assert_eq!(config.style.header_bg, "#2ecc71");
    }

    #[test]
    fn load_theme_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(
            &path,
            r##"
name: custom
style:
  header_bg: "#ff00ff"
"##,
        )
        .unwrap();

        let theme = load_theme(path.to_str().unwrap()).unwrap();
        assert_eq!(theme.name, Some("custom".into()));
        assert_eq!(
            theme.style.unwrap().header_bg,
            Some("#ff00ff".to_string())
        );
    }

    #[test]
    fn malformed_theme_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "style: [not, a, map").unwrap();
        let err = load_theme_from_path(&path).unwrap_err();
        assert!(matches!(err, panelgui_common::ConfigError::ParseError(_)));
    }

    #[test]
    fn nonexistent_theme_returns_error() {
        assert!(load_theme("definitely-not-a-real-theme-name").is_err());
    }
}
