//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = PanelGuiConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_container_too_small() {
    let mut config = PanelGuiConfig::default();
    config.container.width = 50;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("container.width"));
}

#[test]
fn catches_panel_below_minimum() {
    let mut config = PanelGuiConfig::default();
    config.panel.height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panel.height"));
}

#[test]
fn catches_negative_panel_origin() {
    let mut config = PanelGuiConfig::default();
    config.panel.x = -5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("panel.x"));
}

#[test]
fn catches_bad_style_color() {
    let mut config = PanelGuiConfig::default();
    config.style.header_bg = "#zzz".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("style.header_bg"));
}

#[test]
fn accepts_named_and_rgba_colors() {
    let mut config = PanelGuiConfig::default();
    config.style.body_bg = "white".into();
    config.style.header_bg = "rgba(0,0,0,0.5)".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_inverted_slider_range() {
    let mut config = PanelGuiConfig::default();
    config.widgets.slider_min = 10.0;
    config.widgets.slider_max = 1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("widgets.slider_min"));
}

#[test]
fn catches_empty_dropdown_options() {
    let mut config = PanelGuiConfig::default();
    config.widgets.dropdown_options = vec!["  ".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("dropdown_options"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PanelGuiConfig::default();
    config.container.height = 1;
    config.style.body_text = "".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("container.height"));
    assert!(err.contains("style.body_text"));
    assert!(err.contains("; "));
}
