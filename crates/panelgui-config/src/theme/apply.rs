//! Theme application: merge present overrides into a config.

use super::types::ThemeOverrides;
use crate::schema::PanelGuiConfig;

pub fn apply_theme(config: &mut PanelGuiConfig, theme: &ThemeOverrides) {
    let Some(ref style) = theme.style else {
        return;
    };
    if let Some(ref c) = style.header_bg {
        config.style.header_bg = c.clone();
    }
    if let Some(ref c) = style.body_text {
        config.style.body_text = c.clone();
    }
    if let Some(ref c) = style.header_text {
        config.style.header_text = c.clone();
    }
    if let Some(ref c) = style.body_bg {
        config.style.body_bg = c.clone();
    }
}
