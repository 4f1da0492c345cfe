//! Theme override types and the list of built-in themes.

use serde::{Deserialize, Serialize};

/// Built-in theme names.
pub const BUILT_IN_THEMES: &[&str] = &["panelgui-green", "midnight", "paper"];

/// Theme override structure.
///
/// All fields are optional; only present fields override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub name: Option<String>,
    pub style: Option<ThemeStyleOverrides>,
}

/// Optional panel color overrides in a theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeStyleOverrides {
    pub header_bg: Option<String>,
    pub body_text: Option<String>,
    pub header_text: Option<String>,
    pub body_bg: Option<String>,
}
