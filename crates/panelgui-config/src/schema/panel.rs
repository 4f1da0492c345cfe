//! Defaults applied to implicitly created panels.

use serde::{Deserialize, Serialize};

/// Initial geometry and chrome for a newly created panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Initial left offset in pixels (valid range: 0-10000).
    pub x: i32,
    /// Initial top offset in pixels (valid range: 0-10000).
    pub y: i32,
    /// Initial width in pixels (valid range: 120-10000).
    pub width: u32,
    /// Initial height in pixels (valid range: 80-10000).
    pub height: u32,
    /// First z-order value handed out.
    pub z_base: u64,
    /// Whether new panels show the close button.
    pub show_close_button: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            x: 120,
            y: 120,
            width: 320,
            height: 220,
            z_base: 10_000,
            show_close_button: true,
        }
    }
}

/// Default panel colors. Values are passed to the presentation layer verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub header_bg: String,
    pub body_text: String,
    pub header_text: String,
    pub body_bg: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            header_bg: "#2ecc71".into(),
            body_text: "#222".into(),
            header_text: "#fff".into(),
            body_bg: "#fff".into(),
        }
    }
}
