//! Color-spec checks for configured panel styles.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
//! Plain words (`white`, `transparent`) are accepted as named colors
//! without being decoded; the presentation layer owns their meaning.

mod parse;


use panelgui_common::types::Color;
use panelgui_common::ConfigError;

use parse::{parse_hex, parse_rgba, NAMED_RE};

/// Decode a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        if let Some(color) = parse_rgba(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether a string is a color spec the presentation layer can use.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    NAMED_RE.is_match(s) || parse_color(s).is_ok()
}
