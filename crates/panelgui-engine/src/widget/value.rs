//! Widget values and the capability traits shared across variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current value of a widget as reported to callers.
///
/// Buttons and checkboxes report booleans; everything else is text.
/// Serialized untagged, so a snapshot shows `true` or `"50"` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for WidgetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetValue::Bool(b) => write!(f, "{b}"),
            WidgetValue::Text(s) => f.write_str(s),
        }
    }
}

impl Default for WidgetValue {
    fn default() -> Self {
        WidgetValue::Text(String::new())
    }
}

/// A widget with a readable and (usually) writable value.
pub trait HasValue {
    /// Current value. Never consumes anything.
    fn value(&self) -> WidgetValue;

    /// Replace the value from loosely typed text. Returns `false` and
    /// leaves the widget untouched when the text is not acceptable.
    fn write_value(&mut self, raw: &str) -> bool;
}

/// A widget with press/click state.
pub trait Pressable {
    fn press(&mut self);
    fn release(&mut self);
    /// A completed click: sets the read-once clicked flag.
    fn click(&mut self);
    /// Read and reset the clicked flag.
    fn take_clicked(&mut self) -> bool;
    /// Live pressed state; reading does not reset it.
    fn is_held(&self) -> bool;
}

/// Format a number the way sliders and number inputs report it:
/// integral values without a fractional part, and never `-0`.
pub(crate) fn format_number(n: f64) -> String {
    format!("{}", n + 0.0)
}

/// Loose boolean parsing for checkbox writes.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
