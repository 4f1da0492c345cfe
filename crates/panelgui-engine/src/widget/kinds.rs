//! One struct per widget variant.

use serde::{Deserialize, Serialize};

use super::value::{format_number, parse_bool, HasValue, Pressable, WidgetValue};

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    clicked: bool,
    held: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            clicked: false,
            held: false,
        }
    }
}

impl HasValue for Button {
    fn value(&self) -> WidgetValue {
        WidgetValue::Bool(self.clicked)
    }

    fn write_value(&mut self, _raw: &str) -> bool {
        false
    }
}

impl Pressable for Button {
    fn press(&mut self) {
        self.held = true;
    }

    fn release(&mut self) {
        self.held = false;
    }

    fn click(&mut self) {
        self.clicked = true;
    }

    fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    fn is_held(&self) -> bool {
        self.held
    }
}

/// Range input with step 1 counted from `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: String,
    min: f64,
    max: f64,
    value: f64,
}

impl Slider {
    /// `max` below `min` collapses the range to `min`.
    pub fn new(label: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        let max = if max < min { min } else { max };
        let mut slider = Self {
            label: label.into(),
            min,
            max,
            value: min,
        };
        slider.value = slider.normalize(value);
        slider
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn current(&self) -> f64 {
        self.value
    }

    fn normalize(&self, v: f64) -> f64 {
        let clamped = v.clamp(self.min, self.max);
        let offset = clamped - self.min;
        // Ranges wider than f64::MAX overflow the offset.
        let mut snapped = if offset.is_finite() {
            self.min + offset.round()
        } else {
            clamped.round()
        };
        if snapped > self.max {
            snapped -= 1.0;
        }
        snapped.clamp(self.min, self.max) + 0.0
    }
}

impl HasValue for Slider {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(format_number(self.value))
    }

    fn write_value(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => {
                self.value = self.normalize(v);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub label: String,
    options: Vec<String>,
    selected: String,
}

impl Dropdown {
    /// The first option starts selected.
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        let selected = options.first().cloned().unwrap_or_default();
        Self {
            label: label.into(),
            options,
            selected,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl HasValue for Dropdown {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.selected.clone())
    }

    fn write_value(&mut self, raw: &str) -> bool {
        match self.options.iter().find(|o| o.as_str() == raw) {
            Some(option) => {
                self.selected = option.clone();
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

impl HasValue for Checkbox {
    fn value(&self) -> WidgetValue {
        WidgetValue::Bool(self.checked)
    }

    fn write_value(&mut self, raw: &str) -> bool {
        match parse_bool(raw) {
            Some(b) => {
                self.checked = b;
                true
            }
            None => false,
        }
    }
}

/// Role of a text label; also its snapshot tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Header,
    Footer,
    #[default]
    Text,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    pub kind: TextKind,
    pub text: String,
}

impl HasValue for TextLabel {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.text.clone())
    }

    fn write_value(&mut self, raw: &str) -> bool {
        self.text = raw.to_owned();
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub kind: InputKind,
    pub placeholder: String,
    value: String,
}

impl TextInput {
    pub fn new(kind: InputKind, placeholder: impl Into<String>) -> Self {
        Self {
            kind,
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }
}

impl HasValue for TextInput {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.value.clone())
    }

    /// Number inputs take only numeric text (or nothing at all).
    fn write_value(&mut self, raw: &str) -> bool {
        match self.kind {
            InputKind::Text => {
                self.value = raw.to_owned();
                true
            }
            InputKind::Number => {
                let trimmed = raw.trim();
                let numeric = trimmed.is_empty()
                    || trimmed.parse::<f64>().map(f64::is_finite).unwrap_or(false);
                if numeric {
                    self.value = trimmed.to_owned();
                }
                numeric
            }
        }
    }
}

/// Raw markup rendered as panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupBlock {
    pub payload: String,
}

/// Raw style payload; applied by the presentation layer, never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub payload: String,
}

/// How a sized block was created; selects its snapshot tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Empty sized container (`raw-html`).
    Raw,
    /// Sized container created with markup (`html-custom`).
    Custom,
}

/// Markup block with an explicit pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBlock {
    pub kind: BlockKind,
    pub payload: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl HasValue for MarkupBlock {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.payload.clone())
    }

    fn write_value(&mut self, raw: &str) -> bool {
        self.payload = raw.to_owned();
        true
    }
}

impl HasValue for StyleBlock {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.payload.clone())
    }

    fn write_value(&mut self, raw: &str) -> bool {
        self.payload = raw.to_owned();
        true
    }
}

impl HasValue for CustomBlock {
    fn value(&self) -> WidgetValue {
        WidgetValue::Text(self.payload.clone())
    }

    fn write_value(&mut self, raw: &str) -> bool {
        self.payload = raw.to_owned();
        true
    }
}
