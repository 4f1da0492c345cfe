//! Creation parameters and the fallbacks used when they are empty.

use panelgui_common::ElementId;
use serde::{Deserialize, Serialize};

use super::kinds::{
    BlockKind, Button, Checkbox, CustomBlock, Dropdown, InputKind, MarkupBlock, Slider,
    StyleBlock, TextInput, TextKind, TextLabel,
};
use super::Widget;

/// Which sized block `WidgetSpec::Raw` creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    #[default]
    #[serde(alias = "HTML")]
    Html,
    #[serde(alias = "CSS")]
    Css,
}

/// Loosely typed creation request, as a visual front end sends it.
///
/// Missing or blank fields fall back to [`WidgetDefaults`]. Non-finite
/// numbers are treated as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSpec {
    Button {
        #[serde(default)]
        label: String,
    },
    Slider {
        #[serde(default)]
        label: String,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        default: Option<f64>,
    },
    Dropdown {
        #[serde(default)]
        label: String,
        /// Comma-separated option text.
        #[serde(default)]
        options: String,
    },
    Checkbox {
        #[serde(default)]
        label: String,
        #[serde(default)]
        checked: bool,
    },
    Text {
        #[serde(default)]
        style: TextKind,
        #[serde(default)]
        text: String,
    },
    Input {
        #[serde(default)]
        input: InputKind,
        #[serde(default)]
        placeholder: String,
    },
    Html {
        #[serde(default)]
        html: String,
    },
    Raw {
        #[serde(default)]
        block: RawKind,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    Custom {
        #[serde(default)]
        html: String,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
}

/// Fallback values for blank creation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDefaults {
    pub button_label: String,
    pub slider_label: String,
    pub slider_min: f64,
    pub slider_max: f64,
    pub dropdown_label: String,
    pub dropdown_options: Vec<String>,
    pub checkbox_label: String,
    pub text_placeholder: String,
    pub number_placeholder: String,
    pub markup: String,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            button_label: "Button".into(),
            slider_label: "Slider".into(),
            slider_min: 0.0,
            slider_max: 100.0,
            dropdown_label: "Choose".into(),
            dropdown_options: vec!["Option 1".into(), "Option 2".into()],
            checkbox_label: "Check".into(),
            text_placeholder: "Type...".into(),
            number_placeholder: "0".into(),
            markup: "<b>HTML</b>".into(),
        }
    }
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}

fn finite(n: Option<f64>) -> Option<f64> {
    n.filter(|v| v.is_finite())
}

/// Keep a block dimension only when it is a positive finite number.
fn dimension(n: Option<f64>) -> Option<u32> {
    finite(n)
        .filter(|v| *v > 0.0)
        .map(|v| v.round().min(f64::from(u32::MAX)) as u32)
        .filter(|v| *v > 0)
}

/// Split comma-separated option text, dropping blank entries.
pub fn parse_options(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl WidgetDefaults {
    /// Build the widget `spec` describes for element `id`.
    pub fn build(&self, id: &ElementId, spec: WidgetSpec) -> Widget {
        match spec {
            WidgetSpec::Button { label } => {
                Widget::Button(Button::new(or_default(label, &self.button_label)))
            }
            WidgetSpec::Slider {
                label,
                min,
                max,
                default,
            } => {
                let min = finite(min).unwrap_or(self.slider_min);
                let max = finite(max).unwrap_or(self.slider_max);
                let value = finite(default).unwrap_or_else(|| (min / 2.0 + max / 2.0).round());
                Widget::Slider(Slider::new(
                    or_default(label, &self.slider_label),
                    min,
                    max,
                    value,
                ))
            }
            WidgetSpec::Dropdown { label, options } => {
                let mut options = parse_options(&options);
                if options.is_empty() {
                    options = self.dropdown_options.clone();
                }
                Widget::Dropdown(Dropdown::new(
                    or_default(label, &self.dropdown_label),
                    options,
                ))
            }
            WidgetSpec::Checkbox { label, checked } => Widget::Checkbox(Checkbox {
                label: or_default(label, &self.checkbox_label),
                checked,
            }),
            WidgetSpec::Text { style, text } => Widget::Label(TextLabel { kind: style, text }),
            WidgetSpec::Input { input, placeholder } => {
                let fallback = match input {
                    InputKind::Text => &self.text_placeholder,
                    InputKind::Number => &self.number_placeholder,
                };
                Widget::Input(TextInput::new(input, or_default(placeholder, fallback)))
            }
            WidgetSpec::Html { html } => Widget::Markup(MarkupBlock {
                payload: or_default(html, &self.markup),
            }),
            WidgetSpec::Raw {
                block: RawKind::Css,
                ..
            } => Widget::Style(StyleBlock {
                payload: format!("/* panelgui {id} */"),
            }),
            WidgetSpec::Raw {
                block: RawKind::Html,
                width,
                height,
            } => Widget::Custom(CustomBlock {
                kind: BlockKind::Raw,
                payload: String::new(),
                width: dimension(width),
                height: dimension(height),
            }),
            WidgetSpec::Custom {
                html,
                width,
                height,
            } => Widget::Custom(CustomBlock {
                kind: BlockKind::Custom,
                payload: html,
                width: dimension(width),
                height: dimension(height),
            }),
        }
    }
}
