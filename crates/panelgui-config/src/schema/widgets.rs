//! Fallback values used when a widget is created with empty parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
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

impl Default for WidgetConfig {
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
