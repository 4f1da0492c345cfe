//! Default panel color validation.

use crate::colors::validate_color;
use crate::schema::PanelGuiConfig;

pub(crate) fn validate_style(errors: &mut Vec<String>, config: &PanelGuiConfig) {
    let style = &config.style;
    for (name, value) in [
        ("style.header_bg", &style.header_bg),
        ("style.body_text", &style.body_text),
        ("style.header_text", &style.header_text),
        ("style.body_bg", &style.body_bg),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a recognized color"));
        }
    }
}
