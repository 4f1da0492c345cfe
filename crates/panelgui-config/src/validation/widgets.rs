//! Widget fallback validation.

use crate::schema::PanelGuiConfig;

pub(crate) fn validate_widgets(errors: &mut Vec<String>, config: &PanelGuiConfig) {
    let w = &config.widgets;
    if !w.slider_min.is_finite() || !w.slider_max.is_finite() {
        errors.push("widgets.slider_min/slider_max must be finite".into());
    } else if w.slider_min > w.slider_max {
        errors.push(format!(
            "widgets.slider_min = {} is greater than widgets.slider_max = {}",
            w.slider_min, w.slider_max
        ));
    }
    if w.dropdown_options.iter().all(|o| o.trim().is_empty()) {
        errors.push("widgets.dropdown_options must contain at least one option".into());
    }
}
