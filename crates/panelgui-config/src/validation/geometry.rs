//! Container and default panel geometry validation.

use crate::schema::PanelGuiConfig;

use super::helpers::{validate_range, validate_range_i32};

pub(crate) fn validate_container(errors: &mut Vec<String>, config: &PanelGuiConfig) {
    validate_range(errors, "container.width", config.container.width, 120, 10_000);
    validate_range(errors, "container.height", config.container.height, 80, 10_000);
}

pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &PanelGuiConfig) {
    validate_range_i32(errors, "panel.x", config.panel.x, 0, 10_000);
    validate_range_i32(errors, "panel.y", config.panel.y, 0, 10_000);
    validate_range(errors, "panel.width", config.panel.width, 120, 10_000);
    validate_range(errors, "panel.height", config.panel.height, 80, 10_000);
}
