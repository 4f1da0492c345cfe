//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod geometry;
mod helpers;
mod style;
mod widgets;

#[cfg(test)]
mod tests;

use crate::schema::PanelGuiConfig;
use panelgui_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PanelGuiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    geometry::validate_container(&mut errors, config);
    geometry::validate_panel(&mut errors, config);
    style::validate_style(&mut errors, config);
    widgets::validate_widgets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
