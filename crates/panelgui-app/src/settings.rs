//! Config-to-engine wiring.

use panelgui_common::{Point, Size};
use panelgui_config::schema::PanelGuiConfig;
use panelgui_engine::widget::WidgetDefaults;
use panelgui_engine::{EngineSettings, PanelStyle};

/// Saturating conversion for config dimensions.
fn dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Build engine settings from the loaded configuration.
pub fn engine_settings(config: &PanelGuiConfig) -> EngineSettings {
    let w = &config.widgets;
    EngineSettings {
        container: Size::new(dim(config.container.width), dim(config.container.height)),
        panel_position: Point::new(config.panel.x, config.panel.y),
        panel_size: Size::new(dim(config.panel.width), dim(config.panel.height)),
        z_base: config.panel.z_base,
        show_close_button: config.panel.show_close_button,
        style: PanelStyle {
            header_bg: config.style.header_bg.clone(),
            body_text: config.style.body_text.clone(),
            header_text: config.style.header_text.clone(),
            body_bg: config.style.body_bg.clone(),
        },
        widgets: WidgetDefaults {
            button_label: w.button_label.clone(),
            slider_label: w.slider_label.clone(),
            slider_min: w.slider_min,
            slider_max: w.slider_max,
            dropdown_label: w.dropdown_label.clone(),
            dropdown_options: w.dropdown_options.clone(),
            checkbox_label: w.checkbox_label.clone(),
            text_placeholder: w.text_placeholder.clone(),
            number_placeholder: w.number_placeholder.clone(),
            markup: w.markup.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_engine_defaults() {
        let settings = engine_settings(&PanelGuiConfig::default());
        let defaults = EngineSettings::default();
        assert_eq!(settings.container, defaults.container);
        assert_eq!(settings.panel_position, defaults.panel_position);
        assert_eq!(settings.panel_size, defaults.panel_size);
        assert_eq!(settings.z_base, defaults.z_base);
        assert_eq!(settings.style, defaults.style);
        assert_eq!(settings.widgets, defaults.widgets);
    }

    #[test]
    fn config_values_flow_through() {
        let mut config = PanelGuiConfig::default();
        config.container.width = 1024;
        config.style.header_bg = "#000000".into();
        config.widgets.button_label = "Press".into();
        let settings = engine_settings(&config);
        assert_eq!(settings.container.width, 1024);
        assert_eq!(settings.style.header_bg, "#000000");
        assert_eq!(settings.widgets.button_label, "Press");
    }

    #[test]
    fn huge_dimensions_saturate() {
        assert_eq!(dim(u32::MAX), i32::MAX);
        assert_eq!(dim(480), 480);
    }
}
