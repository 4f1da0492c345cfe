//! Defaults handed to the engine at construction.

use panelgui_common::{Point, Size};

use crate::panel::PanelStyle;
use crate::widget::WidgetDefaults;

/// Everything a [`PanelManager`](crate::PanelManager) needs to create
/// panels and widgets without further input.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Bounds every panel is clamped into.
    pub container: Size,
    /// Requested origin of implicitly created panels.
    pub panel_position: Point,
    /// Requested size of implicitly created panels.
    pub panel_size: Size,
    /// Last z value handed out before the first panel is created.
    pub z_base: u64,
    pub show_close_button: bool,
    pub style: PanelStyle,
    pub widgets: WidgetDefaults,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            container: Size::new(480, 360),
            panel_position: Point::new(120, 120),
            panel_size: Size::new(320, 220),
            z_base: 10_000,
            show_close_button: true,
            style: PanelStyle::default(),
            widgets: WidgetDefaults::default(),
        }
    }
}
