//! Configuration schema types for PanelGUI.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the engine ships with.

mod container;
mod panel;
mod system;
mod theme;
mod widgets;

pub use container::*;
pub use panel::*;
pub use system::*;
pub use theme::*;
pub use widgets::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PanelGuiConfig {
    pub theme: ThemeConfig,
    pub container: ContainerConfig,
    pub panel: PanelConfig,
    pub style: StyleConfig,
    pub widgets: WidgetConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
