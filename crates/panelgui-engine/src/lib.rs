//! Floating-panel windowing engine.
//!
//! A [`PanelManager`] owns every panel, each panel owns a
//! [`WidgetRegistry`](widget::WidgetRegistry), and pointer input is fed
//! through [`PanelManager::handle_pointer`] where drag and resize
//! gestures run as explicit state machines. No operation fails: unknown
//! ids read as empty defaults and out-of-range geometry is clamped.

pub mod commands;
pub mod geometry;
pub mod gesture;
pub mod panel;
pub mod settings;
pub mod snapshot;
pub mod widget;

pub use commands::{Command, Reply};
pub use gesture::{HitZone, PointerEvent};
pub use panel::{Panel, PanelManager, PanelStyle};
pub use settings::EngineSettings;
pub use snapshot::{ElementMeta, ElementSnapshot, PanelSnapshot};
pub use widget::{Widget, WidgetSpec, WidgetTag, WidgetValue};
