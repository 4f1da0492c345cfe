//! Panels and the registry that owns them.

mod manager;
mod types;

pub use manager::PanelManager;
pub use types::{parse_icon, Panel, PanelStyle};
