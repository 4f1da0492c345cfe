pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, PanelGuiError, SnapshotError};
pub use events::{Event, EventBus};
pub use types::{Color, ElementId, PanelId, Point, PointerId, Rect, Size};

pub type Result<T> = std::result::Result<T, PanelGuiError>;
