//! Pointer input model and the per-pointer gesture state machines.
//!
//! Pointer events arrive as discrete [`PointerEvent`]s. A pointer-down
//! on a panel is resolved to a [`HitZone`]; a header hit starts a
//! [`DragController`], a resize-handle hit starts a [`ResizeController`].
//! Each controller is owned by exactly one pointer and is dropped on
//! pointer-up or cancel.

mod drag;
mod hit;
mod resize;

pub use drag::{DragController, DragState};
pub use hit::{
    hit_zone, zone_rect, HitZone, CLOSE_BUTTON_INSET, CLOSE_BUTTON_SIZE, HEADER_HEIGHT,
    RESIZE_HANDLE_INSET, RESIZE_HANDLE_SIZE,
};
pub use resize::{ResizeController, ResizeState};

use panelgui_common::{PanelId, Point, PointerId};
use serde::{Deserialize, Serialize};

/// One discrete pointer event, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { pointer: PointerId, at: Point },
    Move { pointer: PointerId, at: Point },
    Up { pointer: PointerId, at: Point },
    /// Capture lost without a release position.
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    pub fn pointer(&self) -> PointerId {
        match *self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancel { pointer } => pointer,
        }
    }
}

/// The gesture a pointer is currently driving.
#[derive(Debug, Clone)]
pub enum ActiveGesture {
    Drag(DragController),
    Resize(ResizeController),
    /// Pressed on a close button; closes if released over the same button.
    ClosePress(PanelId),
}

impl ActiveGesture {
    pub fn panel(&self) -> Option<&PanelId> {
        match self {
            ActiveGesture::Drag(c) => c.panel(),
            ActiveGesture::Resize(c) => c.panel(),
            ActiveGesture::ClosePress(id) => Some(id),
        }
    }
}
