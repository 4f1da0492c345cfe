//! Header drag: pointer movement becomes clamped panel positions.

use panelgui_common::{PanelId, Point, Size};

use crate::geometry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        panel: PanelId,
        /// Pointer position at pointer-down.
        start_pointer: Point,
        /// Panel origin at pointer-down.
        start_position: Point,
    },
}

/// Drag state machine for one pointer.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn panel(&self) -> Option<&PanelId> {
        match &self.state {
            DragState::Dragging { panel, .. } => Some(panel),
            DragState::Idle => None,
        }
    }

    /// Idle -> Dragging. Restarts the session if one was already running.
    pub fn begin(&mut self, panel: PanelId, pointer: Point, position: Point) {
        self.state = DragState::Dragging {
            panel,
            start_pointer: pointer,
            start_position: position,
        };
    }

    /// Position for the panel given the pointer is now at `pointer`.
    ///
    /// The delta is always measured from the start of the session, so the
    /// result depends only on the latest pointer position. Returns `None`
    /// when idle.
    pub fn update(&self, pointer: Point, container: Size, size: Size) -> Option<Point> {
        match &self.state {
            DragState::Dragging {
                start_pointer,
                start_position,
                ..
            } => {
                let requested = start_position.offset(pointer.delta_from(*start_pointer));
                Some(geometry::clamp_position(container, requested, size))
            }
            DragState::Idle => None,
        }
    }

    /// Dragging -> Idle, returning the panel that was being dragged.
    pub fn end(&mut self) -> Option<PanelId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { panel, .. } => Some(panel),
            DragState::Idle => None,
        }
    }
}
