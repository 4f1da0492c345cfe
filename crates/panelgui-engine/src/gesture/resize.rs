//! Corner resize: pointer movement becomes clamped panel sizes.
//!
//! The panel origin is held fixed for the whole session.

use panelgui_common::{PanelId, Point, Size};

use crate::geometry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        panel: PanelId,
        start_pointer: Point,
        start_size: Size,
        /// Panel origin, unchanged while resizing.
        origin: Point,
    },
}

/// Resize state machine for one pointer.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    state: ResizeState,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    pub fn panel(&self) -> Option<&PanelId> {
        match &self.state {
            ResizeState::Resizing { panel, .. } => Some(panel),
            ResizeState::Idle => None,
        }
    }

    pub fn begin(&mut self, panel: PanelId, pointer: Point, origin: Point, size: Size) {
        self.state = ResizeState::Resizing {
            panel,
            start_pointer: pointer,
            start_size: size,
            origin,
        };
    }

    /// Size for the panel given the pointer is now at `pointer`.
    pub fn update(&self, pointer: Point, container: Size) -> Option<Size> {
        match &self.state {
            ResizeState::Resizing {
                start_pointer,
                start_size,
                origin,
                ..
            } => {
                let requested = start_size.grow(pointer.delta_from(*start_pointer));
                Some(geometry::clamp_size(container, *origin, requested))
            }
            ResizeState::Idle => None,
        }
    }

    pub fn end(&mut self) -> Option<PanelId> {
        match std::mem::take(&mut self.state) {
            ResizeState::Resizing { panel, .. } => Some(panel),
            ResizeState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MIN_SIZE;

    const CONTAINER: Size = Size {
        width: 480,
        height: 360,
    };

    fn resizing() -> ResizeController {
        let mut c = ResizeController::new();
        c.begin(
            PanelId::from("w"),
            Point::new(300, 200),
            Point::new(100, 100),
            Size::new(200, 100),
        );
        c
    }

    #[test]
    fn grows_with_pointer() {
        let c = resizing();
        assert_eq!(c.update(Point::new(340, 230), CONTAINER), Some(Size::new(240, 130)));
    }

    #[test]
    fn shrink_stops_at_minimum() {
        let c = resizing();
        assert_eq!(c.update(Point::new(0, 0), CONTAINER), Some(MIN_SIZE));
    }

    #[test]
    fn growth_stops_at_container_edge() {
        let c = resizing();
        assert_eq!(c.update(Point::new(5000, 5000), CONTAINER), Some(Size::new(380, 260)));
    }

    #[test]
    fn end_returns_to_idle() {
        let mut c = resizing();
        assert!(c.is_active());
        assert_eq!(c.end(), Some(PanelId::from("w")));
        assert_eq!(c.update(Point::new(340, 230), CONTAINER), None);
        assert_eq!(c.state(), &ResizeState::Idle);
    }
}
