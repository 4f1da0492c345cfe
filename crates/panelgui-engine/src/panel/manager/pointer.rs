//! Pointer routing: hit testing and the per-pointer gesture lifecycle.

use panelgui_common::{Event, PanelId, Point, PointerId};

use crate::gesture::{
    hit_zone, ActiveGesture, DragController, HitZone, PointerEvent, ResizeController,
};

use super::PanelManager;

impl PanelManager {
    /// The front-most visible panel under `at`, and where it was hit.
    pub fn hit_test(&self, at: Point) -> Option<(PanelId, HitZone)> {
        self.panels
            .values()
            .filter(|p| p.visible)
            .filter_map(|p| hit_zone(&p.rect(), at, p.close_button_visible).map(|zone| (p, zone)))
            .max_by_key(|(p, _)| p.z)
            .map(|(p, zone)| (p.id.clone(), zone))
    }

    /// Feed one pointer event through the gesture state machines.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { pointer, at } => self.pointer_down(pointer, at),
            PointerEvent::Move { pointer, at } => self.pointer_move(pointer, at),
            PointerEvent::Up { pointer, at } => self.pointer_up(pointer, Some(at)),
            PointerEvent::Cancel { pointer } => self.pointer_up(pointer, None),
        }
    }

    fn pointer_down(&mut self, pointer: PointerId, at: Point) {
        // a down without a matching up drops the stale session
        if self.gestures.remove(&pointer).is_some() {
            tracing::debug!("{pointer}: abandoned previous gesture");
        }

        let Some((id, zone)) = self.hit_test(at) else {
            return;
        };
        self.raise(&id);
        let Some(panel) = self.panels.get_mut(&id) else {
            return;
        };
        panel.clicked = true;

        let gesture = match zone {
            HitZone::Header => {
                let mut drag = DragController::new();
                drag.begin(id.clone(), at, panel.position);
                ActiveGesture::Drag(drag)
            }
            HitZone::ResizeHandle => {
                let mut resize = ResizeController::new();
                resize.begin(id.clone(), at, panel.position, panel.size);
                ActiveGesture::Resize(resize)
            }
            HitZone::CloseButton => ActiveGesture::ClosePress(id.clone()),
            HitZone::Body => return,
        };
        tracing::debug!("{pointer}: {zone:?} gesture on {id}");
        self.gestures.insert(pointer, gesture);
    }

    fn pointer_move(&mut self, pointer: PointerId, at: Point) {
        let container = self.settings.container;
        let Some(gesture) = self.gestures.get(&pointer) else {
            return;
        };
        let Some(panel) = gesture.panel().and_then(|id| self.panels.get_mut(id)) else {
            // target vanished mid-gesture
            self.gestures.remove(&pointer);
            return;
        };

        let event = match gesture {
            ActiveGesture::Drag(drag) => match drag.update(at, container, panel.size) {
                Some(position) if position != panel.position => {
                    panel.position = position;
                    Some(Event::PanelMoved {
                        panel: panel.id.clone(),
                        position,
                    })
                }
                _ => None,
            },
            ActiveGesture::Resize(resize) => match resize.update(at, container) {
                Some(size) if size != panel.size => {
                    panel.size = size;
                    Some(Event::PanelResized {
                        panel: panel.id.clone(),
                        size,
                    })
                }
                _ => None,
            },
            ActiveGesture::ClosePress(_) => None,
        };
        if let Some(event) = event {
            self.emit(event);
        }
    }

    /// Up and cancel both end the pointer's gesture and release every held
    /// button. Only an up over the pressed close button closes its panel.
    fn pointer_up(&mut self, pointer: PointerId, at: Option<Point>) {
        self.release_all_buttons();

        let Some(gesture) = self.gestures.remove(&pointer) else {
            return;
        };
        match gesture {
            ActiveGesture::ClosePress(id) => {
                let over_close = at
                    .and_then(|at| self.hit_test(at))
                    .is_some_and(|(hit, zone)| hit == id && zone == HitZone::CloseButton);
                if over_close {
                    self.close(&id);
                }
            }
            ActiveGesture::Drag(mut drag) => {
                drag.end();
            }
            ActiveGesture::Resize(mut resize) => {
                resize.end();
            }
        }
        tracing::debug!("{pointer}: gesture ended");
    }
}
