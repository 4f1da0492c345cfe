//! Hit testing a point against the chrome of one panel.

use panelgui_common::{Point, Rect, Size};

pub const HEADER_HEIGHT: i32 = 32;
pub const CLOSE_BUTTON_SIZE: i32 = 22;
pub const CLOSE_BUTTON_INSET: i32 = 6;
pub const RESIZE_HANDLE_SIZE: i32 = 14;
pub const RESIZE_HANDLE_INSET: i32 = 6;

/// Region of a panel a pointer landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    CloseButton,
    ResizeHandle,
    Header,
    Body,
}

/// Rectangle of `zone` for a panel occupying `panel`.
pub fn zone_rect(panel: &Rect, zone: HitZone) -> Rect {
    match zone {
        HitZone::CloseButton => Rect::new(
            Point::new(
                panel.right() - CLOSE_BUTTON_INSET - CLOSE_BUTTON_SIZE,
                panel.y + CLOSE_BUTTON_INSET,
            ),
            Size::new(CLOSE_BUTTON_SIZE, CLOSE_BUTTON_SIZE),
        ),
        HitZone::ResizeHandle => Rect::new(
            Point::new(
                panel.right() - RESIZE_HANDLE_INSET - RESIZE_HANDLE_SIZE,
                panel.bottom() - RESIZE_HANDLE_INSET - RESIZE_HANDLE_SIZE,
            ),
            Size::new(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
        ),
        HitZone::Header => Rect::new(panel.origin(), Size::new(panel.width, HEADER_HEIGHT)),
        HitZone::Body => *panel,
    }
}

/// Resolve `p` against a panel. Overlapping zones resolve in the order
/// close button, resize handle, header, body.
pub fn hit_zone(panel: &Rect, p: Point, close_visible: bool) -> Option<HitZone> {
    if !panel.contains(p) {
        return None;
    }
    if close_visible && zone_rect(panel, HitZone::CloseButton).contains(p) {
        return Some(HitZone::CloseButton);
    }
    [HitZone::ResizeHandle, HitZone::Header]
        .into_iter()
        .find(|zone| zone_rect(panel, *zone).contains(p))
        .or(Some(HitZone::Body))
}
