//! Boundary clamping for panel geometry.
//!
//! Pure functions: the same inputs always produce the same outputs and
//! nothing is mutated. A panel is kept fully inside its container when
//! the container is large enough. When it is not, the minimum size wins
//! and the panel overflows to the right and bottom.

use panelgui_common::{Point, Rect, Size};

/// Smallest width a panel may have.
pub const MIN_WIDTH: i32 = 120;
/// Smallest height a panel may have.
pub const MIN_HEIGHT: i32 = 80;
pub const MIN_SIZE: Size = Size {
    width: MIN_WIDTH,
    height: MIN_HEIGHT,
};

/// Round a loosely typed coordinate to the nearest integer pixel.
/// Non-finite input reads as 0; out-of-range values saturate.
pub fn to_coord(v: f64) -> i32 {
    if v.is_finite() {
        v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    } else {
        0
    }
}

/// Clamp a requested origin so a panel of `size` stays inside `container`.
pub fn clamp_position(container: Size, requested: Point, size: Size) -> Point {
    let max_x = container.width.saturating_sub(size.width).max(0);
    let max_y = container.height.saturating_sub(size.height).max(0);
    Point::new(requested.x.clamp(0, max_x), requested.y.clamp(0, max_y))
}

/// Clamp a requested size for a panel whose origin stays at `position`.
///
/// The far edge may not pass the container's right/bottom edge, and
/// neither dimension may drop below [`MIN_SIZE`].
pub fn clamp_size(container: Size, position: Point, requested: Size) -> Size {
    let max_w = container.width.saturating_sub(position.x).max(MIN_WIDTH);
    let max_h = container.height.saturating_sub(position.y).max(MIN_HEIGHT);
    Size::new(
        requested.width.max(MIN_WIDTH).min(max_w),
        requested.height.max(MIN_HEIGHT).min(max_h),
    )
}

/// Fit a whole rectangle into `container`: size first, measured from the
/// container origin, then position for that size.
pub fn fit_rect(container: Size, rect: Rect) -> Rect {
    let size = clamp_size(container, Point::ORIGIN, rect.size());
    let origin = clamp_position(container, rect.origin(), size);
    Rect::new(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size {
        width: 480,
        height: 360,
    };

    #[test]
    fn coords_round_and_saturate() {
        assert_eq!(to_coord(12.5), 13);
        assert_eq!(to_coord(-3.4), -3);
        assert_eq!(to_coord(1e12), i32::MAX);
        assert_eq!(to_coord(f64::NAN), 0);
    }

    #[test]
    fn position_inside_is_unchanged() {
        let p = clamp_position(CONTAINER, Point::new(50, 60), Size::new(200, 100));
        assert_eq!(p, Point::new(50, 60));
    }

    #[test]
    fn position_clamps_to_far_edges() {
        let p = clamp_position(CONTAINER, Point::new(1000, 1000), Size::new(200, 100));
        assert_eq!(p, Point::new(280, 260));
    }

    #[test]
    fn negative_position_clamps_to_zero() {
        let p = clamp_position(CONTAINER, Point::new(-40, -1), Size::new(200, 100));
        assert_eq!(p, Point::ORIGIN);
    }

    #[test]
    fn oversized_panel_pins_to_origin() {
        let p = clamp_position(Size::new(100, 50), Point::new(30, 30), MIN_SIZE);
        assert_eq!(p, Point::ORIGIN);
    }

    #[test]
    fn size_never_below_minimum() {
        let s = clamp_size(CONTAINER, Point::ORIGIN, Size::new(10, 10));
        assert_eq!(s, MIN_SIZE);
        let s = clamp_size(CONTAINER, Point::ORIGIN, Size::new(-500, -500));
        assert_eq!(s, MIN_SIZE);
    }

    #[test]
    fn size_limited_by_remaining_space() {
        let s = clamp_size(CONTAINER, Point::new(100, 100), Size::new(1000, 1000));
        assert_eq!(s, Size::new(380, 260));
    }

    #[test]
    fn small_container_keeps_minimum_size() {
        let s = clamp_size(Size::new(60, 40), Point::ORIGIN, Size::new(300, 300));
        assert_eq!(s, MIN_SIZE);
    }

    #[test]
    fn clamped_rect_stays_inside_container() {
        let bounds = Rect::new(Point::ORIGIN, CONTAINER);
        for x in (-100..600).step_by(37) {
            for y in (-100..500).step_by(41) {
                for w in (0..700).step_by(53) {
                    for h in (0..500).step_by(47) {
                        let size = clamp_size(CONTAINER, Point::ORIGIN, Size::new(w, h));
                        let pos = clamp_position(CONTAINER, Point::new(x, y), size);
                        assert!(bounds.encloses(&Rect::new(pos, size)), "{x},{y} {w}x{h}");

                        // growing from a valid origin also stays inside
                        let grown = clamp_size(CONTAINER, pos, Size::new(w, h));
                        assert!(bounds.encloses(&Rect::new(pos, grown)), "{x},{y} {w}x{h}");
                    }
                }
            }
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        for (x, y, w, h) in [(-5, 700, 10, 10), (400, 300, 500, 90), (3, 4, 200, 200)] {
            let size = clamp_size(CONTAINER, Point::ORIGIN, Size::new(w, h));
            let pos = clamp_position(CONTAINER, Point::new(x, y), size);
            assert_eq!(clamp_position(CONTAINER, pos, size), pos);
            assert_eq!(clamp_size(CONTAINER, pos, size), size);
            let again = clamp_size(CONTAINER, pos, clamp_size(CONTAINER, pos, Size::new(w, h)));
            assert_eq!(again, clamp_size(CONTAINER, pos, Size::new(w, h)));
        }
    }

    #[test]
    fn fit_rect_shrinks_then_moves() {
        let r = fit_rect(
            Size::new(300, 200),
            Rect::new(Point::new(250, 150), Size::new(400, 100)),
        );
        assert_eq!(r, Rect::new(Point::new(0, 100), Size::new(300, 100)));
    }

    #[test]
    fn fit_rect_is_idempotent() {
        let c = Size::new(300, 200);
        let once = fit_rect(c, Rect::new(Point::new(-20, 500), Size::new(50, 900)));
        assert_eq!(fit_rect(c, once), once);
    }
}
