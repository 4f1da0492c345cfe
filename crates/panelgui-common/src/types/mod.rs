mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(Point::new(10, 20), Size::new(100, 50));
        assert!(r.contains(Point::new(10, 20)));
        assert!(r.contains(Point::new(109, 69)));
        assert!(!r.contains(Point::new(110, 20)));
        assert!(!r.contains(Point::new(10, 70)));
    }

    #[test]
    fn rect_encloses() {
        let outer = Rect::new(Point::ORIGIN, Size::new(480, 360));
        let inner = Rect::new(Point::new(160, 140), Size::new(320, 220));
        assert!(outer.encloses(&inner));
        let spill = Rect::new(Point::new(161, 140), Size::new(320, 220));
        assert!(!outer.encloses(&spill));
    }

    #[test]
    fn point_delta_and_offset() {
        let start = Point::new(100, 100);
        let now = Point::new(130, 90);
        let d = now.delta_from(start);
        assert_eq!(d, Point::new(30, -10));
        assert_eq!(Point::new(5, 5).offset(d), Point::new(35, -5));
    }

    #[test]
    fn point_arithmetic_saturates() {
        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far.offset(Point::new(1, -1)), far);
    }

    #[test]
    fn size_grow() {
        assert_eq!(
            Size::new(320, 220).grow(Point::new(-200, 10)),
            Size::new(120, 230)
        );
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(Point::new(1, 2), Size::new(3, 4));
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn panel_id_is_transparent_in_json() {
        let id = PanelId::from("win1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"win1\"");
        let back: PanelId = serde_json::from_str("\"win1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn element_id_display() {
        assert_eq!(ElementId::new("btn1").to_string(), "btn1");
    }

    #[test]
    fn pointer_id_display() {
        assert_eq!(PointerId(3).to_string(), "pointer-3");
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#2ecc71").unwrap();
        assert_eq!(c, Color::from_rgba(0x2e, 0xcc, 0x71, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_roundtrip_hex() {
        let original = Color::from_rgba(171, 205, 239, 255);
        let parsed = Color::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }
}
