//! Panel state.

use panelgui_common::{PanelId, Point, Rect, Size};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::widget::WidgetRegistry;

/// Icon references are either a URL with a scheme (`https:`, `data:`, ...)
/// or a plain path such as `icons/gear.png`. Whitespace is never allowed.
static ICON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*:\S+|[\w.~@/\-]+)$").unwrap()
});

/// The four panel colors. Values are opaque color-spec strings passed
/// through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    #[serde(rename = "top")]
    pub header_bg: String,
    #[serde(rename = "text")]
    pub body_text: String,
    #[serde(rename = "title")]
    pub header_text: String,
    #[serde(rename = "bg")]
    pub body_bg: String,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            header_bg: "#2ecc71".into(),
            body_text: "#222".into(),
            header_text: "#fff".into(),
            body_bg: "#fff".into(),
        }
    }
}

impl PanelStyle {
    /// Overwrite each color that is not blank; blank entries keep the
    /// current value.
    pub fn apply(&mut self, header_bg: &str, body_text: &str, header_text: &str, body_bg: &str) {
        for (slot, value) in [
            (&mut self.header_bg, header_bg),
            (&mut self.body_text, body_text),
            (&mut self.header_text, header_text),
            (&mut self.body_bg, body_bg),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                *slot = value.to_owned();
            }
        }
    }
}

/// Accept an icon reference, or `None` for "no icon".
pub fn parse_icon(reference: &str) -> Option<String> {
    let reference = reference.trim();
    ICON_RE
        .is_match(reference)
        .then(|| reference.to_owned())
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub visible: bool,
    pub z: u64,
    pub style: PanelStyle,
    pub icon: Option<String>,
    pub close_button_visible: bool,
    /// Set by any press on the panel; consumed by the clicked query.
    pub clicked: bool,
    pub widgets: WidgetRegistry,
}

impl Panel {
    pub fn new(id: PanelId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            position: Point::ORIGIN,
            size: crate::geometry::MIN_SIZE,
            visible: true,
            z: 0,
            style: PanelStyle::default(),
            icon: None,
            close_button_visible: true,
            clicked: false,
            widgets: WidgetRegistry::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    /// Store an icon reference. Anything unusable hides the icon.
    pub fn set_icon(&mut self, reference: &str) {
        self.icon = parse_icon(reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_apply_skips_blank_colors() {
        let mut style = PanelStyle::default();
        style.apply("#000", "", "  ", "rgb(1, 2, 3)");
        assert_eq!(style.header_bg, "#000");
        assert_eq!(style.body_text, "#222");
        assert_eq!(style.header_text, "#fff");
        assert_eq!(style.body_bg, "rgb(1, 2, 3)");
    }

    #[test]
    fn style_serializes_with_short_names() {
        let json = serde_json::to_value(PanelStyle::default()).unwrap();
        assert_eq!(json["top"], "#2ecc71");
        assert_eq!(json["text"], "#222");
        assert_eq!(json["title"], "#fff");
        assert_eq!(json["bg"], "#fff");
    }

    #[test]
    fn icon_accepts_urls_and_paths() {
        assert!(parse_icon("https://example.com/i.png").is_some());
        assert!(parse_icon("data:image/png;base64,AAAA").is_some());
        assert!(parse_icon("./icons/gear.svg").is_some());
        assert!(parse_icon("/static/logo.png").is_some());
        assert_eq!(parse_icon("icons/gear.png").as_deref(), Some("icons/gear.png"));
        assert_eq!(parse_icon("gear.png").as_deref(), Some("gear.png"));
    }

    #[test]
    fn icon_rejects_garbage() {
        assert_eq!(parse_icon(""), None);
        assert_eq!(parse_icon("   "), None);
        assert_eq!(parse_icon("not an icon"), None);
        assert_eq!(parse_icon("icons/my gear.png"), None);
    }

    #[test]
    fn invalid_icon_clears_previous() {
        let mut panel = Panel::new(PanelId::from("p"), "P");
        panel.set_icon("https://example.com/a.png");
        assert!(panel.icon.is_some());
        panel.set_icon("%%%");
        assert!(panel.icon.is_none());
    }

    #[test]
    fn clicked_flag_is_read_once() {
        let mut panel = Panel::new(PanelId::from("p"), "P");
        panel.clicked = true;
        assert!(panel.take_clicked());
        assert!(!panel.take_clicked());
    }
}
