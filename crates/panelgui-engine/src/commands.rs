//! Command dispatch: every engine operation as one serializable value.
//!
//! A front end sends [`Command`]s (for example as JSON lines) and gets a
//! [`Reply`] back. Reporters answer with a value, everything else with
//! [`Reply::Done`].

use panelgui_common::{ElementId, PanelId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::to_coord;
use crate::gesture::PointerEvent;
use crate::panel::PanelManager;
use crate::widget::WidgetSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Open {
        panel: PanelId,
        #[serde(default)]
        title: String,
    },
    Close {
        panel: PanelId,
    },
    CloseAll,
    /// Coordinates may be fractional; they are rounded to whole pixels.
    SetPosition {
        panel: PanelId,
        x: f64,
        y: f64,
    },
    SetSize {
        panel: PanelId,
        width: f64,
        height: f64,
    },
    SetVisible {
        panel: PanelId,
        visible: bool,
    },
    SetTitle {
        panel: PanelId,
        title: String,
    },
    SetStyle {
        panel: PanelId,
        #[serde(default)]
        header_bg: String,
        #[serde(default)]
        body_text: String,
        #[serde(default)]
        header_text: String,
        #[serde(default)]
        body_bg: String,
    },
    SetIcon {
        panel: PanelId,
        #[serde(default)]
        icon: String,
    },
    SetCloseButton {
        panel: PanelId,
        visible: bool,
    },
    SetContainer {
        width: i32,
        height: i32,
    },
    Create {
        panel: PanelId,
        element: ElementId,
        widget: WidgetSpec,
    },
    Delete {
        panel: PanelId,
        element: ElementId,
    },
    SetElementVisible {
        panel: PanelId,
        element: ElementId,
        visible: bool,
    },
    SetFont {
        panel: PanelId,
        element: ElementId,
        font: String,
    },
    WriteValue {
        panel: PanelId,
        element: ElementId,
        value: String,
    },
    Press {
        panel: PanelId,
        element: ElementId,
    },
    Release {
        panel: PanelId,
        element: ElementId,
    },
    Click {
        panel: PanelId,
        element: ElementId,
    },
    Pointer(PointerEvent),
    Import {
        snapshot: Value,
    },

    // -- reporters --
    ReadValue {
        panel: PanelId,
        element: ElementId,
    },
    ButtonHeld {
        panel: PanelId,
        element: ElementId,
    },
    ButtonClicked {
        panel: PanelId,
        element: ElementId,
    },
    Position {
        panel: PanelId,
    },
    Size {
        panel: PanelId,
    },
    Clicked {
        panel: PanelId,
    },
    Export {
        panel: PanelId,
    },
}

/// Result of one command. Serialized untagged: `null`, a string, a
/// boolean, `{"x":..,"y":..}`, `{"width":..,"height":..}`, or a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Done,
    Text(String),
    Bool(bool),
    Position { x: i32, y: i32 },
    Size { width: i32, height: i32 },
    Snapshot(Value),
}

impl PanelManager {
    pub fn execute(&mut self, cmd: Command) -> Reply {
        match cmd {
            Command::Open { panel, title } => {
                self.open(&panel, &title);
                Reply::Done
            }
            Command::Close { panel } => {
                self.close(&panel);
                Reply::Done
            }
            Command::CloseAll => {
                self.close_all();
                Reply::Done
            }
            Command::SetPosition { panel, x, y } => {
                self.set_position(&panel, to_coord(x), to_coord(y));
                Reply::Done
            }
            Command::SetSize {
                panel,
                width,
                height,
            } => {
                self.set_size(&panel, to_coord(width), to_coord(height));
                Reply::Done
            }
            Command::SetVisible { panel, visible } => {
                self.set_visible(&panel, visible);
                Reply::Done
            }
            Command::SetTitle { panel, title } => {
                self.set_title(&panel, &title);
                Reply::Done
            }
            Command::SetStyle {
                panel,
                header_bg,
                body_text,
                header_text,
                body_bg,
            } => {
                self.set_style(&panel, &header_bg, &body_text, &header_text, &body_bg);
                Reply::Done
            }
            Command::SetIcon { panel, icon } => {
                self.set_icon(&panel, &icon);
                Reply::Done
            }
            Command::SetCloseButton { panel, visible } => {
                self.set_close_button_visible(&panel, visible);
                Reply::Done
            }
            Command::SetContainer { width, height } => {
                self.set_container(width, height);
                Reply::Done
            }
            Command::Create {
                panel,
                element,
                widget,
            } => {
                self.create_element(&panel, &element, widget);
                Reply::Done
            }
            Command::Delete { panel, element } => {
                self.delete_element(&panel, &element);
                Reply::Done
            }
            Command::SetElementVisible {
                panel,
                element,
                visible,
            } => {
                self.set_element_visible(&panel, &element, visible);
                Reply::Done
            }
            Command::SetFont {
                panel,
                element,
                font,
            } => {
                self.set_font(&panel, &element, &font);
                Reply::Done
            }
            Command::WriteValue {
                panel,
                element,
                value,
            } => {
                self.write_value(&panel, &element, &value);
                Reply::Done
            }
            Command::Press { panel, element } => {
                self.press_button(&panel, &element);
                Reply::Done
            }
            Command::Release { panel, element } => {
                self.release_button(&panel, &element);
                Reply::Done
            }
            Command::Click { panel, element } => {
                self.click_button(&panel, &element);
                Reply::Done
            }
            Command::Pointer(event) => {
                self.handle_pointer(event);
                Reply::Done
            }
            Command::Import { snapshot } => {
                self.import_value(snapshot);
                Reply::Done
            }
            Command::ReadValue { panel, element } => Reply::Text(self.read_value(&panel, &element)),
            Command::ButtonHeld { panel, element } => {
                Reply::Bool(self.button_held(&panel, &element))
            }
            Command::ButtonClicked { panel, element } => {
                Reply::Bool(self.button_clicked(&panel, &element))
            }
            Command::Position { panel } => {
                let p = self.position(&panel);
                Reply::Position { x: p.x, y: p.y }
            }
            Command::Size { panel } => {
                let s = self.size(&panel);
                Reply::Size {
                    width: s.width,
                    height: s.height,
                }
            }
            Command::Clicked { panel } => Reply::Bool(self.take_clicked(&panel)),
            Command::Export { panel } => Reply::Snapshot(self.export_panel(&panel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(line: &str) -> Command {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn commands_parse_from_json() {
        assert_eq!(
            parse(r#"{"op":"open","panel":"w","title":"Hello"}"#),
            Command::Open {
                panel: PanelId::from("w"),
                title: "Hello".into()
            }
        );
        assert_eq!(parse(r#"{"op":"close_all"}"#), Command::CloseAll);
        assert!(matches!(
            parse(r#"{"op":"create","panel":"w","element":"s","widget":{"kind":"slider","min":0,"max":10}}"#),
            Command::Create { widget: WidgetSpec::Slider { .. }, .. }
        ));
        assert!(matches!(
            parse(r#"{"op":"pointer","phase":"up","pointer":0,"at":{"x":1,"y":2}}"#),
            Command::Pointer(PointerEvent::Up { .. })
        ));
    }

    #[test]
    fn unknown_op_fails_to_parse() {
        assert!(serde_json::from_str::<Command>(r#"{"op":"explode"}"#).is_err());
    }

    #[test]
    fn execute_dispatches_and_reports() {
        let mut mgr = PanelManager::default();
        assert_eq!(
            mgr.execute(parse(r#"{"op":"set_position","panel":"w","x":5,"y":6}"#)),
            Reply::Done
        );
        assert_eq!(
            mgr.execute(Command::Position {
                panel: PanelId::from("w")
            }),
            Reply::Position { x: 5, y: 6 }
        );
        assert_eq!(
            mgr.execute(Command::Size {
                panel: PanelId::from("w")
            }),
            Reply::Size {
                width: 320,
                height: 220
            }
        );
        mgr.execute(parse(
            r#"{"op":"create","panel":"w","element":"b","widget":{"kind":"button","label":"Go"}}"#,
        ));
        mgr.execute(parse(r#"{"op":"click","panel":"w","element":"b"}"#));
        assert_eq!(
            mgr.execute(parse(r#"{"op":"read_value","panel":"w","element":"b"}"#)),
            Reply::Text("true".into())
        );
        assert_eq!(
            mgr.execute(parse(r#"{"op":"button_clicked","panel":"w","element":"b"}"#)),
            Reply::Bool(false)
        );
    }

    #[test]
    fn fractional_geometry_is_rounded() {
        let mut mgr = PanelManager::default();
        mgr.execute(parse(r#"{"op":"set_position","panel":"w","x":12.5,"y":40.2}"#));
        mgr.execute(parse(r#"{"op":"set_size","panel":"w","width":200.7,"height":99.4}"#));
        let panel = PanelId::from("w");
        assert_eq!(mgr.execute(Command::Position { panel: panel.clone() }), Reply::Position { x: 13, y: 40 });
        assert_eq!(
            mgr.execute(Command::Size { panel }),
            Reply::Size {
                width: 201,
                height: 99
            }
        );
    }

    #[test]
    fn export_and_import_through_commands() {
        let mut mgr = PanelManager::default();
        mgr.execute(parse(r#"{"op":"open","panel":"w","title":"W"}"#));
        let Reply::Snapshot(snap) = mgr.execute(parse(r#"{"op":"export","panel":"w"}"#)) else {
            panic!("expected snapshot");
        };
        mgr.execute(Command::CloseAll);
        assert_eq!(mgr.execute(parse(r#"{"op":"export","panel":"w"}"#)), Reply::Snapshot(json!({})));

        mgr.execute(Command::Import { snapshot: snap });
        assert!(mgr.contains(&PanelId::from("w")));
    }

    #[test]
    fn replies_serialize_untagged() {
        assert_eq!(serde_json::to_value(Reply::Done).unwrap(), Value::Null);
        assert_eq!(serde_json::to_value(Reply::Bool(true)).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(Reply::Text("50".into())).unwrap(), json!("50"));
        assert_eq!(
            serde_json::to_value(Reply::Position { x: 1, y: 2 }).unwrap(),
            json!({"x": 1, "y": 2})
        );
    }
}
