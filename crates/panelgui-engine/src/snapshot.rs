//! Panel snapshots: the JSON view of a panel and its widgets.
//!
//! Field names and element type tags are an external contract:
//!
//! ```json
//! { "id": "w", "title": "W", "visible": true,
//!   "left": 120, "top": 120, "width": 320, "height": 220,
//!   "styles": { "top": "#2ecc71", "text": "#222", "title": "#fff", "bg": "#fff" },
//!   "elements": { "vol": { "type": "slider", "value": "50", "meta": { "min": 0.0, "max": 100.0 } } } }
//! ```
//!
//! Export never fails: an unknown panel exports as `{}`. Import is
//! tolerant: malformed input is logged and ignored, and bad elements are
//! skipped one by one.

use std::collections::BTreeMap;

use panelgui_common::{ElementId, PanelId, Point, Size, SnapshotError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::to_coord;
use crate::panel::{Panel, PanelManager, PanelStyle};
use crate::widget::{
    Element, InputKind, RawKind, TextKind, Widget, WidgetDefaults, WidgetSpec, WidgetTag,
    WidgetValue,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub title: String,
    pub visible: bool,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub styles: PanelStyle,
    pub elements: BTreeMap<ElementId, ElementSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    #[serde(rename = "type")]
    pub tag: WidgetTag,
    pub value: WidgetValue,
    pub meta: ElementMeta,
}

/// Variant-specific extras. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ElementSnapshot {
    pub fn of(element: &Element) -> Self {
        let mut meta = ElementMeta {
            font: element.font.clone(),
            ..Default::default()
        };
        match &element.widget {
            Widget::Button(b) => meta.label = Some(b.label.clone()),
            Widget::Slider(s) => {
                meta.label = Some(s.label.clone());
                meta.min = Some(s.min());
                meta.max = Some(s.max());
            }
            Widget::Dropdown(d) => {
                meta.label = Some(d.label.clone());
                meta.options = Some(d.options().to_vec());
            }
            Widget::Checkbox(c) => meta.label = Some(c.label.clone()),
            Widget::Input(i) => meta.placeholder = Some(i.placeholder.clone()),
            Widget::Custom(c) => {
                meta.width = c.width;
                meta.height = c.height;
            }
            Widget::Label(_) | Widget::Markup(_) | Widget::Style(_) => {}
        }
        Self {
            tag: element.widget.tag(),
            value: element.widget.value(),
            meta,
        }
    }
}

impl PanelSnapshot {
    pub fn of(panel: &Panel) -> Self {
        Self {
            id: panel.id.clone(),
            title: panel.title.clone(),
            visible: panel.visible,
            left: panel.position.x,
            top: panel.position.y,
            width: panel.size.width,
            height: panel.size.height,
            styles: panel.style.clone(),
            elements: panel
                .widgets
                .iter()
                .map(|(id, el)| (id.clone(), ElementSnapshot::of(el)))
                .collect(),
        }
    }
}

// -- Import --

#[derive(Deserialize)]
struct LooseSnapshot {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    left: Option<f64>,
    #[serde(default)]
    top: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    styles: Option<PanelStyle>,
    #[serde(default)]
    elements: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct LooseElement {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    meta: ElementMeta,
}

fn coord(v: Option<f64>, fallback: i32) -> i32 {
    v.filter(|n| n.is_finite()).map(to_coord).unwrap_or(fallback)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Rebuild a widget from its snapshot form.
fn restore_widget(
    defaults: &WidgetDefaults,
    id: &ElementId,
    tag: WidgetTag,
    value: &str,
    meta: &ElementMeta,
) -> Widget {
    let label = meta.label.clone().unwrap_or_default();
    let placeholder = meta.placeholder.clone().unwrap_or_default();
    let width = meta.width.map(f64::from);
    let height = meta.height.map(f64::from);
    let spec = match tag {
        WidgetTag::Button => WidgetSpec::Button { label },
        WidgetTag::Slider => WidgetSpec::Slider {
            label,
            min: meta.min,
            max: meta.max,
            default: None,
        },
        WidgetTag::Dropdown => WidgetSpec::Dropdown {
            label,
            options: meta.options.clone().unwrap_or_default().join(","),
        },
        WidgetTag::Checkbox => WidgetSpec::Checkbox {
            label,
            checked: false,
        },
        WidgetTag::Header | WidgetTag::Footer | WidgetTag::Text | WidgetTag::Description => {
            let style = match tag {
                WidgetTag::Header => TextKind::Header,
                WidgetTag::Footer => TextKind::Footer,
                WidgetTag::Description => TextKind::Description,
                _ => TextKind::Text,
            };
            WidgetSpec::Text {
                style,
                text: String::new(),
            }
        }
        WidgetTag::TextInput => WidgetSpec::Input {
            input: InputKind::Text,
            placeholder,
        },
        WidgetTag::NumberInput => WidgetSpec::Input {
            input: InputKind::Number,
            placeholder,
        },
        WidgetTag::Html => WidgetSpec::Html {
            html: String::new(),
        },
        WidgetTag::RawHtml => WidgetSpec::Raw {
            block: RawKind::Html,
            width,
            height,
        },
        WidgetTag::HtmlCustom => WidgetSpec::Custom {
            html: String::new(),
            width,
            height,
        },
        WidgetTag::Css => WidgetSpec::Raw {
            block: RawKind::Css,
            width: None,
            height: None,
        },
    };
    let mut widget = defaults.build(id, spec);
    // clicked flags are transient and are not restored
    if tag != WidgetTag::Button {
        widget.write_value(value);
    }
    widget
}

impl PanelManager {
    pub fn snapshot(&self, id: &PanelId) -> Option<PanelSnapshot> {
        self.panel(id).map(PanelSnapshot::of)
    }

    /// Snapshot as JSON; `{}` for an unknown panel. Does not consume
    /// button clicked flags.
    pub fn export_panel(&self, id: &PanelId) -> Value {
        self.snapshot(id)
            .and_then(|snap| serde_json::to_value(snap).ok())
            .unwrap_or_else(|| Value::Object(Default::default()))
    }

    /// Recreate a panel from exported JSON text. An existing panel with
    /// the same id is replaced. Returns `false` if nothing was imported.
    pub fn import_panel(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.import_value(value),
            Err(e) => {
                let e = SnapshotError::Malformed(e.to_string());
                tracing::warn!("snapshot import skipped: {e}");
                false
            }
        }
    }

    pub fn import_value(&mut self, value: Value) -> bool {
        match self.try_import(value) {
            Ok(id) => {
                tracing::info!("imported panel {id}");
                true
            }
            Err(e) => {
                tracing::warn!("snapshot import skipped: {e}");
                false
            }
        }
    }

    fn try_import(&mut self, value: Value) -> Result<PanelId, SnapshotError> {
        let snap: LooseSnapshot =
            serde_json::from_value(value).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        let id = snap
            .id
            .filter(|id| !id.is_empty())
            .map(PanelId::from)
            .ok_or(SnapshotError::MissingField("id"))?;

        let settings = self.settings();
        let title = snap
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| id.to_string());
        let mut panel = Panel::new(id.clone(), title);
        panel.position = Point::new(
            coord(snap.left, settings.panel_position.x),
            coord(snap.top, settings.panel_position.y),
        );
        panel.size = Size::new(
            coord(snap.width, settings.panel_size.width),
            coord(snap.height, settings.panel_size.height),
        );
        panel.visible = snap.visible.unwrap_or(true);
        panel.style = snap.styles.unwrap_or_else(|| settings.style.clone());
        panel.close_button_visible = settings.show_close_button;
        self.install(panel);

        for (element, raw) in snap.elements {
            let element = ElementId::from(element);
            if let Err(e) = self.restore_element(&id, &element, raw) {
                tracing::warn!("{id}/{element}: skipped: {e}");
            }
        }
        Ok(id)
    }

    fn restore_element(
        &mut self,
        panel: &PanelId,
        element: &ElementId,
        raw: Value,
    ) -> Result<(), SnapshotError> {
        let loose: LooseElement =
            serde_json::from_value(raw).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        let tag = WidgetTag::from_name(&loose.tag)
            .ok_or_else(|| SnapshotError::UnknownElementType(loose.tag.clone()))?;
        let widget = restore_widget(
            &self.settings().widgets,
            element,
            tag,
            &value_text(&loose.value),
            &loose.meta,
        );
        self.insert_widget(panel, element, widget);
        if let Some(font) = &loose.meta.font {
            self.set_font(panel, element, font);
        }
        Ok(())
    }
}
