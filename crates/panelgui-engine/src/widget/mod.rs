//! Widget model: a closed set of variants, their capabilities, and the
//! per-panel registry that owns them.

mod kinds;
mod registry;
mod spec;
mod value;


pub use kinds::{
    BlockKind, Button, Checkbox, CustomBlock, Dropdown, InputKind, MarkupBlock, Slider,
    StyleBlock, TextInput, TextKind, TextLabel,
};
pub use registry::{Element, WidgetRegistry};
pub use spec::{parse_options, RawKind, WidgetDefaults, WidgetSpec};
pub use value::{HasValue, Pressable, WidgetValue};

use serde::{Deserialize, Serialize};

/// Snapshot type tag. The serialized names are a fixed external vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetTag {
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "slider")]
    Slider,
    #[serde(rename = "drop-down")]
    Dropdown,
    #[serde(rename = "check box")]
    Checkbox,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "footer")]
    Footer,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "text input")]
    TextInput,
    #[serde(rename = "number input")]
    NumberInput,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "raw-html")]
    RawHtml,
    #[serde(rename = "html-custom")]
    HtmlCustom,
    #[serde(rename = "css")]
    Css,
}

impl WidgetTag {
    pub const ALL: [WidgetTag; 14] = [
        WidgetTag::Button,
        WidgetTag::Slider,
        WidgetTag::Dropdown,
        WidgetTag::Checkbox,
        WidgetTag::Header,
        WidgetTag::Footer,
        WidgetTag::Text,
        WidgetTag::Description,
        WidgetTag::TextInput,
        WidgetTag::NumberInput,
        WidgetTag::Html,
        WidgetTag::RawHtml,
        WidgetTag::HtmlCustom,
        WidgetTag::Css,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetTag::Button => "button",
            WidgetTag::Slider => "slider",
            WidgetTag::Dropdown => "drop-down",
            WidgetTag::Checkbox => "check box",
            WidgetTag::Header => "header",
            WidgetTag::Footer => "footer",
            WidgetTag::Text => "text",
            WidgetTag::Description => "description",
            WidgetTag::TextInput => "text input",
            WidgetTag::NumberInput => "number input",
            WidgetTag::Html => "html",
            WidgetTag::RawHtml => "raw-html",
            WidgetTag::HtmlCustom => "html-custom",
            WidgetTag::Css => "css",
        }
    }

    pub fn from_name(name: &str) -> Option<WidgetTag> {
        WidgetTag::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// One widget instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Button(Button),
    Slider(Slider),
    Dropdown(Dropdown),
    Checkbox(Checkbox),
    Label(TextLabel),
    Input(TextInput),
    Markup(MarkupBlock),
    Style(StyleBlock),
    Custom(CustomBlock),
}

impl Widget {
    pub fn tag(&self) -> WidgetTag {
        match self {
            Widget::Button(_) => WidgetTag::Button,
            Widget::Slider(_) => WidgetTag::Slider,
            Widget::Dropdown(_) => WidgetTag::Dropdown,
            Widget::Checkbox(_) => WidgetTag::Checkbox,
            Widget::Label(l) => match l.kind {
                TextKind::Header => WidgetTag::Header,
                TextKind::Footer => WidgetTag::Footer,
                TextKind::Text => WidgetTag::Text,
                TextKind::Description => WidgetTag::Description,
            },
            Widget::Input(i) => match i.kind {
                InputKind::Text => WidgetTag::TextInput,
                InputKind::Number => WidgetTag::NumberInput,
            },
            Widget::Markup(_) => WidgetTag::Html,
            Widget::Style(_) => WidgetTag::Css,
            Widget::Custom(c) => match c.kind {
                BlockKind::Raw => WidgetTag::RawHtml,
                BlockKind::Custom => WidgetTag::HtmlCustom,
            },
        }
    }

    fn as_value(&self) -> &dyn HasValue {
        match self {
            Widget::Button(w) => w,
            Widget::Slider(w) => w,
            Widget::Dropdown(w) => w,
            Widget::Checkbox(w) => w,
            Widget::Label(w) => w,
            Widget::Input(w) => w,
            Widget::Markup(w) => w,
            Widget::Style(w) => w,
            Widget::Custom(w) => w,
        }
    }

    fn as_value_mut(&mut self) -> &mut dyn HasValue {
        match self {
            Widget::Button(w) => w,
            Widget::Slider(w) => w,
            Widget::Dropdown(w) => w,
            Widget::Checkbox(w) => w,
            Widget::Label(w) => w,
            Widget::Input(w) => w,
            Widget::Markup(w) => w,
            Widget::Style(w) => w,
            Widget::Custom(w) => w,
        }
    }

    /// Current value without consuming the button clicked flag.
    pub fn value(&self) -> WidgetValue {
        self.as_value().value()
    }

    /// Current value as text. Reading a button consumes its clicked flag.
    pub fn read_value(&mut self) -> String {
        match self {
            Widget::Button(b) => b.take_clicked().to_string(),
            other => other.value().to_string(),
        }
    }

    pub fn write_value(&mut self, raw: &str) -> bool {
        self.as_value_mut().write_value(raw)
    }

    pub fn as_pressable(&self) -> Option<&dyn Pressable> {
        match self {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_pressable_mut(&mut self) -> Option<&mut dyn Pressable> {
        match self {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Whether a font override has anything to apply to. Style blocks are
    /// never rendered as content, so they have none.
    pub fn accepts_font(&self) -> bool {
        !matches!(self, Widget::Style(_))
    }
}
