//! Per-panel mapping from element id to widget.

use std::collections::BTreeMap;

use panelgui_common::ElementId;

use super::{Pressable, Widget, WidgetValue};

/// A widget plus the presentation state the registry tracks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub widget: Widget,
    pub visible: bool,
    pub font: Option<String>,
}

impl Element {
    pub fn new(widget: Widget) -> Self {
        Self {
            widget,
            visible: true,
            font: None,
        }
    }
}

/// Widgets owned by one panel. Ids are only unique within this registry.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    elements: BTreeMap<ElementId, Element>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Elements in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &Element)> {
        self.elements.iter()
    }

    /// Install `widget` at `id`, returning whatever it replaced.
    ///
    /// The replaced element is dropped whole: visibility and font
    /// overrides do not carry over.
    pub fn insert(&mut self, id: ElementId, widget: Widget) -> Option<Element> {
        self.elements.insert(id, Element::new(widget))
    }

    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn set_visible(&mut self, id: &ElementId, visible: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(e) => {
                e.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Value as text, or empty when absent. Consumes a button's clicked flag.
    pub fn read_value(&mut self, id: &ElementId) -> String {
        self.elements
            .get_mut(id)
            .map(|e| e.widget.read_value())
            .unwrap_or_default()
    }

    /// Value without side effects.
    pub fn value(&self, id: &ElementId) -> Option<WidgetValue> {
        self.elements.get(id).map(|e| e.widget.value())
    }

    pub fn write_value(&mut self, id: &ElementId, raw: &str) -> bool {
        self.elements
            .get_mut(id)
            .is_some_and(|e| e.widget.write_value(raw))
    }

    /// Record a font override. A blank font clears it. Ignored for
    /// widgets without text.
    pub fn set_font(&mut self, id: &ElementId, font: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(e) if e.widget.accepts_font() => {
                let font = font.trim();
                e.font = (!font.is_empty()).then(|| font.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Live pressed state of a button; false for anything else.
    pub fn button_held(&self, id: &ElementId) -> bool {
        self.elements
            .get(id)
            .and_then(|e| e.widget.as_pressable())
            .is_some_and(|b| b.is_held())
    }

    /// Read and reset a button's clicked flag; false for anything else.
    pub fn take_button_clicked(&mut self, id: &ElementId) -> bool {
        self.elements
            .get_mut(id)
            .and_then(|e| e.widget.as_pressable_mut())
            .is_some_and(|b| b.take_clicked())
    }

    pub fn press(&mut self, id: &ElementId) -> bool {
        self.with_button(id, |b| b.press())
    }

    pub fn release(&mut self, id: &ElementId) -> bool {
        self.with_button(id, |b| b.release())
    }

    pub fn click(&mut self, id: &ElementId) -> bool {
        self.with_button(id, |b| b.click())
    }

    /// Release every held button. Returns how many were held.
    pub fn release_all(&mut self) -> usize {
        let mut released = 0;
        for element in self.elements.values_mut() {
            if let Some(b) = element.widget.as_pressable_mut() {
                if b.is_held() {
                    b.release();
                    released += 1;
                }
            }
        }
        released
    }

    fn with_button(&mut self, id: &ElementId, f: impl FnOnce(&mut dyn Pressable)) -> bool {
        match self
            .elements
            .get_mut(id)
            .and_then(|e| e.widget.as_pressable_mut())
        {
            Some(b) => {
                f(b);
                true
            }
            None => false,
        }
    }
}
