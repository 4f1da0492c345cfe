//! Widget operations addressed by (panel id, element id).
//!
//! Only creation implicitly creates the panel. Everything else on an
//! unknown panel or element is a no-op returning an empty default.

use panelgui_common::{ElementId, Event, PanelId};

use crate::widget::{Element, Widget, WidgetSpec};

use super::PanelManager;

impl PanelManager {
    /// Build a widget from `spec` and install it, replacing any widget
    /// already at `element`.
    pub fn create_element(&mut self, panel: &PanelId, element: &ElementId, spec: WidgetSpec) {
        let widget = self.settings.widgets.build(element, spec);
        self.insert_widget(panel, element, widget);
    }

    pub(crate) fn insert_widget(&mut self, panel: &PanelId, element: &ElementId, widget: Widget) {
        let tag = widget.tag();
        let replaced = self.ensure(panel, None).widgets.insert(element.clone(), widget);
        if let Some(old) = replaced {
            tracing::debug!(
                "{panel}/{element}: replaced {} with {}",
                old.widget.tag().as_str(),
                tag.as_str()
            );
            self.emit(Event::ElementRemoved {
                panel: panel.clone(),
                element: element.clone(),
            });
        }
        self.emit(Event::ElementCreated {
            panel: panel.clone(),
            element: element.clone(),
        });
    }

    pub fn delete_element(&mut self, panel: &PanelId, element: &ElementId) -> bool {
        let removed = self
            .panels
            .get_mut(panel)
            .and_then(|p| p.widgets.remove(element))
            .is_some();
        if removed {
            self.emit(Event::ElementRemoved {
                panel: panel.clone(),
                element: element.clone(),
            });
        }
        removed
    }

    pub fn element(&self, panel: &PanelId, element: &ElementId) -> Option<&Element> {
        self.panel(panel).and_then(|p| p.widgets.get(element))
    }

    pub fn set_element_visible(
        &mut self,
        panel: &PanelId,
        element: &ElementId,
        visible: bool,
    ) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.set_visible(element, visible))
    }

    /// Value as text; empty for unknown ids. Reading a button consumes
    /// its clicked flag.
    pub fn read_value(&mut self, panel: &PanelId, element: &ElementId) -> String {
        self.panels
            .get_mut(panel)
            .map(|p| p.widgets.read_value(element))
            .unwrap_or_default()
    }

    pub fn write_value(&mut self, panel: &PanelId, element: &ElementId, raw: &str) -> bool {
        let accepted = self
            .panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.write_value(element, raw));
        if !accepted {
            tracing::debug!("{panel}/{element}: value write ignored");
        }
        accepted
    }

    /// Cosmetic font override; silently ignored where it cannot apply.
    pub fn set_font(&mut self, panel: &PanelId, element: &ElementId, font: &str) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.set_font(element, font))
    }

    pub fn button_held(&self, panel: &PanelId, element: &ElementId) -> bool {
        self.panel(panel)
            .is_some_and(|p| p.widgets.button_held(element))
    }

    pub fn button_clicked(&mut self, panel: &PanelId, element: &ElementId) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.take_button_clicked(element))
    }

    pub fn press_button(&mut self, panel: &PanelId, element: &ElementId) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.press(element))
    }

    pub fn release_button(&mut self, panel: &PanelId, element: &ElementId) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.release(element))
    }

    pub fn click_button(&mut self, panel: &PanelId, element: &ElementId) -> bool {
        self.panels
            .get_mut(panel)
            .is_some_and(|p| p.widgets.click(element))
    }

    /// Release every held button on every panel.
    pub fn release_all_buttons(&mut self) -> usize {
        self.panels
            .values_mut()
            .map(|p| p.widgets.release_all())
            .sum()
    }
}
