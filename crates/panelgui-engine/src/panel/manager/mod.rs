//! The PanelManager owns every panel, the z-order counter, and the
//! in-flight pointer gestures.

mod elements;
mod operations;
mod pointer;


use std::collections::hash_map::Entry;
use std::collections::HashMap;

use panelgui_common::{Event, EventBus, PanelId, PointerId, Rect, Size};
use tokio::sync::broadcast;

use crate::geometry;
use crate::gesture::ActiveGesture;
use crate::settings::EngineSettings;

use super::Panel;

/// Registry of panels for one engine instance.
///
/// Operations addressed to an unknown panel id either create it (setters
/// and widget creation) or return an empty default (queries). Nothing
/// here returns an error.
pub struct PanelManager {
    panels: HashMap<PanelId, Panel>,
    settings: EngineSettings,
    /// Last z value handed out. Only ever increases.
    z_counter: u64,
    /// At most one gesture per pointer.
    gestures: HashMap<PointerId, ActiveGesture>,
    events: Option<EventBus>,
}

impl PanelManager {
    pub fn new(settings: EngineSettings) -> Self {
        let container = Size::new(
            settings.container.width.max(0),
            settings.container.height.max(0),
        );
        Self {
            panels: HashMap::new(),
            z_counter: settings.z_base,
            settings: EngineSettings {
                container,
                ..settings
            },
            gestures: HashMap::new(),
            events: None,
        }
    }

    // -- Accessors --

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn container(&self) -> Size {
        self.settings.container
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.panels.contains_key(id)
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Panel ids from back to front.
    pub fn panel_ids(&self) -> Vec<PanelId> {
        let mut panels: Vec<&Panel> = self.panels.values().collect();
        panels.sort_by_key(|p| p.z);
        panels.into_iter().map(|p| p.id.clone()).collect()
    }

    /// The front-most panel, if any.
    pub fn top_panel(&self) -> Option<&PanelId> {
        self.panels.values().max_by_key(|p| p.z).map(|p| &p.id)
    }

    pub fn active_gesture_count(&self) -> usize {
        self.gestures.len()
    }

    // -- Events --

    /// Subscribe to engine events. The bus is created on first use, so a
    /// manager nobody listens to never publishes.
    pub fn subscribe(&mut self) -> broadcast::Receiver<Event> {
        self.events.get_or_insert_with(EventBus::default).subscribe()
    }

    pub(crate) fn emit(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    // -- Creation --

    fn next_z(&mut self) -> u64 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Look up a panel, creating it with default geometry and style if it
    /// does not exist. A blank title falls back to the id.
    pub(crate) fn ensure(&mut self, id: &PanelId, title: Option<&str>) -> &mut Panel {
        match self.panels.entry(id.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                self.z_counter += 1;
                let panel = new_panel(&self.settings, id, title, self.z_counter);
                tracing::debug!("created panel {id} at z {}", panel.z);
                if let Some(bus) = &self.events {
                    bus.publish(Event::PanelOpened(id.clone()));
                }
                e.insert(panel)
            }
        }
    }

    /// Replace (or add) a fully built panel, placing it on top.
    pub(crate) fn install(&mut self, mut panel: Panel) {
        let rect = geometry::fit_rect(self.settings.container, panel.rect());
        panel.position = rect.origin();
        panel.size = rect.size();
        panel.z = self.next_z();
        let id = panel.id.clone();
        if self.panels.insert(id.clone(), panel).is_some() {
            self.gestures.retain(|_, g| g.panel() != Some(&id));
        }
        self.emit(Event::PanelOpened(id));
    }
}

fn new_panel(settings: &EngineSettings, id: &PanelId, title: Option<&str>, z: u64) -> Panel {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(id.as_str());
    let rect = geometry::fit_rect(
        settings.container,
        Rect::new(settings.panel_position, settings.panel_size),
    );
    let mut panel = Panel::new(id.clone(), title);
    panel.position = rect.origin();
    panel.size = rect.size();
    panel.z = z;
    panel.style = settings.style.clone();
    panel.close_button_visible = settings.show_close_button;
    panel
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
