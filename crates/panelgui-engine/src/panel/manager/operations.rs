//! Panel lifecycle, geometry, and appearance operations.

use panelgui_common::{Event, PanelId, Point, Size};

use crate::geometry;

use super::PanelManager;

impl PanelManager {
    /// Create the panel if it does not exist. An existing panel is left
    /// exactly as it is, title included. Returns whether it was created.
    pub fn open(&mut self, id: &PanelId, title: &str) -> bool {
        if self.contains(id) {
            tracing::debug!("open {id}: already open");
            return false;
        }
        self.ensure(id, Some(title));
        true
    }

    /// Destroy a panel and every widget it holds.
    pub fn close(&mut self, id: &PanelId) -> bool {
        let Some(panel) = self.panels.remove(id) else {
            return false;
        };
        self.gestures.retain(|_, g| g.panel() != Some(id));
        tracing::info!("closed panel {id} ({} widgets)", panel.widgets.len());
        self.emit(Event::PanelClosed(panel.id));
        true
    }

    /// Close every panel. Returns how many were closed.
    pub fn close_all(&mut self) -> usize {
        let ids = self.panel_ids();
        for id in &ids {
            self.close(id);
        }
        ids.len()
    }

    pub fn set_position(&mut self, id: &PanelId, x: i32, y: i32) {
        let container = self.container();
        let panel = self.ensure(id, None);
        let position = geometry::clamp_position(container, Point::new(x, y), panel.size);
        if position != panel.position {
            panel.position = position;
            self.emit(Event::PanelMoved {
                panel: id.clone(),
                position,
            });
        }
    }

    /// Resize with the origin held fixed.
    pub fn set_size(&mut self, id: &PanelId, width: i32, height: i32) {
        let container = self.container();
        let panel = self.ensure(id, None);
        let size = geometry::clamp_size(container, panel.position, Size::new(width, height));
        if size != panel.size {
            panel.size = size;
            self.emit(Event::PanelResized {
                panel: id.clone(),
                size,
            });
        }
    }

    pub fn set_visible(&mut self, id: &PanelId, visible: bool) {
        self.ensure(id, None).visible = visible;
    }

    pub fn set_title(&mut self, id: &PanelId, title: &str) {
        self.ensure(id, None).title = title.to_owned();
    }

    /// Blank colors keep their current value.
    pub fn set_style(
        &mut self,
        id: &PanelId,
        header_bg: &str,
        body_text: &str,
        header_text: &str,
        body_bg: &str,
    ) {
        self.ensure(id, None)
            .style
            .apply(header_bg, body_text, header_text, body_bg);
    }

    /// An empty or unusable reference hides the icon.
    pub fn set_icon(&mut self, id: &PanelId, reference: &str) {
        let panel = self.ensure(id, None);
        panel.set_icon(reference);
        if panel.icon.is_none() && !reference.trim().is_empty() {
            tracing::warn!("panel {id}: ignoring unusable icon reference");
        }
    }

    pub fn set_close_button_visible(&mut self, id: &PanelId, visible: bool) {
        self.ensure(id, None).close_button_visible = visible;
    }

    /// Bring a panel to the front. Returns `false` for an unknown id.
    pub fn raise(&mut self, id: &PanelId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let z = self.next_z();
        if let Some(panel) = self.panels.get_mut(id) {
            panel.z = z;
        }
        self.emit(Event::PanelRaised {
            panel: id.clone(),
            z,
        });
        true
    }

    /// Change the container bounds and re-fit every panel into them.
    pub fn set_container(&mut self, width: i32, height: i32) {
        let container = Size::new(width.max(0), height.max(0));
        self.settings.container = container;
        tracing::debug!("container resized to {}x{}", container.width, container.height);

        let mut changes = Vec::new();
        for panel in self.panels.values_mut() {
            let rect = geometry::fit_rect(container, panel.rect());
            if rect.size() != panel.size {
                panel.size = rect.size();
                changes.push(Event::PanelResized {
                    panel: panel.id.clone(),
                    size: panel.size,
                });
            }
            if rect.origin() != panel.position {
                panel.position = rect.origin();
                changes.push(Event::PanelMoved {
                    panel: panel.id.clone(),
                    position: panel.position,
                });
            }
        }
        for event in changes {
            self.emit(event);
        }
    }

    // -- Queries: never create, zero/false for unknown ids --

    pub fn position(&self, id: &PanelId) -> Point {
        self.panel(id).map(|p| p.position).unwrap_or_default()
    }

    pub fn size(&self, id: &PanelId) -> Size {
        self.panel(id).map(|p| p.size).unwrap_or_default()
    }

    /// Whether the panel was pressed since the last call.
    pub fn take_clicked(&mut self, id: &PanelId) -> bool {
        self.panels.get_mut(id).is_some_and(|p| p.take_clicked())
    }
}
