use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{ElementId, PanelId, Point, Size};

/// State changes the engine reports to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PanelOpened(PanelId),
    PanelClosed(PanelId),
    PanelMoved { panel: PanelId, position: Point },
    PanelResized { panel: PanelId, size: Size },
    PanelRaised { panel: PanelId, z: u64 },
    ElementCreated { panel: PanelId, element: ElementId },
    ElementRemoved { panel: PanelId, element: ElementId },
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish to all current subscribers. Returns how many received it;
    /// with no subscribers the event is dropped.
    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::PanelOpened(PanelId::from("win1")));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::PanelOpened(PanelId::from("win1")));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let delivered = bus.publish(Event::PanelClosed(PanelId::from("a")));
        assert_eq!(delivered, 2);

        assert!(matches!(rx1.recv().await.unwrap(), Event::PanelClosed(_)));
        assert!(matches!(rx2.recv().await.unwrap(), Event::PanelClosed(_)));
    }

    #[tokio::test]
    async fn events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let panel = PanelId::from("p");

        bus.publish(Event::PanelOpened(panel.clone()));
        bus.publish(Event::PanelMoved {
            panel: panel.clone(),
            position: Point::new(10, 20),
        });
        bus.publish(Event::PanelClosed(panel.clone()));

        assert!(matches!(rx.recv().await.unwrap(), Event::PanelOpened(_)));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::PanelMoved { position, .. } if position == Point::new(10, 20)
        ));
        assert!(matches!(rx.recv().await.unwrap(), Event::PanelClosed(_)));
    }

    #[test]
    fn publish_without_subscribers_returns_zero() {
        let bus = EventBus::new(4);
        assert_eq!(bus.publish(Event::PanelOpened(PanelId::from("x"))), 0);
    }

    #[test]
    fn event_serialization_is_tagged() {
        let event = Event::ElementCreated {
            panel: PanelId::from("win1"),
            element: ElementId::from("btn1"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ElementCreated");
        assert_eq!(json["data"]["panel"], "win1");
        assert_eq!(json["data"]["element"], "btn1");
    }
}
