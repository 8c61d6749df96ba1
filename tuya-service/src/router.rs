//! # Event router
//!
//! Delivers semantic events to the listeners subscribed to their topic.

use crate::cluster_library::AttributeReports;
use crate::event::{Event, Topics};

/// Receiver of semantic events
pub trait EventListener {
    /// Topics this listener wants events for
    fn interests(&self) -> Topics;
    /// Handle a event, pushing any resulting attribute changes to `reports`
    fn on_event(&mut self, event: &Event, reports: &mut AttributeReports);
}

/// Deliver `event` to every listener interested in its topic. Returns the
/// number of listeners that received the event.
pub fn dispatch(
    event: &Event,
    listeners: &mut [&mut dyn EventListener],
    reports: &mut AttributeReports,
) -> usize {
    let topic = event.topic();
    let mut delivered = 0;
    for listener in listeners.iter_mut() {
        if listener.interests().intersects(topic) {
            listener.on_event(event, reports);
            delivered += 1;
        }
    }
    if delivered == 0 {
        log::debug!("No listener for {:?}", event);
    }
    delivered
}
