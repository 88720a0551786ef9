//! Change Events for Cross-Component Notification
//!
//! The band list notifies in-process observers synchronously. Components
//! that live elsewhere (persistence, the audio side, other screens) get an
//! [`EqChanged`] event over a crossbeam channel instead.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::debug;

use peqkit_dsp::Band;

use crate::band_list::{ListChange, ListObserver};
use crate::codec::internal;

/// Sent after every band list mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqChanged {
    pub change: ListChange,
    /// Internal-format encoding of the list after the change
    pub serialized: String,
}

/// Forwards band list notifications into a channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<EqChanged>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<EqChanged>) -> Self {
        Self { sender }
    }

    /// Observer plus the receiving end of a fresh unbounded channel
    pub fn unbounded() -> (Self, Receiver<EqChanged>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl ListObserver for ChannelObserver {
    fn on_change(&mut self, bands: &[Band], change: &ListChange) {
        let event = EqChanged {
            change: *change,
            serialized: internal::serialize(bands),
        };
        // A dropped receiver just means nobody is listening any more
        if self.sender.send(event).is_err() {
            debug!("EqChanged receiver disconnected, dropping {:?}", change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band_list::BandList;
    use peqkit_dsp::FilterType;

    #[test]
    fn test_events_follow_mutations() {
        let (observer, events) = ChannelObserver::unbounded();
        let mut list = BandList::new();
        list.register(observer);

        list.append(Band::new(1000.0, 3.0, 1.41, FilterType::Peaking));
        list.remove_at(0);

        let first = events.try_recv().unwrap();
        assert_eq!(first.change, ListChange::Inserted { start: 0, count: 1 });
        assert_eq!(first.serialized, "PEQ: 1000 3 1.41 0; ");

        let second = events.try_recv().unwrap();
        assert_eq!(second.change, ListChange::Removed { start: 0, count: 1 });
        assert_eq!(second.serialized, "PEQ: ");

        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_disconnected_receiver_is_harmless() {
        let (observer, events) = ChannelObserver::unbounded();
        drop(events);

        let mut list = BandList::new();
        list.register(observer);
        list.append(Band::editor_default());

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = EqChanged {
            change: ListChange::Replaced { start: 2, count: 1 },
            serialized: "PEQ: 100 1 1 0; ".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Replaced"));

        let deserialized: EqChanged = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }
}
