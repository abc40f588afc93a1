//! Marker store: participant id → marker.
//!
//! The visitor count is the size of the map. It is never tracked on its
//! own, so duplicate adds and removals of unknown ids cannot make it drift.

use std::collections::HashMap;

use globe_common::{Location, Marker};
use globe_presence::PresenceMessage;

/// What applying a message did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added,
    Updated,
    Removed,
    /// Removal for an id that was not present.
    Unknown,
}

#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: HashMap<String, Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the marker for `id`.
    pub fn upsert(&mut self, id: &str, lat: f64, lng: f64, is_self: bool) -> StoreChange {
        let marker = Marker::new(id, Location::new(lat, lng), is_self);
        match self.markers.insert(id.to_string(), marker) {
            Some(_) => StoreChange::Updated,
            None => StoreChange::Added,
        }
    }

    /// Delete the marker for `id` if present.
    pub fn remove(&mut self, id: &str) -> StoreChange {
        match self.markers.remove(id) {
            Some(_) => StoreChange::Removed,
            None => StoreChange::Unknown,
        }
    }

    /// Route a decoded presence message. `self_id` is our own connection id.
    pub fn apply(&mut self, message: &PresenceMessage, self_id: &str) -> StoreChange {
        match message {
            PresenceMessage::AddMarker { position } => self.upsert(
                &position.id,
                position.lat,
                position.lng,
                position.id == self_id,
            ),
            PresenceMessage::RemoveMarker { id } => self.remove(id),
        }
    }

    /// Every current marker, in no particular order.
    pub fn snapshot(&self) -> Vec<Marker> {
        self.markers.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Number of visitors currently shown.
    pub fn visitors(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
