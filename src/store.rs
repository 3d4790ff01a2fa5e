//! Authoritative store for the ordered room sequence and the selection.
//!
//! Rooms at rest hold plot-space coordinates; surface coordinates are derived
//! per render by [`crate::fit`] and never stored. The sequence order is the
//! wire order, significant for draw order and for the positional operations
//! (delete, `room{N}` naming). Each room also carries a
//! store-assigned [`RoomId`] so that interaction can address rooms stably
//! across the validity filter and across deletions.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::geom::Point;
use crate::room::{Room, RoomId};

/// A room plus its store-assigned identity.
#[derive(Debug, Clone)]
pub struct StoredRoom {
    pub id: RoomId,
    pub room: Room,
}

/// In-memory store of rooms in plot space.
#[derive(Debug, Default)]
pub struct LayoutStore {
    rooms: Vec<StoredRoom>,
    selected: Option<RoomId>,
}

impl LayoutStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence with already-normalized rooms and clear the
    /// selection (the layout identity changed).
    pub fn load(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms
            .into_iter()
            .map(|room| StoredRoom { id: Uuid::new_v4(), room })
            .collect();
        self.selected = None;
    }

    /// Append a room, assigning it a fresh id.
    pub fn push(&mut self, room: Room) -> RoomId {
        let id = Uuid::new_v4();
        self.rooms.push(StoredRoom { id, room });
        id
    }

    /// Look up a room by id.
    #[must_use]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|s| s.id == id).map(|s| &s.room)
    }

    /// Position of a room in the full (unfiltered) sequence.
    #[must_use]
    pub fn position_of(&self, id: RoomId) -> Option<usize> {
        self.rooms.iter().position(|s| s.id == id)
    }

    /// Replace a room's point list. Returns false if the id is unknown.
    pub fn replace_points(&mut self, id: RoomId, points: Vec<Point>) -> bool {
        let Some(stored) = self.rooms.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        stored.room.points = points;
        true
    }

    /// Remove the room at `position` in the full sequence, clearing the
    /// selection unconditionally — positional selection cannot be preserved
    /// across a removal that shifts later indices.
    pub fn remove_at(&mut self, position: usize) -> Option<StoredRoom> {
        if position >= self.rooms.len() {
            return None;
        }
        self.selected = None;
        Some(self.rooms.remove(position))
    }

    /// All rooms in wire order, including invalid ones.
    #[must_use]
    pub fn rooms(&self) -> Vec<&Room> {
        self.rooms.iter().map(|s| &s.room).collect()
    }

    /// Valid rooms (≥3 points) paired with their full-sequence positions.
    ///
    /// This is the single boundary where the validity filter is applied;
    /// rendering and interaction both consume this view, so filtered and
    /// unfiltered indexing can never disagree.
    #[must_use]
    pub fn valid_rooms(&self) -> Vec<(usize, &StoredRoom)> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, s)| s.room.is_valid())
            .collect()
    }

    /// Select a room by id. Returns false if the id is unknown.
    pub fn select(&mut self, id: RoomId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected room, if any.
    #[must_use]
    pub fn selection(&self) -> Option<RoomId> {
        self.selected
    }

    /// Number of rooms in the full sequence, invalid ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the store holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
