//! Room and layout types and their wire shapes.
//!
//! A layout serializes as an ordered JSON array of
//! `{"name": string, "points": [[x, y], ...]}` — the exact contract with the
//! layout-generation backend. Room names are not unique; rooms are identified
//! positionally on the wire and by a store-assigned [`RoomId`] in memory.
//!
//! [`RawLayout`] wraps rooms that are still in the model's unbounded
//! coordinate space. Only [`crate::normalize::normalize`] consumes it, by
//! value, so already-normalized rooms can never be normalized a second time
//! (which would compound the distortion).

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::MIN_POLYGON_POINTS;
use crate::geom::{Bounds, Point};

/// Stable identifier for a room, assigned by the store. Never on the wire.
pub type RoomId = Uuid;

/// A polygonal room.
///
/// Rooms with fewer than [`MIN_POLYGON_POINTS`] points are kept in the layout
/// but excluded from rendering and interaction. The first four points of a
/// 4-point room are an axis-aligned rectangle in reading order (top-left,
/// top-right, bottom-right, bottom-left); resize relies on this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name. Duplicates are allowed within a layout.
    pub name: String,
    /// Polygon vertices. Absent on the wire means an empty (invalid) room.
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points }
    }

    /// An axis-aligned rectangle with its four corners in reading order.
    #[must_use]
    pub fn rect(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            points: vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
        }
    }

    /// Whether this room is a renderable polygon (≥3 points).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= MIN_POLYGON_POINTS
    }

    /// Whether this room is eligible for rectangle resize (exactly 4 points).
    #[must_use]
    pub fn is_rect(&self) -> bool {
        self.points.len() == 4
    }

    /// Bounding box over this room's points. `None` for an empty room.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.points.iter().copied())
    }
}

/// Rooms straight from the backend, in raw model coordinates.
///
/// The only way out of this type is [`crate::normalize::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLayout(pub Vec<Room>);

impl RawLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
