//! Top-level interaction engine: gesture protocol and store mutations.
//!
//! The engine owns the [`LayoutStore`], the plot/surface configuration, and
//! the active gesture. Geometry flows in two layers: the transient gesture
//! state carries the proposed visual offset or scale while the pointer is
//! down (renderers draw it, nothing persists it), and the store is mutated
//! exactly once, at gesture commit. Cancelling a gesture leaves the store
//! untouched.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::info;

use crate::consts::{DEFAULT_MARGIN, DEFAULT_ROOM_ORIGIN, DEFAULT_ROOM_SIDE, MIN_ROOM_EXTENT};
use crate::fit::{Scene, SurfaceSize, fit_to_surface, stage_transforms};
use crate::geom::{PlotDimensions, Point};
use crate::normalize::normalize;
use crate::room::{RawLayout, Room, RoomId};
use crate::store::LayoutStore;

/// Errors surfaced by engine operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// A positional operation addressed past the end of the sequence.
    #[error("room index {index} out of range (layout has {len} rooms)")]
    IndexOutOfRange { index: usize, len: usize },
    /// An id no longer resolves to a room (deleted or from another layout).
    #[error("unknown room id {0}")]
    UnknownRoom(RoomId),
    /// Resize requires exactly 4 points interpreted as an axis-aligned
    /// rectangle.
    #[error("cannot resize a room with {points} points; only 4-point rectangles support resize")]
    UnsupportedShape { points: usize },
}

/// The active gesture, if any.
///
/// `Dragging` and `Resizing` carry only the proposed visual state; the store
/// is untouched until [`Engine::commit_gesture`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    Idle,
    /// A drag in progress; `offset` is the current surface-space displacement.
    Dragging { id: RoomId, offset: Point },
    /// A resize in progress; scale factors are relative to the rectangle's
    /// size at gesture start.
    Resizing { id: RoomId, scale_x: f64, scale_y: f64 },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

/// The layout engine: store, configuration, and gesture state.
#[derive(Debug)]
pub struct Engine {
    store: LayoutStore,
    plot: PlotDimensions,
    surface: SurfaceSize,
    margin: f64,
    gesture: GestureState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with default plot, surface, and margin configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: LayoutStore::new(),
            plot: PlotDimensions::default(),
            surface: SurfaceSize::default(),
            margin: DEFAULT_MARGIN,
            gesture: GestureState::Idle,
        }
    }

    // --- Data inputs ---

    /// Normalize a freshly generated layout into plot space and replace the
    /// store contents. Selection and any active gesture are discarded.
    pub fn load_raw(&mut self, raw: RawLayout) {
        let rooms = normalize(raw, self.plot);
        info!(rooms = rooms.len(), "raw layout normalized and loaded");
        self.store.load(rooms);
        self.gesture = GestureState::Idle;
    }

    /// Hydrate already-normalized rooms (a snapshot restore). Selection and
    /// any active gesture are discarded.
    pub fn load_snapshot(&mut self, rooms: Vec<Room>) {
        info!(rooms = rooms.len(), "snapshot loaded");
        self.store.load(rooms);
        self.gesture = GestureState::Idle;
    }

    // --- Configuration ---

    /// Reconfigure the logical plot area, clamped to the per-axis minimum.
    ///
    /// Stored rooms are not re-normalized; callers wanting the layout
    /// refitted to the new dimensions reload the raw layout.
    pub fn set_plot_dimensions(&mut self, plot: PlotDimensions) {
        self.plot = PlotDimensions::clamped(plot.width, plot.height);
    }

    /// Reconfigure the drawing surface and margin.
    pub fn set_surface(&mut self, surface: SurfaceSize, margin: f64) {
        self.surface = surface;
        self.margin = margin;
    }

    // --- Queries ---

    /// The authoritative store (read-only).
    #[must_use]
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// The current plot dimensions.
    #[must_use]
    pub fn plot_dimensions(&self) -> PlotDimensions {
        self.plot
    }

    /// The renderable scene for the current frame.
    #[must_use]
    pub fn scene(&self) -> Scene {
        fit_to_surface(&self.store, self.plot, self.surface, self.margin)
    }

    /// The active gesture, for drawing proposed geometry.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    // --- Selection ---

    /// Select a room, replacing any prior selection.
    pub fn select(&mut self, id: RoomId) -> Result<(), EngineError> {
        if self.store.select(id) {
            Ok(())
        } else {
            Err(EngineError::UnknownRoom(id))
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// The currently selected room, if any.
    #[must_use]
    pub fn selection(&self) -> Option<RoomId> {
        self.store.selection()
    }

    // --- Gestures ---

    /// Start dragging a room. Replaces any gesture already in progress.
    pub fn begin_drag(&mut self, id: RoomId) -> Result<(), EngineError> {
        if self.store.get(id).is_none() {
            return Err(EngineError::UnknownRoom(id));
        }
        self.gesture = GestureState::Dragging { id, offset: Point::new(0.0, 0.0) };
        Ok(())
    }

    /// Start resizing a 4-point room. Replaces any gesture already in
    /// progress.
    pub fn begin_resize(&mut self, id: RoomId) -> Result<(), EngineError> {
        let room = self.store.get(id).ok_or(EngineError::UnknownRoom(id))?;
        if !room.is_rect() {
            return Err(EngineError::UnsupportedShape { points: room.points.len() });
        }
        self.gesture = GestureState::Resizing { id, scale_x: 1.0, scale_y: 1.0 };
        Ok(())
    }

    /// Update the proposed surface-space displacement of an active drag.
    /// No-op unless a drag is in progress; the store is not touched.
    pub fn update_drag(&mut self, offset: Point) {
        if let GestureState::Dragging { id, .. } = self.gesture {
            self.gesture = GestureState::Dragging { id, offset };
        }
    }

    /// Update the proposed scale factors of an active resize. No-op unless a
    /// resize is in progress; the store is not touched.
    pub fn update_resize(&mut self, scale_x: f64, scale_y: f64) {
        if let GestureState::Resizing { id, .. } = self.gesture {
            self.gesture = GestureState::Resizing { id, scale_x, scale_y };
        }
    }

    /// Commit the active gesture to the store and reset to idle. The
    /// renderer's visual offset/scale must be reset alongside: after commit,
    /// the store is the single source of truth.
    pub fn commit_gesture(&mut self) -> Result<(), EngineError> {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            GestureState::Idle => Ok(()),
            GestureState::Dragging { id, offset } => self.drag_room(id, offset),
            GestureState::Resizing { id, scale_x, scale_y } => self.resize_room(id, scale_x, scale_y),
        }
    }

    /// Abandon the active gesture without committing anything.
    pub fn cancel_gesture(&mut self) {
        self.gesture = GestureState::Idle;
    }

    // --- Committed mutations ---

    /// Move a room by a completed surface-space displacement.
    ///
    /// The displacement is inverted through both composed stage scales into a
    /// plot-space delta, clamped so the room's bounding box stays within the
    /// plot in plot-as-rendered units, then applied to every point.
    pub fn drag_room(&mut self, id: RoomId, surface_delta: Point) -> Result<(), EngineError> {
        let (layout_to_plot, plot_to_surface) =
            stage_transforms(&self.store, self.plot, self.surface, self.margin);
        let room = self.store.get(id).ok_or(EngineError::UnknownRoom(id))?;
        let Some(bounds) = room.bounds() else {
            // A room with no points has nothing to move.
            return Ok(());
        };

        let to_surface = layout_to_plot.then(&plot_to_surface);
        let delta = to_surface.invert().apply_delta(surface_delta);
        let mut dx = delta.x;
        let mut dy = delta.y;

        // Clamp the translated bounding box to [0, plot] per axis, in
        // plot-as-rendered units. A box pushed over an edge lands exactly on
        // it.
        let s = layout_to_plot.scale;
        if (bounds.min_x + dx) * s < 0.0 {
            dx = -bounds.min_x;
        }
        if (bounds.max_x + dx) * s > self.plot.width {
            dx = self.plot.width / s - bounds.max_x;
        }
        if (bounds.min_y + dy) * s < 0.0 {
            dy = -bounds.min_y;
        }
        if (bounds.max_y + dy) * s > self.plot.height {
            dy = self.plot.height / s - bounds.max_y;
        }

        let points = room
            .points
            .iter()
            .map(|p| Point::new(p.x + dx, p.y + dy))
            .collect();
        self.store.replace_points(id, points);
        Ok(())
    }

    /// Resize a 4-point room by per-axis scale factors relative to its size
    /// at gesture start.
    ///
    /// The new width/height are clamped between the 10-plot-unit floor and
    /// the plot's far edge from the anchor (both converted into room units),
    /// and the four points are rebuilt as an axis-aligned rectangle anchored
    /// at the original top-left corner.
    pub fn resize_room(&mut self, id: RoomId, scale_x: f64, scale_y: f64) -> Result<(), EngineError> {
        let (layout_to_plot, _) = stage_transforms(&self.store, self.plot, self.surface, self.margin);
        let room = self.store.get(id).ok_or(EngineError::UnknownRoom(id))?;
        if !room.is_rect() {
            return Err(EngineError::UnsupportedShape { points: room.points.len() });
        }

        let anchor = room.points[0];
        let width0 = (room.points[1].x - anchor.x).abs();
        let height0 = (room.points[3].y - anchor.y).abs();

        let s = layout_to_plot.scale;
        let max_width = self.plot.width / s - anchor.x;
        let max_height = self.plot.height / s - anchor.y;
        let width = (width0 * scale_x).min(max_width).max(MIN_ROOM_EXTENT / s);
        let height = (height0 * scale_y).min(max_height).max(MIN_ROOM_EXTENT / s);

        let points = vec![
            anchor,
            Point::new(anchor.x + width, anchor.y),
            Point::new(anchor.x + width, anchor.y + height),
            Point::new(anchor.x, anchor.y + height),
        ];
        self.store.replace_points(id, points);
        Ok(())
    }

    /// Append a default rectangle room named by positional sequence.
    pub fn add_room(&mut self) -> RoomId {
        let name = format!("room{n}", n = self.store.len() + 1);
        let room = Room::rect(
            name.clone(),
            DEFAULT_ROOM_ORIGIN,
            DEFAULT_ROOM_ORIGIN,
            DEFAULT_ROOM_SIDE,
            DEFAULT_ROOM_SIDE,
        );
        let id = self.store.push(room);
        info!(%id, name = %name, "room added");
        id
    }

    /// Delete the room at `position` in the full sequence. Clears the
    /// selection unconditionally, even if a different room was selected.
    pub fn delete_room_at(&mut self, position: usize) -> Result<Room, EngineError> {
        let len = self.store.len();
        let stored = self
            .store
            .remove_at(position)
            .ok_or(EngineError::IndexOutOfRange { index: position, len })?;
        if let GestureState::Dragging { id, .. } | GestureState::Resizing { id, .. } = self.gesture {
            if id == stored.id {
                self.gesture = GestureState::Idle;
            }
        }
        info!(position, name = %stored.room.name, "room deleted");
        Ok(stored.room)
    }

    // --- Wire helpers ---

    /// Serialize the full room sequence (invalid rooms included) to the JSON
    /// wire shape `[{"name", "points"}, ...]`.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures; none occur for these types in
    /// practice.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.store.rooms())
    }

    /// Deserialize a snapshot produced by [`Engine::snapshot_json`] (or the
    /// backend). The result is already in plot space; feed it to
    /// [`Engine::load_snapshot`], not [`Engine::load_raw`].
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn rooms_from_json(json: &str) -> Result<Vec<Room>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
