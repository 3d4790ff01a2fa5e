//! Per-render viewport fitting: plot space onto the physical drawing surface.
//!
//! Every render recomputes two similarity transforms and bakes them into a
//! [`Scene`]:
//!
//! 1. `layout_to_plot` centers the bounding box of the valid rooms inside the
//!    plot rectangle with a uniform scale, and
//! 2. `plot_to_surface` fits the plot rectangle itself onto the surface,
//!    reserving the margin, and centers it.
//!
//! The composition order is fixed: room coordinates → `layout_to_plot` →
//! `plot_to_surface` → surface pixels. This module is read-only; it never
//! mutates stored coordinates.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::geom::{Bounds, PlotDimensions, Point, centroid};
use crate::room::RoomId;
use crate::store::LayoutStore;
use crate::transform::Transform;

/// Physical drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self { width: DEFAULT_SURFACE_WIDTH, height: DEFAULT_SURFACE_HEIGHT }
    }
}

/// The plot rectangle in surface coordinates, for drawing the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    /// Top-left corner in surface pixels.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

/// One valid room, ready to draw.
#[derive(Debug, Clone)]
pub struct SceneRoom {
    /// Stable identity; use this for selection and gestures.
    pub id: RoomId,
    /// Position in the full (unfiltered) store sequence.
    pub position: usize,
    pub name: String,
    /// Polygon vertices in surface pixels.
    pub outline: Vec<Point>,
    /// Label anchor: arithmetic mean of the transformed vertices.
    pub label_at: Point,
    pub selected: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub layout_to_plot: Transform,
    pub plot_to_surface: Transform,
    pub frame: PlotFrame,
    /// Valid rooms in wire order.
    pub rooms: Vec<SceneRoom>,
}

/// Compute the two stage transforms for the current store contents.
///
/// `layout_to_plot` uses `min(plotW/boundsW, plotH/boundsH)` over the valid
/// rooms' union bounding box, substituting 1 for a degenerate extent, and
/// centers the box in the plot rectangle. With no valid rooms it is the
/// identity. `plot_to_surface` uses the margin-reduced surface for its scale
/// and centers the scaled plot rectangle in the full surface.
#[must_use]
pub fn stage_transforms(
    store: &LayoutStore,
    plot: PlotDimensions,
    surface: SurfaceSize,
    margin: f64,
) -> (Transform, Transform) {
    let valid = store.valid_rooms();
    let layout_to_plot = match Bounds::of(
        valid
            .iter()
            .flat_map(|(_, s)| s.room.points.iter().copied()),
    ) {
        Some(bounds) => {
            let w = if bounds.width() == 0.0 { 1.0 } else { bounds.width() };
            let h = if bounds.height() == 0.0 { 1.0 } else { bounds.height() };
            let scale = (plot.width / w).min(plot.height / h);
            Transform::new(
                scale,
                (plot.width - bounds.width() * scale) / 2.0 - bounds.min_x * scale,
                (plot.height - bounds.height() * scale) / 2.0 - bounds.min_y * scale,
            )
        }
        None => Transform::IDENTITY,
    };

    let scale = ((surface.width - margin * 2.0) / plot.width)
        .min((surface.height - margin * 2.0) / plot.height);
    let plot_to_surface = Transform::new(
        scale,
        (surface.width - plot.width * scale) / 2.0,
        (surface.height - plot.height * scale) / 2.0,
    );

    (layout_to_plot, plot_to_surface)
}

/// Build the renderable scene for the current store contents.
#[must_use]
pub fn fit_to_surface(
    store: &LayoutStore,
    plot: PlotDimensions,
    surface: SurfaceSize,
    margin: f64,
) -> Scene {
    let (layout_to_plot, plot_to_surface) = stage_transforms(store, plot, surface, margin);
    let to_surface = layout_to_plot.then(&plot_to_surface);

    let rooms = store
        .valid_rooms()
        .into_iter()
        .map(|(position, stored)| {
            let outline: Vec<Point> = stored
                .room
                .points
                .iter()
                .map(|p| to_surface.apply(*p))
                .collect();
            // Valid rooms have ≥3 points, so the centroid exists.
            let label_at = centroid(&outline).unwrap_or(Point::new(0.0, 0.0));
            SceneRoom {
                id: stored.id,
                position,
                name: stored.room.name.clone(),
                outline,
                label_at,
                selected: store.selection() == Some(stored.id),
            }
        })
        .collect();

    let frame = PlotFrame {
        origin: plot_to_surface.apply(Point::new(0.0, 0.0)),
        width: plot.width * plot_to_surface.scale,
        height: plot.height * plot_to_surface.scale,
    };

    Scene { layout_to_plot, plot_to_surface, frame, rooms }
}
