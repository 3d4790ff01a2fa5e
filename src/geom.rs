//! Geometry primitives shared by the normalizer, fitter, and interaction
//! engine: points, axis-aligned bounding boxes, centroids, and the logical
//! plot dimensions.
//!
//! A [`Point`] lives in one of three spaces — raw (as produced by the model),
//! plot (the bounded logical canvas), or surface (final pixels). The space is
//! implicit by context; crossing between spaces always goes through a
//! [`crate::transform::Transform`] or [`crate::normalize::normalize`].

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, MIN_PLOT_AXIS};

/// A point in raw, plot, or surface space.
///
/// Serializes as a two-element `[x, y]` array — the wire shape the layout
/// backend produces and consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned bounding box over a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of an iterator of points. `None` when the iterator is empty.
    #[must_use]
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut b = Self { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        for p in iter {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Arithmetic mean of a point list, used for label placement.
///
/// `None` for an empty list.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Point::new(0.0, 0.0), |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point::new(sum.x / n, sum.y / n))
}

/// Logical size of the normalized plot area.
///
/// Rooms at rest always lie within `[0, width] × [0, height]` in
/// plot-as-rendered units; the interaction engine enforces this on every
/// committed move and resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for PlotDimensions {
    fn default() -> Self {
        Self { width: DEFAULT_PLOT_WIDTH, height: DEFAULT_PLOT_HEIGHT }
    }
}

impl PlotDimensions {
    /// Build plot dimensions, raising each axis to the minimum of
    /// [`MIN_PLOT_AXIS`].
    #[must_use]
    pub fn clamped(width: f64, height: f64) -> Self {
        Self { width: width.max(MIN_PLOT_AXIS), height: height.max(MIN_PLOT_AXIS) }
    }
}
