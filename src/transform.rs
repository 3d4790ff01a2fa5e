//! Similarity transform: uniform scale followed by a 2D translation.
//!
//! Both stages of the render pipeline — centering the room layout inside the
//! plot rectangle, and fitting the plot rectangle onto the drawing surface —
//! are values of this one type. The interaction engine inverts committed
//! surface deltas through the composed stages instead of re-deriving the
//! arithmetic at each call site.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::geom::Point;

/// A uniform scale plus translation, with the contract
/// `out = p * scale + (dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self { scale: 1.0, dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(scale: f64, dx: f64, dy: f64) -> Self {
        Self { scale, dx, dy }
    }

    /// Map a point through this transform.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point { x: p.x * self.scale + self.dx, y: p.y * self.scale + self.dy }
    }

    /// Map a displacement through this transform. Translation does not apply
    /// to displacements.
    #[must_use]
    pub fn apply_delta(&self, d: Point) -> Point {
        Point { x: d.x * self.scale, y: d.y * self.scale }
    }

    /// The inverse transform. The scale must be nonzero; every transform
    /// built by this crate has a positive scale (degenerate extents are
    /// substituted with 1 before division).
    #[must_use]
    pub fn invert(&self) -> Self {
        let inv = 1.0 / self.scale;
        Self { scale: inv, dx: -self.dx * inv, dy: -self.dy * inv }
    }

    /// Compose with `next`, applying `self` first.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            scale: self.scale * next.scale,
            dx: self.dx * next.scale + next.dx,
            dy: self.dy * next.scale + next.dy,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
