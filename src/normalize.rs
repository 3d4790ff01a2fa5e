//! One-shot normalization of raw model coordinates into plot space.
//!
//! Runs exactly once per layout, at load time or immediately after the
//! backend generates a new layout. The input type is [`RawLayout`], consumed
//! by value; nothing else in the crate accepts raw coordinates, so normalized
//! rooms cannot round-trip back through this function.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use crate::geom::{Bounds, PlotDimensions, Point};
use crate::room::{RawLayout, Room};

/// Map a raw layout onto `[0, width] × [0, height]` plot space.
///
/// Each axis is fitted independently (aspect ratio is not preserved): the
/// union bounding box of every room's points — valid or not — spans the full
/// plot extent on both axes. A zero-extent axis substitutes a denominator of
/// 1, collapsing that axis to a degenerate strip rather than dividing by
/// zero. An empty layout maps to an empty layout.
#[must_use]
pub fn normalize(raw: RawLayout, plot: PlotDimensions) -> Vec<Room> {
    let Some(bounds) = Bounds::of(raw.0.iter().flat_map(|r| r.points.iter().copied())) else {
        // No points anywhere: nothing to rescale.
        return raw.0;
    };

    let raw_width = if bounds.width() == 0.0 { 1.0 } else { bounds.width() };
    let raw_height = if bounds.height() == 0.0 { 1.0 } else { bounds.height() };

    raw.0
        .into_iter()
        .map(|room| Room {
            name: room.name,
            points: room
                .points
                .into_iter()
                .map(|p| {
                    Point::new(
                        (p.x - bounds.min_x) / raw_width * plot.width,
                        (p.y - bounds.min_y) / raw_height * plot.height,
                    )
                })
                .collect(),
        })
        .collect()
}
