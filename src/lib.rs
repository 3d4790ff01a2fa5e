//! Layout geometry and interaction engine for an AI-generated floor-plan editor.
//!
//! Layouts arrive from a chat/AI backend as raw coordinate data: an ordered
//! sequence of polygonal rooms in arbitrary, unbounded units. This crate owns
//! everything between that payload and a renderer: normalizing raw rooms into
//! a bounded plot space, fitting the plot into a physical drawing surface each
//! render, and committing direct-manipulation edits (drag-to-move,
//! handle-to-resize) back into plot space under boundary constraints. The host
//! application is responsible only for networking, persistence, and drawing
//! the [`fit::Scene`] this crate produces.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`]: gesture protocol and store mutations |
//! | [`store`] | Authoritative ordered room sequence and selection |
//! | [`normalize`] | One-shot raw-to-plot coordinate normalization |
//! | [`fit`] | Per-render plot-to-surface fitting and the renderable scene |
//! | [`transform`] | Similarity transform (uniform scale + translation) |
//! | [`room`] | Room and layout types, wire shapes, validity rules |
//! | [`parse`] | Parser for the model's JSON / coordinate / DSL output |
//! | [`geom`] | Points, bounding boxes, centroids, plot dimensions |
//! | [`consts`] | Shared numeric constants (minimum sizes, defaults) |

pub mod consts;
pub mod engine;
pub mod fit;
pub mod geom;
pub mod normalize;
pub mod parse;
pub mod room;
pub mod store;
pub mod transform;
