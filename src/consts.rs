//! Shared numeric constants for the layout engine.

// ── Geometry ────────────────────────────────────────────────────

/// Minimum point count for a room to be a renderable polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Minimum width/height of a resized room, in plot units.
pub const MIN_ROOM_EXTENT: f64 = 10.0;

// ── Plot area ───────────────────────────────────────────────────

/// Smallest allowed plot dimension per axis.
pub const MIN_PLOT_AXIS: f64 = 100.0;

/// Default logical plot width.
pub const DEFAULT_PLOT_WIDTH: f64 = 1000.0;

/// Default logical plot height.
pub const DEFAULT_PLOT_HEIGHT: f64 = 800.0;

// ── Drawing surface ─────────────────────────────────────────────

/// Default physical drawing surface width in pixels.
pub const DEFAULT_SURFACE_WIDTH: f64 = 600.0;

/// Default physical drawing surface height in pixels.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 450.0;

/// Default margin between the surface edge and the plot frame, in pixels.
pub const DEFAULT_MARGIN: f64 = 40.0;

// ── New rooms ───────────────────────────────────────────────────

/// Top-left corner of a freshly added room, in plot units.
pub const DEFAULT_ROOM_ORIGIN: f64 = 100.0;

/// Side length of a freshly added room, in plot units.
pub const DEFAULT_ROOM_SIDE: f64 = 100.0;
