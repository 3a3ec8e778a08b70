//! Shared numeric constants for the layout canvas.

// ── Units ───────────────────────────────────────────────────────

/// Feet in one metre. Only the coordinate mapper converts with this.
pub const FEET_PER_METRE: f64 = 3.28084;

/// Centimetres in one inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Baseline screen density used to turn feet-per-inch into pixels-per-foot.
pub const DEFAULT_PIXELS_PER_INCH: f64 = 96.0;

/// Feet represented by one screen inch when a layout doesn't say otherwise.
pub const DEFAULT_FEET_PER_INCH: f64 = 8.0;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest dimension an item may carry, in its own unit.
pub const MIN_DIMENSION: f64 = 1.0;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Interaction ─────────────────────────────────────────────────

/// Rotation applied by the free rotate control.
pub const FREE_ROTATION_STEP_DEG: f64 = 45.0;

/// Rotation applied by the context menu (right click).
pub const CONTEXT_ROTATION_STEP_DEG: f64 = 15.0;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.25;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 4.0;

/// Multiplier applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.25;

// ── Rendering ───────────────────────────────────────────────────

/// Distance between grid lines in world feet.
pub const GRID_SPACING_FT: f64 = 5.0;

/// Canvas fill when no background image is set.
pub const BACKGROUND_FILL: &str = "#F7F5F0";

/// Grid line color.
pub const GRID_COLOR: &str = "rgba(31, 26, 23, 0.08)";

/// Room / tent outline color.
pub const OUTLINE_COLOR: &str = "#1F1A17";

/// Stroke color for the selected item.
pub const HIGHLIGHT_COLOR: &str = "#1E90FF";

/// Highlight stroke width in screen pixels.
pub const HIGHLIGHT_WIDTH_PX: f64 = 2.0;

/// Fallback item fill when an item carries no color.
pub const DEFAULT_ITEM_FILL: &str = "#D9D4CC";
