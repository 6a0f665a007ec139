//! Shared numeric constants for the whiteboard crate.

// ── History ─────────────────────────────────────────────────────

/// Default number of shape-list snapshots retained by the undo history.
pub const MAX_HISTORY: usize = 60;

// ── View ────────────────────────────────────────────────────────

/// Smallest zoom factor the view may reach.
pub const MIN_ZOOM: f64 = 0.05;

/// Largest zoom factor the view may reach.
pub const MAX_ZOOM: f64 = 30.0;

/// Multiplier applied per wheel notch when zooming in.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Multiplier applied per wheel notch when zooming out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Multiplier applied by the zoom-in control.
pub const STEP_ZOOM_IN: f64 = 1.25;

/// Multiplier applied by the zoom-out control.
pub const STEP_ZOOM_OUT: f64 = 0.8;

/// Margin, in canvas units, kept around content by fit-to-content.
pub const FIT_MARGIN: f64 = 80.0;

/// Fit-to-content never zooms in past this factor.
pub const FIT_MAX_ZOOM: f64 = 5.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Minimum hit padding around a shape, in canvas units.
pub const MIN_HIT_PAD: f64 = 8.0;

/// Extra slack added to the padding for segment distance tests.
pub const SEGMENT_SLACK: f64 = 2.0;

/// Padding above a text anchor, covering cap height.
pub const TEXT_TOP_PAD: f64 = 20.0;

/// Screen-space pad between the selection box and its resize handles.
pub const HANDLE_PAD_PX: f64 = 9.0;

/// Screen-space hit radius of a resize handle.
pub const HANDLE_RADIUS_PX: f64 = 9.0;

// ── Creation ────────────────────────────────────────────────────

/// Shapes whose width and height are both below this are discarded on commit.
pub const MIN_SHAPE_SIZE: f64 = 3.0;

/// Freehand strokes with fewer points than this are discarded on commit.
pub const MIN_FREEHAND_POINTS: usize = 2;

/// Default grid interval for snapping.
pub const GRID_SIZE: f64 = 20.0;

/// Canvas-unit offset applied to every pasted shape.
pub const PASTE_OFFSET: f64 = 20.0;

/// Per-file placement stagger for dropped images.
pub const DROP_STAGGER: f64 = 20.0;

/// Edge length of a dropped image shape.
pub const DROP_IMAGE_SIZE: f64 = 250.0;

// ── Keyboard ────────────────────────────────────────────────────

/// Nudge distance for an arrow key.
pub const NUDGE_STEP: f64 = 1.0;

/// Nudge distance for an arrow key with shift held.
pub const NUDGE_STEP_FAST: f64 = 10.0;

// ── Text ────────────────────────────────────────────────────────

/// Average glyph advance as a fraction of font size.
pub const TEXT_CHAR_WIDTH: f64 = 0.6;

/// Line height as a multiple of font size.
pub const TEXT_LINE_HEIGHT: f64 = 1.2;

/// Lower bound on either dimension of a committed text shape.
pub const TEXT_MIN_EXTENT: f64 = 20.0;
