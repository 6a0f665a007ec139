//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. [`Gesture`] is the single active press-move-release interaction,
//! carrying everything needed to compute live previews from the press origin
//! and to commit on release. At most one gesture exists at a time because it
//! is one enum value, not a set of independent flags.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashMap;

use crate::camera::Point;
use crate::geometry::ResizeAnchor;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Hand-drawn stroke.
    Freehand,
    Rect,
    Ellipse,
    Arrow,
    Line,
    /// Place or edit text through the overlay.
    Text,
    /// Remove shapes under the pointer.
    Eraser,
}

impl Tool {
    /// Single-letter keyboard shortcut for a tool.
    #[must_use]
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "v" => Some(Self::Select),
            "f" => Some(Self::Freehand),
            "r" => Some(Self::Rect),
            "e" => Some(Self::Ellipse),
            "a" => Some(Self::Arrow),
            "l" => Some(Self::Line),
            "t" => Some(Self::Text),
            "x" => Some(Self::Eraser),
            _ => None,
        }
    }

    /// The shape variant a drawing gesture with this tool creates.
    #[must_use]
    pub fn drawn_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Freehand => Some(ShapeKind::Freehand { points: Vec::new() }),
            Self::Rect => Some(ShapeKind::Rect),
            Self::Ellipse => Some(ShapeKind::Ellipse),
            Self::Arrow => Some(ShapeKind::Arrow),
            Self::Line => Some(ShapeKind::Line),
            Self::Select | Self::Text | Self::Eraser => None,
        }
    }

    /// Whether a freshly drawn shape becomes the selection.
    #[must_use]
    pub fn selects_drawn_shape(self) -> bool {
        !matches!(self, Self::Freehand | Self::Eraser)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }

    #[must_use]
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    #[must_use]
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    #[must_use]
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the host reports it (`"Delete"`, `"ArrowUp"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unit nudge direction for arrow keys.
    #[must_use]
    pub fn arrow_direction(&self) -> Option<(f64, f64)> {
        match self.0.as_str() {
            "ArrowLeft" => Some((-1.0, 0.0)),
            "ArrowRight" => Some((1.0, 0.0)),
            "ArrowUp" => Some((0.0, -1.0)),
            "ArrowDown" => Some((0.0, 1.0)),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Geometry of a shape captured when a gesture begins.
///
/// Live previews are recomputed from this origin on every move so repeated
/// moves never accumulate rounding drift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOrigin {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Freehand samples; `None` for other variants.
    pub points: Option<Vec<Point>>,
}

impl ShapeOrigin {
    #[must_use]
    pub fn capture(shape: &Shape) -> Self {
        Self { x: shape.x, y: shape.y, w: shape.w, h: shape.h, points: shape.points().map(<[Point]>::to_vec) }
    }

    /// Capture origins for every shape whose id passes `include`.
    pub fn capture_where(shapes: &[Shape], include: impl Fn(&ShapeId) -> bool) -> HashMap<ShapeId, Self> {
        shapes.iter().filter(|s| include(&s.id)).map(|s| (s.id.clone(), Self::capture(s))).collect()
    }
}

/// The active pointer gesture.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    None,
    /// Dragging the view.
    Panning {
        /// Screen-space pointer position at press.
        origin_screen: Point,
        /// Pan offset at press.
        origin_pan: Point,
    },
    /// Dragging one of the selection's resize handles.
    Resizing {
        anchor: ResizeAnchor,
        /// Screen-space pointer position at press.
        start_screen: Point,
        origins: HashMap<ShapeId, ShapeOrigin>,
    },
    /// Drawing a lasso path in screen space.
    Lassoing { path: Vec<Point> },
    /// Moving the selection.
    Dragging {
        /// Screen-space pointer position at press.
        start_screen: Point,
        origins: HashMap<ShapeId, ShapeOrigin>,
    },
    /// Sizing a new, not yet committed shape.
    Drawing { shape: Shape },
    /// Drag-erasing with the eraser tool.
    Erasing,
}

impl Gesture {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Panning { .. } => "panning",
            Self::Resizing { .. } => "resizing",
            Self::Lassoing { .. } => "lassoing",
            Self::Dragging { .. } => "dragging",
            Self::Drawing { .. } => "drawing",
            Self::Erasing => "erasing",
        }
    }
}
