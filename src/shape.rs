//! Shape data model: the closed set of shape variants, their common fields,
//! identifiers, render seeds, and the drawing style new shapes inherit.
//!
//! A [`Shape`] serializes as a flat JSON record discriminated by a `type`
//! field, the format used both for persisted state and for exported
//! documents. Cloning a shape is a full structural copy (points and strings
//! included), which is what history snapshots and gesture origins rely on.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{MIN_FREEHAND_POINTS, MIN_SHAPE_SIZE};

/// Unique identifier for a shape, stable for the shape's lifetime.
///
/// Generated ids are UUID strings, but any string read from a document is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ShapeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw a fresh hand-drawn jitter seed.
#[must_use]
pub fn random_seed() -> u32 {
    rand::rng().random_range(1..=0x7fff_ffff)
}

/// Horizontal alignment of text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font settings carried by text shapes and by the drawing style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            font_family: "'Caveat', cursive".into(),
            font_weight: "normal".into(),
            font_style: "normal".into(),
            text_align: TextAlign::Left,
        }
    }
}

/// Stroke, fill, and font settings applied to newly created shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Fill color, or [`NO_FILL`] to disable fill.
    pub fill_color: String,
    pub text: TextStyle,
}

/// Fill-color sentinel that disables fill.
pub const NO_FILL: &str = "none";

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: "#1a1a2e".into(),
            stroke_width: 2.0,
            fill_color: NO_FILL.into(),
            text: TextStyle::default(),
        }
    }
}

/// Variant-specific payload of a shape, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeKind {
    /// Hand-drawn stroke through an ordered list of samples.
    Freehand {
        #[serde(default)]
        points: Vec<Point>,
    },
    Rect,
    Ellipse,
    /// Directed line from `(x, y)` to `(x + w, y + h)`.
    Arrow,
    /// Line from `(x, y)` to `(x + w, y + h)`.
    Line,
    Text {
        #[serde(default)]
        text: String,
        #[serde(flatten)]
        style: TextStyle,
    },
    Diamond,
    Triangle,
    Hexagon,
    Star,
    Database,
    /// Speech bubble.
    Bubble,
    Cylinder,
    /// Browser-window frame.
    Browser,
    /// Block arrow pointing right.
    ArrowRight,
    Image {
        /// URL or data URI of the bitmap.
        #[serde(rename = "imageUrl", default)]
        image_url: String,
        /// Suppresses the hand-drawn frame around the bitmap.
        #[serde(rename = "noBorder", default)]
        no_border: bool,
    },
}

impl ShapeKind {
    /// The `type` tag used in documents.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freehand { .. } => "freehand",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Arrow => "arrow",
            Self::Line => "line",
            Self::Text { .. } => "text",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
            Self::Star => "star",
            Self::Database => "database",
            Self::Bubble => "bubble",
            Self::Cylinder => "cylinder",
            Self::Browser => "browser",
            Self::ArrowRight => "arrowRight",
            Self::Image { .. } => "image",
        }
    }

    /// Freehand, line, and arrow keep a signed (directional) size.
    #[must_use]
    pub fn keeps_signed_extent(&self) -> bool {
        matches!(self, Self::Freehand { .. } | Self::Line | Self::Arrow)
    }
}

fn default_stroke_color() -> String {
    Style::default().stroke_color
}

fn default_stroke_width() -> f64 {
    Style::default().stroke_width
}

fn default_fill_color() -> String {
    NO_FILL.into()
}

/// A shape on the canvas.
///
/// `w` / `h` are signed: they may be negative while a shape is being drawn
/// and stay signed for freehand, line, and arrow after commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: ShapeId,
    #[serde(flatten)]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Jitter seed fixed at creation so re-renders are deterministic.
    #[serde(default)]
    pub seed: u32,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

impl Shape {
    /// Create a zero-size shape anchored at `anchor` with a fresh id and seed.
    #[must_use]
    pub fn new(kind: ShapeKind, anchor: Point, style: &Style) -> Self {
        Self {
            id: ShapeId::generate(),
            kind,
            x: anchor.x,
            y: anchor.y,
            w: 0.0,
            h: 0.0,
            seed: random_seed(),
            stroke_color: style.stroke_color.clone(),
            stroke_width: style.stroke_width,
            fill_color: style.fill_color.clone(),
        }
    }

    /// Builder-style size setter.
    #[must_use]
    pub fn with_size(mut self, w: f64, h: f64) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ShapeKind::Text { .. })
    }

    /// Freehand samples, or `None` for other variants.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            ShapeKind::Freehand { points } => Some(points),
            _ => None,
        }
    }

    /// Mutable freehand samples, or `None` for other variants.
    pub fn points_mut(&mut self) -> Option<&mut Vec<Point>> {
        match &mut self.kind {
            ShapeKind::Freehand { points } => Some(points),
            _ => None,
        }
    }

    /// Move the shape by a canvas-space delta. Freehand samples move with it.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        if let Some(points) = self.points_mut() {
            for p in points.iter_mut() {
                *p = p.offset(dx, dy);
            }
        }
    }

    /// Give the shape a new id and render seed, as a copy would get.
    pub fn refresh_identity(&mut self) {
        self.id = ShapeId::generate();
        self.seed = random_seed();
    }

    /// Whether the shape is too small to keep when a drawing gesture ends.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match self.points() {
            Some(points) => points.len() < MIN_FREEHAND_POINTS,
            None => self.w.abs() < MIN_SHAPE_SIZE && self.h.abs() < MIN_SHAPE_SIZE,
        }
    }

    /// Fold negative width/height into a positive extent with a moved anchor.
    ///
    /// Freehand, line, and arrow are left untouched.
    pub fn normalize(&mut self) {
        if self.kind.keeps_signed_extent() {
            return;
        }
        if self.w < 0.0 {
            self.x += self.w;
            self.w = -self.w;
        }
        if self.h < 0.0 {
            self.y += self.h;
            self.h = -self.h;
        }
    }
}
