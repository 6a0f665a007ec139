//! Geometry: bounding boxes, point-in-shape tests, resize handles, and grid
//! snapping.
//!
//! Everything here is a pure function of its inputs. Shape geometry is in
//! canvas space; [`handle_at`] is the one entry point that takes a screen
//! position, because handle hit radii are fixed in screen pixels.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::HashSet;

use crate::camera::{Camera, Point};
use crate::consts::{HANDLE_PAD_PX, HANDLE_RADIUS_PX, MIN_HIT_PAD, SEGMENT_SLACK, TEXT_TOP_PAD};
use crate::shape::{Shape, ShapeId, ShapeKind};

/// Axis-aligned box with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (a.x - b.x).abs(),
            h: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether `other` lies entirely inside this box (edges inclusive).
    #[must_use]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }

    /// Smallest box covering both.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        BoundingBox {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Grow by `pad` on every side.
    #[must_use]
    pub fn expand(&self, pad: f64) -> BoundingBox {
        BoundingBox { x: self.x - pad, y: self.y - pad, w: self.w + pad * 2.0, h: self.h + pad * 2.0 }
    }
}

/// Bounding box of a single shape, in canvas space.
///
/// Freehand strokes use the extent of their samples (a zero box when there
/// are none). Line and arrow normalize their signed size. Everything else is
/// `{x, y, |w|, |h|}`.
#[must_use]
pub fn bounding_box(shape: &Shape) -> BoundingBox {
    match &shape.kind {
        ShapeKind::Freehand { points } => points_bounds(points).unwrap_or_default(),
        ShapeKind::Line | ShapeKind::Arrow => BoundingBox {
            x: shape.x.min(shape.x + shape.w),
            y: shape.y.min(shape.y + shape.h),
            w: shape.w.abs(),
            h: shape.h.abs(),
        },
        _ => BoundingBox::new(shape.x, shape.y, shape.w.abs(), shape.h.abs()),
    }
}

/// Extent of a list of points, or `None` when empty.
#[must_use]
pub fn points_bounds(points: &[Point]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Union of the bounding boxes of `shapes`, or `None` when there are none.
#[must_use]
pub fn combined_bounding_box<'a, I>(shapes: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .map(bounding_box)
        .reduce(|acc, bb| acc.union(&bb))
}

/// Hit tolerance around a shape, derived from its stroke width.
#[must_use]
pub fn hit_pad(shape: &Shape) -> f64 {
    let stroke = if shape.stroke_width > 0.0 { shape.stroke_width } else { 2.0 };
    MIN_HIT_PAD.max(stroke * 2.0)
}

/// Distance from `p` to the segment `a`–`b`, or `None` for a degenerate segment.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> Option<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq.sqrt() < 0.001 {
        return None;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    Some((p.x - cx).hypot(p.y - cy))
}

/// Whether the canvas point `p` hits `shape`.
#[must_use]
pub fn point_in_shape(p: Point, shape: &Shape) -> bool {
    let pad = hit_pad(shape);
    let reach = pad + SEGMENT_SLACK;

    match &shape.kind {
        ShapeKind::Freehand { points } => points
            .windows(2)
            .filter_map(|seg| distance_to_segment(p, seg[0], seg[1]))
            .any(|d| d <= reach),
        ShapeKind::Line | ShapeKind::Arrow => {
            let a = Point::new(shape.x, shape.y);
            let b = Point::new(shape.x + shape.w, shape.y + shape.h);
            distance_to_segment(p, a, b).is_some_and(|d| d <= reach)
        }
        ShapeKind::Text { .. } => {
            let bb = bounding_box(shape);
            p.x >= bb.x - pad && p.x <= bb.right() + pad && p.y >= bb.y - TEXT_TOP_PAD && p.y <= bb.bottom() + pad
        }
        ShapeKind::Ellipse => {
            let cx = shape.x + shape.w / 2.0;
            let cy = shape.y + shape.h / 2.0;
            let rx = (shape.w / 2.0).abs() + pad;
            let ry = (shape.h / 2.0).abs() + pad;
            if rx < 1.0 || ry < 1.0 {
                return false;
            }
            ((p.x - cx) / rx).powi(2) + ((p.y - cy) / ry).powi(2) <= 1.0
        }
        _ => {
            let bb = bounding_box(shape).expand(pad);
            p.x >= bb.x && p.x <= bb.right() && p.y >= bb.y && p.y <= bb.bottom()
        }
    }
}

/// Index of the topmost shape under `p`, scanning from the top of the z-order.
#[must_use]
pub fn topmost_hit(p: Point, shapes: &[Shape]) -> Option<usize> {
    shapes.iter().rposition(|s| point_in_shape(p, s))
}

/// Which edges a resize handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Short compass name (`"n"`, `"ne"`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn moves_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    #[must_use]
    pub fn moves_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }
}

/// A resize handle position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    pub anchor: ResizeAnchor,
    pub pos: Point,
}

/// The eight handles of `bb`: corners and edge midpoints, clockwise from north-west.
#[must_use]
pub fn resize_handles(bb: &BoundingBox) -> [ResizeHandle; 8] {
    let BoundingBox { x, y, w, h } = *bb;
    let at = |anchor, px, py| ResizeHandle { anchor, pos: Point::new(px, py) };
    [
        at(ResizeAnchor::Nw, x, y),
        at(ResizeAnchor::N, x + w / 2.0, y),
        at(ResizeAnchor::Ne, x + w, y),
        at(ResizeAnchor::E, x + w, y + h / 2.0),
        at(ResizeAnchor::Se, x + w, y + h),
        at(ResizeAnchor::S, x + w / 2.0, y + h),
        at(ResizeAnchor::Sw, x, y + h),
        at(ResizeAnchor::W, x, y + h / 2.0),
    ]
}

/// Screen-space frame the resize handles sit on: the canvas box `bb` mapped
/// through the camera and padded by a fixed pixel margin.
#[must_use]
pub fn handle_frame(bb: &BoundingBox, camera: &Camera) -> BoundingBox {
    let top_left = camera.canvas_to_screen(Point::new(bb.x, bb.y));
    BoundingBox::new(top_left.x, top_left.y, bb.w * camera.zoom, bb.h * camera.zoom).expand(HANDLE_PAD_PX)
}

/// The resize handle of the current selection under the screen point, if any.
///
/// The selection box is taken in screen space and padded by a fixed pixel
/// margin, so handles stay the same size at every zoom level.
#[must_use]
pub fn handle_at(screen: Point, selected: &HashSet<ShapeId>, shapes: &[Shape], camera: &Camera) -> Option<ResizeAnchor> {
    if selected.is_empty() {
        return None;
    }
    let bb = combined_bounding_box(shapes.iter().filter(|s| selected.contains(&s.id)))?;
    resize_handles(&handle_frame(&bb, camera))
        .into_iter()
        .find(|handle| (screen.x - handle.pos.x).hypot(screen.y - handle.pos.y) < HANDLE_RADIUS_PX)
        .map(|handle| handle.anchor)
}

/// Round `v` to the nearest multiple of `grid`.
#[must_use]
pub fn snap(v: f64, grid: f64) -> f64 {
    (v / grid).round() * grid
}
