//! Rendering seam: a read-only [`Scene`] snapshot of everything visible and
//! the [`Renderer`] trait that turns it into pixels.
//!
//! The crate does not rasterize anything itself. A host supplies a
//! `Renderer` (canvas 2D, GPU, or a test recorder); the engine hands it a
//! `Scene` whenever an action reports that a redraw is needed. Renderers
//! never mutate board state.
//!
//! A renderer that can read its pixels back implements [`Snapshot`]; the
//! engine uses it for PNG export.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::camera::{Camera, Point};
use crate::geometry::{self, BoundingBox, ResizeHandle};
use crate::persist::Background;
use crate::shape::{Shape, ShapeId};
use crate::text_edit::TextOverlay;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Committed and live shapes, bottom first.
    pub shapes: &'a [Shape],
    /// Shape being drawn, not yet part of `shapes`.
    pub preview: Option<&'a Shape>,
    pub selection: &'a HashSet<ShapeId>,
    /// Canvas-space bounds of the selection.
    pub selection_bounds: Option<BoundingBox>,
    /// Screen-space lasso path while lasso-selecting.
    pub lasso: Option<&'a [Point]>,
    pub camera: &'a Camera,
    pub background: &'a Background,
    pub text_overlay: Option<&'a TextOverlay>,
}

impl Scene<'_> {
    /// Screen-space resize handles for the selection.
    #[must_use]
    pub fn handles(&self) -> Option<[ResizeHandle; 8]> {
        self.selection_bounds.map(|bb| geometry::resize_handles(&geometry::handle_frame(&bb, self.camera)))
    }

    /// Shapes to draw in order, with the preview last.
    pub fn drawables(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().chain(self.preview)
    }
}

/// Draws a scene.
pub trait Renderer {
    type Error: Display;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Backend-specific drawing failures.
    fn draw(&mut self, scene: &Scene<'_>) -> Result<(), Self::Error>;
}

/// A renderer that can hand back the pixels of a frame.
pub trait Snapshot: Renderer {
    /// Draw `scene` offscreen and return its pixels.
    ///
    /// # Errors
    ///
    /// Backend-specific drawing or readback failures.
    fn snapshot(&mut self, scene: &Scene<'_>) -> Result<RgbaImage, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError<E: Debug + Display> {
    #[error("snapshot failed: {0}")]
    Snapshot(E),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode pixels as PNG bytes.
///
/// # Errors
///
/// Returns the encoder's error.
pub fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut out = Cursor::new(Vec::new());
    pixels.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
