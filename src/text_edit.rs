//! Text-edit controller: the overlay input used to place new text shapes and
//! to edit existing ones.
//!
//! Editing an existing shape removes it from the live list when the overlay
//! opens (a live write, not an undo point) and re-adds a fresh shape on
//! commit, so one undo step restores the original. Cancelling puts the
//! original back at its old z-position.

#[cfg(test)]
#[path = "text_edit_test.rs"]
mod text_edit_test;

use tracing::debug;

use crate::camera::Point;
use crate::consts::{TEXT_CHAR_WIDTH, TEXT_LINE_HEIGHT, TEXT_MIN_EXTENT};
use crate::geometry::point_in_shape;
use crate::input::{Key, Modifiers};
use crate::shape::{Shape, ShapeId, ShapeKind};
use crate::store::Store;

/// An open text overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    /// Canvas-space anchor of the text's first line.
    pub anchor: Point,
    /// Screen-space position where the overlay input is shown.
    pub screen: Point,
    /// Current input value.
    pub value: String,
    /// The shape being edited and its former index, if this is an edit.
    editing: Option<(Shape, usize)>,
}

impl TextOverlay {
    /// Whether the overlay edits an existing shape rather than placing a new one.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }
}

/// What a key press did to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKeyOutcome {
    /// Text was committed; carries the new shape id if one was created.
    Committed(Option<ShapeId>),
    /// The overlay was dismissed without creating a shape.
    Cancelled,
    /// The key belongs to the input itself.
    Ignored,
}

#[derive(Debug, Default)]
pub struct TextEditor {
    overlay: Option<TextOverlay>,
}

impl TextEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&TextOverlay> {
        self.overlay.as_ref()
    }

    /// Open an empty overlay for a new text shape at `anchor`.
    pub fn open_new(&mut self, anchor: Point, screen: Point) {
        debug!(x = anchor.x, y = anchor.y, "text overlay opened");
        self.overlay = Some(TextOverlay { anchor, screen, value: String::new(), editing: None });
    }

    /// Open the topmost text shape under `canvas` for editing.
    ///
    /// The drawing style takes on the shape's font and color, and the shape
    /// leaves the live list until the edit is committed or cancelled.
    /// Returns `false` if no text shape is under the point.
    pub fn open_existing(&mut self, store: &mut Store, canvas: Point, screen: Point) -> bool {
        let Some(index) = store.shapes().iter().rposition(|s| s.is_text() && point_in_shape(canvas, s)) else {
            return false;
        };
        let original = store.shapes()[index].clone();
        let ShapeKind::Text { text, style } = &original.kind else {
            return false;
        };

        let mut draw_style = store.style().clone();
        draw_style.text = style.clone();
        draw_style.stroke_color.clone_from(&original.stroke_color);
        store.set_style(draw_style);

        let mut remaining = store.shapes().to_vec();
        remaining.remove(index);
        store.set_shapes(remaining);

        debug!(id = %original.id, "text overlay opened for edit");
        self.overlay = Some(TextOverlay {
            anchor: Point::new(original.x, original.y),
            screen,
            value: text.clone(),
            editing: Some((original, index)),
        });
        true
    }

    /// Replace the overlay's input value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let Some(overlay) = &mut self.overlay {
            overlay.value = value.into();
        }
    }

    /// Enter (without shift) commits and Escape cancels.
    pub fn handle_key(&mut self, store: &mut Store, key: &Key, mods: Modifiers) -> TextKeyOutcome {
        if !self.is_open() {
            return TextKeyOutcome::Ignored;
        }
        match key.as_str() {
            "Enter" if !mods.shift => TextKeyOutcome::Committed(self.commit(store)),
            "Escape" => {
                self.cancel(store);
                TextKeyOutcome::Cancelled
            }
            _ => TextKeyOutcome::Ignored,
        }
    }

    /// Close the overlay, turning its trimmed value into a text shape.
    ///
    /// An empty value creates nothing; for an edit that means the original
    /// stays deleted, recorded as an undoable commit.
    pub fn commit(&mut self, store: &mut Store) -> Option<ShapeId> {
        let overlay = self.overlay.take()?;
        let value = overlay.value.trim();
        if value.is_empty() {
            if overlay.is_edit() {
                store.commit_if_changed();
            }
            debug!("text overlay closed empty");
            return None;
        }

        let style = store.style();
        let shape = Shape::new(
            ShapeKind::Text { text: value.to_owned(), style: style.text.clone() },
            overlay.anchor,
            style,
        );
        let (w, h) = text_extent(value, style.text.font_size);
        let shape = shape.with_size(w, h);
        let id = shape.id.clone();

        let mut next = store.shapes().to_vec();
        next.push(shape);
        store.push_history(next);
        store.set_selection([id.clone()]);
        debug!(%id, "text committed");
        Some(id)
    }

    /// Close the overlay without creating a shape. An edited original goes
    /// back where it was.
    pub fn cancel(&mut self, store: &mut Store) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        if let Some((original, index)) = overlay.editing {
            let mut next = store.shapes().to_vec();
            next.insert(index.min(next.len()), original);
            store.set_shapes(next);
        }
        debug!("text overlay cancelled");
    }
}

/// Width and height of a text block: proportional to its longest line and
/// its line count, never smaller than a minimum extent.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn text_extent(text: &str, font_size: f64) -> (f64, f64) {
    let lines: Vec<&str> = text.split('\n').collect();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let w = (longest as f64 * font_size * TEXT_CHAR_WIDTH).max(TEXT_MIN_EXTENT);
    let h = (lines.len() as f64 * font_size * TEXT_LINE_HEIGHT).max(TEXT_MIN_EXTENT);
    (w, h)
}
