//! Shape store: the canonical shape list, selection, tool and style settings,
//! view transform, clipboard, and bounded undo history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single owner of board state. The interaction engine, the
//! text-edit controller, and image ingestion all receive it by `&mut` and
//! change it only through the named commands below.
//!
//! Two write paths exist. [`Store::set_shapes`] replaces the live list
//! without an undo point and backs live previews (drag, resize, erase).
//! [`Store::push_history`] is the only way to record an undoable commit.
//! Both persist the list through the configured [`Storage`].
//!
//! INVARIANTS
//! ==========
//! - The selection is always a subset of the ids in the live list.
//! - History snapshots never alias the live list or each other.
//! - Commands on an empty selection or empty clipboard change nothing.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::camera::Camera;
use crate::config::Config;
use crate::consts::PASTE_OFFSET;
use crate::geometry;
use crate::history::History;
use crate::input::Tool;
use crate::persist::{self, BACKGROUND_KEY, Background, MemoryStorage, SHAPES_KEY, SNAP_KEY, Storage};
use crate::shape::{Shape, ShapeId, ShapeKind, Style, TextAlign};

pub struct Store {
    shapes: Vec<Shape>,
    selection: HashSet<ShapeId>,
    history: History,
    clipboard: Vec<Shape>,
    tool: Tool,
    style: Style,
    camera: Camera,
    background: Background,
    snap_to_grid: bool,
    grid_size: f64,
    storage: Box<dyn Storage>,
}

impl Store {
    /// Load a store from `storage`, falling back to defaults for any record
    /// that is missing or corrupt.
    #[must_use]
    pub fn load(storage: Box<dyn Storage>, config: &Config) -> Self {
        let shapes: Vec<Shape> = persist::load_json(storage.as_ref(), SHAPES_KEY).unwrap_or_default();
        let background = persist::load_json(storage.as_ref(), BACKGROUND_KEY).unwrap_or_default();
        let snap_to_grid = persist::load_json(storage.as_ref(), SNAP_KEY).unwrap_or(false);
        debug!(count = shapes.len(), snap_to_grid, "store loaded");

        Self {
            history: History::new(&shapes, config.history_limit),
            shapes,
            selection: HashSet::new(),
            clipboard: Vec::new(),
            tool: Tool::default(),
            style: Style::default(),
            camera: Camera::default(),
            background,
            snap_to_grid,
            grid_size: config.grid_size,
            storage,
        }
    }

    /// Empty store over fresh in-memory storage with default config.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStorage::new()), &Config::default())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Live shape list in z-order (index 0 is the bottom).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn selection(&self) -> &HashSet<ShapeId> {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &ShapeId) -> bool {
        self.selection.contains(id)
    }

    /// Selected shapes in z-order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| self.selection.contains(&s.id))
    }

    #[must_use]
    pub fn clipboard(&self) -> &[Shape] {
        &self.clipboard
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Pan and zoom are view state, never history-tracked.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[must_use]
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    #[must_use]
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// `v` rounded to the grid when snapping is on, else unchanged.
    #[must_use]
    pub fn snap(&self, v: f64) -> f64 {
        if self.snap_to_grid { geometry::snap(v, self.grid_size) } else { v }
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =========================================================================
    // Shape list writes
    // =========================================================================

    /// Replace the live list without creating an undo point.
    pub fn set_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.prune_selection();
        self.persist_shapes();
    }

    /// Record `shapes` as an undoable commit and make it the live list.
    pub fn push_history(&mut self, shapes: Vec<Shape>) {
        self.history.push(&shapes);
        self.shapes = shapes;
        self.prune_selection();
        self.persist_shapes();
        debug!(count = self.shapes.len(), cursor = self.history.cursor(), "history commit");
    }

    /// Commit the live list only if it differs from the snapshot at the
    /// history cursor. Returns whether a commit happened.
    pub fn commit_if_changed(&mut self) -> bool {
        if self.history.current() == self.shapes.as_slice() {
            return false;
        }
        let shapes = self.shapes.clone();
        self.push_history(shapes);
        true
    }

    pub fn undo(&mut self) {
        if let Some(shapes) = self.history.undo() {
            self.restore(shapes);
        }
    }

    pub fn redo(&mut self) {
        if let Some(shapes) = self.history.redo() {
            self.restore(shapes);
        }
    }

    fn restore(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.selection.clear();
        self.persist_shapes();
        debug!(count = self.shapes.len(), cursor = self.history.cursor(), "history moved");
    }

    /// Replace the whole list with imported shapes as one undoable commit.
    ///
    /// Duplicate ids are reassigned so ids stay unique.
    pub fn import_shapes(&mut self, mut shapes: Vec<Shape>) {
        let mut seen = HashSet::new();
        for shape in &mut shapes {
            if !seen.insert(shape.id.clone()) {
                warn!(id = %shape.id, "duplicate id in import; assigning a new one");
                shape.id = ShapeId::generate();
                seen.insert(shape.id.clone());
            }
        }
        self.selection.clear();
        self.push_history(shapes);
        info!(count = self.shapes.len(), "shapes imported");
    }

    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.push_history(Vec::new());
        info!("canvas cleared");
    }

    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let next = self.shapes.iter().filter(|s| !self.selection.contains(&s.id)).cloned().collect();
        self.selection.clear();
        self.push_history(next);
    }

    /// Delete one shape by id as an undoable commit.
    pub fn delete_shape(&mut self, id: &ShapeId) {
        if self.shape(id).is_none() {
            return;
        }
        let next = self.shapes.iter().filter(|s| &s.id != id).cloned().collect();
        self.push_history(next);
    }

    /// Move every selected shape by a canvas-space delta, live.
    ///
    /// Not an undo point by itself; callers close a run of nudges with
    /// [`Store::commit_if_changed`].
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) {
        if self.selection.is_empty() {
            return;
        }
        for shape in &mut self.shapes {
            if self.selection.contains(&shape.id) {
                shape.translate(dx, dy);
            }
        }
        self.persist_shapes();
    }

    // =========================================================================
    // Layer order
    // =========================================================================

    pub fn bring_to_front(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let (selected, rest): (Vec<Shape>, Vec<Shape>) =
            self.shapes.iter().cloned().partition(|s| self.selection.contains(&s.id));
        self.commit_order(rest.into_iter().chain(selected).collect());
    }

    pub fn send_to_back(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let (selected, rest): (Vec<Shape>, Vec<Shape>) =
            self.shapes.iter().cloned().partition(|s| self.selection.contains(&s.id));
        self.commit_order(selected.into_iter().chain(rest).collect());
    }

    /// Move each selected shape one step up past an unselected neighbor.
    pub fn bring_forward(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let mut next = self.shapes.clone();
        // Scan top-down so a shape already moved up is not swapped again.
        for i in (0..next.len().saturating_sub(1)).rev() {
            if self.selection.contains(&next[i].id) && !self.selection.contains(&next[i + 1].id) {
                next.swap(i, i + 1);
            }
        }
        self.commit_order(next);
    }

    /// Move each selected shape one step down past an unselected neighbor.
    pub fn send_backward(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let mut next = self.shapes.clone();
        for i in 1..next.len() {
            if self.selection.contains(&next[i].id) && !self.selection.contains(&next[i - 1].id) {
                next.swap(i, i - 1);
            }
        }
        self.commit_order(next);
    }

    /// Commit a reordered list unless the order did not change.
    fn commit_order(&mut self, next: Vec<Shape>) {
        if next == self.shapes {
            return;
        }
        self.push_history(next);
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    pub fn copy_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.clipboard = self.selected_shapes().cloned().collect();
    }

    /// Append offset copies of the clipboard and select them.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let pasted: Vec<Shape> = self
            .clipboard
            .iter()
            .map(|s| {
                let mut copy = s.clone();
                copy.refresh_identity();
                copy.translate(PASTE_OFFSET, PASTE_OFFSET);
                copy
            })
            .collect();
        let ids: HashSet<ShapeId> = pasted.iter().map(|s| s.id.clone()).collect();

        let mut next = self.shapes.clone();
        next.extend(pasted);
        self.push_history(next);
        self.selection = ids;
    }

    /// Flip the border flag of selected image shapes.
    pub fn toggle_selected_border(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let mut next = self.shapes.clone();
        let mut touched = false;
        for shape in &mut next {
            if !self.selection.contains(&shape.id) {
                continue;
            }
            if let ShapeKind::Image { no_border, .. } = &mut shape.kind {
                *no_border = !*no_border;
                touched = true;
            }
        }
        if touched {
            self.push_history(next);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Replace the selection. Unknown ids are dropped.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        let existing: HashSet<&ShapeId> = self.shapes.iter().map(|s| &s.id).collect();
        let next: HashSet<ShapeId> = ids.into_iter().filter(|id| existing.contains(id)).collect();
        self.selection = next;
    }

    pub fn select_all(&mut self) {
        self.selection = self.shapes.iter().map(|s| s.id.clone()).collect();
    }

    /// Add `id` to the selection, or remove it if already selected.
    pub fn toggle_selection(&mut self, id: &ShapeId) {
        if !self.selection.remove(id) && self.shape(id).is_some() {
            self.selection.insert(id.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn prune_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let existing: HashSet<&ShapeId> = self.shapes.iter().map(|s| &s.id).collect();
        self.selection.retain(|id| existing.contains(id));
    }

    // =========================================================================
    // Tool, style, and board settings
    // =========================================================================

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.style.stroke_color = color.into();
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.style.stroke_width = width;
    }

    pub fn set_fill_color(&mut self, color: impl Into<String>) {
        self.style.fill_color = color.into();
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.style.text.font_size = size;
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.style.text.font_family = family.into();
    }

    pub fn set_font_weight(&mut self, weight: impl Into<String>) {
        self.style.text.font_weight = weight.into();
    }

    pub fn set_font_style(&mut self, style: impl Into<String>) {
        self.style.text.font_style = style.into();
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.style.text.text_align = align;
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
        if let Err(e) = persist::save_json(self.storage.as_mut(), BACKGROUND_KEY, &self.background) {
            warn!(error = %e, "failed to persist background");
        }
    }

    pub fn set_snap_to_grid(&mut self, on: bool) {
        self.snap_to_grid = on;
        if let Err(e) = persist::save_json(self.storage.as_mut(), SNAP_KEY, &on) {
            warn!(error = %e, "failed to persist snap flag");
        }
    }

    fn persist_shapes(&mut self) {
        if let Err(e) = persist::save_json(self.storage.as_mut(), SHAPES_KEY, &self.shapes) {
            warn!(error = %e, count = self.shapes.len(), "failed to persist shapes");
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::in_memory()
    }
}
