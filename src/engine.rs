//! Interaction engine: turns pointer, wheel, and keyboard events into store
//! commands.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host forwards raw events in screen space. [`EngineCore`] converts them
//! to canvas space, resolves each press into exactly one [`Gesture`], writes
//! live previews through [`Store::set_shapes`] while the gesture runs, and
//! commits once when it ends. Handlers return [`Action`]s telling the host
//! what to do next (redraw, change cursor, show a notice, show or hide the
//! text overlay).
//!
//! PRESS PRIORITY
//! ==============
//! 1. Middle button, or primary with Alt: pan.
//! 2. Select tool: resize handle, then shape hit (Shift toggles, otherwise
//!    drag), then empty space (lasso).
//! 3. Eraser: delete under the pointer, then keep erasing while dragged.
//! 4. Text: open the overlay.
//! 5. Any other tool: draw.
//!
//! [`Engine`] pairs the core with a [`Renderer`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::debug;

use crate::camera::{Point, clamp_zoom};
use crate::consts::{
    FIT_MARGIN, FIT_MAX_ZOOM, NUDGE_STEP, NUDGE_STEP_FAST, STEP_ZOOM_IN, STEP_ZOOM_OUT, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::geometry::{self, BoundingBox, ResizeAnchor};
use crate::ingest::{self, AssetLoader, DroppedFile};
use crate::input::{Button, Gesture, Key, Modifiers, ShapeOrigin, Tool, WheelDelta};
use crate::library::LibraryItem;
use crate::render::{self, ExportError, Renderer, Scene, Snapshot};
use crate::shape::{Shape, ShapeId};
use crate::store::Store;
use crate::text_edit::{TextEditor, TextKeyOutcome};

static NO_SELECTION: LazyLock<HashSet<ShapeId>> = LazyLock::new(HashSet::new);

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    SetCursor(&'static str),
    /// Short user-facing notice ("Undo", "Copied", ...).
    Notify(String),
    /// Show the text overlay at `screen` prefilled with `value`.
    TextEditOpened { screen: Point, value: String },
    /// Hide the text overlay.
    TextEditClosed,
}

/// Core engine state: everything except the renderer.
#[derive(Default)]
pub struct EngineCore {
    pub store: Store,
    pub text: TextEditor,
    pub gesture: Gesture,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store, ..Self::default() }
    }

    /// Update the viewport size in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// CSS cursor name for the current state.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if matches!(self.gesture, Gesture::Panning { .. }) {
            return "grabbing";
        }
        match self.store.tool() {
            Tool::Eraser => "cell",
            Tool::Select => "default",
            _ => "crosshair",
        }
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.store.set_tool(tool);
        vec![Action::SetCursor(self.cursor())]
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        if button == Button::Middle || (button == Button::Primary && mods.alt) {
            self.gesture = Gesture::Panning { origin_screen: screen, origin_pan: self.store.camera().pan() };
            debug!("pan started");
            return vec![Action::SetCursor(self.cursor())];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let mut actions = Vec::new();
        let tool = self.store.tool();
        if self.text.is_open() {
            self.text.commit(&mut self.store);
            actions.extend([Action::TextEditClosed, Action::RenderNeeded]);
            if tool == Tool::Text {
                return actions;
            }
        }

        let canvas = self.store.camera().screen_to_canvas(screen);
        match tool {
            Tool::Select => self.press_select(screen, canvas, mods),
            Tool::Eraser => {
                erase_at(&mut self.store, canvas, true);
                self.gesture = Gesture::Erasing;
            }
            Tool::Text => {
                self.text.open_new(canvas, screen);
                actions.push(Action::TextEditOpened { screen, value: String::new() });
            }
            Tool::Freehand | Tool::Rect | Tool::Ellipse | Tool::Arrow | Tool::Line => self.press_draw(tool, canvas),
        }
        debug!(gesture = self.gesture.name(), "pointer down");
        actions.push(Action::RenderNeeded);
        actions
    }

    fn press_select(&mut self, screen: Point, canvas: Point, mods: Modifiers) {
        let store = &mut self.store;
        if let Some(anchor) = geometry::handle_at(screen, store.selection(), store.shapes(), store.camera()) {
            let origins = ShapeOrigin::capture_where(store.shapes(), |id| store.is_selected(id));
            self.gesture = Gesture::Resizing { anchor, start_screen: screen, origins };
            return;
        }

        let Some(index) = geometry::topmost_hit(canvas, store.shapes()) else {
            store.clear_selection();
            self.gesture = Gesture::Lassoing { path: vec![screen] };
            return;
        };
        let id = store.shapes()[index].id.clone();
        if mods.shift {
            store.toggle_selection(&id);
            return;
        }
        if !store.is_selected(&id) {
            store.set_selection([id]);
        }
        let origins = ShapeOrigin::capture_where(store.shapes(), |id| store.is_selected(id));
        self.gesture = Gesture::Dragging { start_screen: screen, origins };
    }

    fn press_draw(&mut self, tool: Tool, canvas: Point) {
        let Some(kind) = tool.drawn_kind() else {
            return;
        };
        let anchor = Point::new(self.store.snap(canvas.x), self.store.snap(canvas.y));
        let mut shape = Shape::new(kind, anchor, self.store.style());
        if let Some(points) = shape.points_mut() {
            points.push(anchor);
        }
        self.gesture = Gesture::Drawing { shape };
    }

    pub fn on_pointer_move(&mut self, screen: Point, _mods: Modifiers) -> Vec<Action> {
        let camera = *self.store.camera();
        let canvas = camera.screen_to_canvas(screen);
        match &mut self.gesture {
            Gesture::None => return Vec::new(),
            Gesture::Panning { origin_screen, origin_pan } => {
                let pan = origin_pan.offset(screen.x - origin_screen.x, screen.y - origin_screen.y);
                self.store.camera_mut().set_pan(pan);
            }
            Gesture::Resizing { anchor, start_screen, origins } => {
                let dx = (screen.x - start_screen.x) / camera.zoom;
                let dy = (screen.y - start_screen.y) / camera.zoom;
                apply_resize(&mut self.store, *anchor, origins, dx, dy);
            }
            Gesture::Lassoing { path } => path.push(screen),
            Gesture::Dragging { start_screen, origins } => {
                let dx = (screen.x - start_screen.x) / camera.zoom;
                let dy = (screen.y - start_screen.y) / camera.zoom;
                apply_drag(&mut self.store, origins, dx, dy);
            }
            Gesture::Drawing { shape } => {
                if let Some(points) = shape.points_mut() {
                    points.push(canvas);
                } else {
                    shape.w = self.store.snap(canvas.x) - shape.x;
                    shape.h = self.store.snap(canvas.y) - shape.y;
                }
            }
            Gesture::Erasing => {
                if !erase_at(&mut self.store, canvas, false) {
                    return Vec::new();
                }
            }
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button, _mods: Modifiers) -> Vec<Action> {
        let gesture = std::mem::take(&mut self.gesture);
        debug!(gesture = gesture.name(), "pointer up");
        match gesture {
            Gesture::None => return Vec::new(),
            Gesture::Panning { .. } => return vec![Action::SetCursor(self.cursor())],
            Gesture::Resizing { .. } | Gesture::Dragging { .. } | Gesture::Erasing => {
                self.store.commit_if_changed();
            }
            Gesture::Lassoing { path } => self.finish_lasso(&path),
            Gesture::Drawing { shape } => self.finish_drawing(shape),
        }
        vec![Action::RenderNeeded]
    }

    /// The pointer left the canvas: end the gesture as if released.
    pub fn on_pointer_leave(&mut self, screen: Point) -> Vec<Action> {
        self.on_pointer_up(screen, Button::Primary, Modifiers::default())
    }

    fn finish_lasso(&mut self, path: &[Point]) {
        if path.len() < 3 {
            return;
        }
        let (mut min, mut max) = (path[0], path[0]);
        for p in path {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        let camera = self.store.camera();
        let area = BoundingBox::from_corners(camera.screen_to_canvas(min), camera.screen_to_canvas(max));
        let hits: Vec<ShapeId> = self
            .store
            .shapes()
            .iter()
            .filter(|s| area.contains_box(&geometry::bounding_box(s)))
            .map(|s| s.id.clone())
            .collect();
        if !hits.is_empty() {
            debug!(count = hits.len(), "lasso selected");
            self.store.set_selection(hits);
        }
    }

    fn finish_drawing(&mut self, mut shape: Shape) {
        if shape.is_degenerate() {
            debug!(kind = shape.kind.name(), "discarded tiny shape");
            return;
        }
        shape.normalize();
        let id = shape.id.clone();
        let mut next = self.store.shapes().to_vec();
        next.push(shape);
        self.store.push_history(next);
        if self.store.tool().selects_drawn_shape() {
            self.store.set_selection([id]);
        }
    }

    /// Double-click: edit the text shape under the pointer.
    pub fn on_double_click(&mut self, screen: Point) -> Vec<Action> {
        if self.text.is_open() {
            return Vec::new();
        }
        let canvas = self.store.camera().screen_to_canvas(screen);
        if !self.text.open_existing(&mut self.store, canvas, screen) {
            return Vec::new();
        }
        let value = self.text.overlay().map(|o| o.value.clone()).unwrap_or_default();
        vec![Action::TextEditOpened { screen, value }, Action::RenderNeeded]
    }

    // =========================================================================
    // Wheel and view controls
    // =========================================================================

    /// Ctrl/Cmd + wheel zooms around the pointer; plain wheel scrolls the pan.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, mods: Modifiers) -> Vec<Action> {
        let camera = self.store.camera_mut();
        if mods.command() {
            let factor = if delta.dy > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
            camera.zoom_at(screen, factor);
        } else {
            camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let camera = self.store.camera_mut();
        camera.set_zoom(camera.zoom * STEP_ZOOM_IN);
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let camera = self.store.camera_mut();
        camera.set_zoom(camera.zoom * STEP_ZOOM_OUT);
        vec![Action::RenderNeeded]
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        let camera = self.store.camera_mut();
        camera.set_zoom(1.0);
        camera.set_pan(Point::new(0.0, 0.0));
        vec![Action::RenderNeeded]
    }

    /// Zoom and pan so every shape fits the viewport with a margin.
    pub fn fit_content(&mut self) -> Vec<Action> {
        let (w, h) = (self.viewport_width, self.viewport_height);
        if w <= 0.0 || h <= 0.0 {
            return Vec::new();
        }
        let Some(bb) = geometry::combined_bounding_box(self.store.shapes()) else {
            return Vec::new();
        };
        let zoom = clamp_zoom((w / (bb.w + FIT_MARGIN)).min(h / (bb.h + FIT_MARGIN)).min(FIT_MAX_ZOOM));
        let center = bb.center();
        let camera = self.store.camera_mut();
        camera.set_zoom(zoom);
        camera.set_pan(Point::new(w / 2.0 - center.x * zoom, h / 2.0 - center.y * zoom));
        vec![Action::RenderNeeded]
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    pub fn on_key_down(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        if self.text.is_open() {
            return match self.text.handle_key(&mut self.store, key, mods) {
                TextKeyOutcome::Committed(_) | TextKeyOutcome::Cancelled => {
                    vec![Action::TextEditClosed, Action::RenderNeeded]
                }
                TextKeyOutcome::Ignored => Vec::new(),
            };
        }

        if mods.command() {
            return self.command_shortcut(key, mods);
        }

        if let Some(tool) = Tool::from_shortcut(key.as_str()) {
            return self.set_tool(tool);
        }

        let has_selection = !self.store.selection().is_empty();
        match key.as_str() {
            "Delete" | "Backspace" => self.store.delete_selected(),
            "Escape" => {
                self.store.clear_selection();
                self.store.set_tool(Tool::Select);
                return vec![Action::SetCursor(self.cursor()), Action::RenderNeeded];
            }
            // Shift turns the brackets into braces on most layouts.
            "]" | "}" if has_selection => {
                let notice = if mods.shift || key.as_str() == "}" {
                    self.store.bring_to_front();
                    "Bring to Front"
                } else {
                    self.store.bring_forward();
                    "Bring Forward"
                };
                return vec![Action::Notify(notice.into()), Action::RenderNeeded];
            }
            "[" | "{" if has_selection => {
                let notice = if mods.shift || key.as_str() == "{" {
                    self.store.send_to_back();
                    "Send to Back"
                } else {
                    self.store.send_backward();
                    "Send Backward"
                };
                return vec![Action::Notify(notice.into()), Action::RenderNeeded];
            }
            _ => {
                let Some((ux, uy)) = key.arrow_direction().filter(|_| has_selection) else {
                    return Vec::new();
                };
                let step = if mods.shift { NUDGE_STEP_FAST } else { NUDGE_STEP };
                self.store.nudge_selected(ux * step, uy * step);
            }
        }
        vec![Action::RenderNeeded]
    }

    fn command_shortcut(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        let notice = match key.as_str().to_ascii_lowercase().as_str() {
            "z" if !mods.shift => {
                self.store.undo();
                "Undo"
            }
            "z" | "y" => {
                self.store.redo();
                "Redo"
            }
            "a" => {
                self.store.select_all();
                return vec![Action::RenderNeeded];
            }
            "c" => {
                self.store.copy_selected();
                "Copied"
            }
            "v" => {
                self.store.paste();
                "Pasted"
            }
            _ => return Vec::new(),
        };
        vec![Action::Notify(notice.into()), Action::RenderNeeded]
    }

    /// Releasing an arrow key closes a run of nudges as one undo step.
    pub fn on_key_up(&mut self, key: &Key, _mods: Modifiers) -> Vec<Action> {
        if key.arrow_direction().is_some() && self.store.commit_if_changed() {
            debug!("nudge committed");
        }
        Vec::new()
    }

    // =========================================================================
    // Text overlay
    // =========================================================================

    /// Mirror the overlay input's value.
    pub fn set_text_value(&mut self, value: impl Into<String>) {
        self.text.set_value(value);
    }

    /// The overlay lost focus: commit it.
    pub fn commit_text(&mut self) -> Vec<Action> {
        if !self.text.is_open() {
            return Vec::new();
        }
        self.text.commit(&mut self.store);
        vec![Action::TextEditClosed, Action::RenderNeeded]
    }

    pub fn cancel_text(&mut self) -> Vec<Action> {
        if !self.text.is_open() {
            return Vec::new();
        }
        self.text.cancel(&mut self.store);
        vec![Action::TextEditClosed, Action::RenderNeeded]
    }

    // =========================================================================
    // Library and drops
    // =========================================================================

    /// Place a library item at the center of the viewport and select it.
    pub fn add_library_shape(&mut self, item: &LibraryItem) -> Vec<Action> {
        let center = self.store.camera().screen_to_canvas(self.viewport_center());
        let shape = item.place(center, self.store.style());
        let id = shape.id.clone();
        let mut next = self.store.shapes().to_vec();
        next.push(shape);
        self.store.push_history(next);
        self.store.set_selection([id]);
        vec![Action::Notify(format!("Added {}", item.name)), Action::RenderNeeded]
    }

    /// Start loading dropped files at screen point `screen`.
    ///
    /// The returned future borrows nothing from the engine; pass its output
    /// to [`EngineCore::finish_drop`] when it resolves.
    pub fn prepare_drop<'a>(
        &self,
        loader: &'a dyn AssetLoader,
        files: &'a [DroppedFile],
        screen: Point,
    ) -> impl Future<Output = Vec<Shape>> + use<'a> {
        let drop_at = self.store.camera().screen_to_canvas(screen);
        let style = self.store.style().clone();
        async move { ingest::prepare_batch(loader, files, drop_at, &style).await }
    }

    /// Commit a loaded drop batch onto the current shape list.
    pub fn finish_drop(&mut self, batch: Vec<Shape>) -> Vec<Action> {
        match ingest::commit_batch(&mut self.store, batch) {
            0 => Vec::new(),
            count => vec![Action::Notify(ingest::added_notice(count)), Action::RenderNeeded],
        }
    }

    // =========================================================================
    // Scene
    // =========================================================================

    /// Read-only view of everything visible.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            shapes: self.store.shapes(),
            preview: match &self.gesture {
                Gesture::Drawing { shape } => Some(shape),
                _ => None,
            },
            selection: self.store.selection(),
            selection_bounds: geometry::combined_bounding_box(self.store.selected_shapes()),
            lasso: match &self.gesture {
                Gesture::Lassoing { path } => Some(path.as_slice()),
                _ => None,
            },
            camera: self.store.camera(),
            background: self.store.background(),
            text_overlay: self.text.overlay(),
        }
    }

    /// The scene as exported: shapes and background only, with no
    /// selection, lasso, preview, or overlay.
    #[must_use]
    pub fn export_scene(&self) -> Scene<'_> {
        Scene {
            preview: None,
            selection: &NO_SELECTION,
            selection_bounds: None,
            lasso: None,
            text_overlay: None,
            ..self.scene()
        }
    }
}

/// Remove every shape under `canvas`. A press commits; a drag writes live.
/// Returns whether anything was removed.
fn erase_at(store: &mut Store, canvas: Point, commit: bool) -> bool {
    let before = store.shapes().len();
    let next: Vec<Shape> = store.shapes().iter().filter(|s| !geometry::point_in_shape(canvas, s)).cloned().collect();
    if next.len() == before {
        return false;
    }
    if commit {
        store.push_history(next);
    } else {
        store.set_shapes(next);
    }
    true
}

/// Move selected shapes to their origin plus the delta, snapping per axis.
fn apply_drag(store: &mut Store, origins: &HashMap<ShapeId, ShapeOrigin>, dx: f64, dy: f64) {
    let mut next = store.shapes().to_vec();
    for shape in &mut next {
        let Some(origin) = origins.get(&shape.id).filter(|_| store.is_selected(&shape.id)) else {
            continue;
        };
        match (&origin.points, shape.points_mut()) {
            (Some(orig_points), Some(points)) => {
                let (fdx, fdy) = (store.snap(dx), store.snap(dy));
                *points = orig_points.iter().map(|p| p.offset(fdx, fdy)).collect();
                shape.x = origin.x + fdx;
                shape.y = origin.y + fdy;
            }
            _ => {
                shape.x = store.snap(origin.x + dx);
                shape.y = store.snap(origin.y + dy);
            }
        }
    }
    store.set_shapes(next);
}

/// Resize selected shapes from their origins by a canvas-space delta.
fn apply_resize(store: &mut Store, anchor: ResizeAnchor, origins: &HashMap<ShapeId, ShapeOrigin>, dx: f64, dy: f64) {
    let grid = store.snap_to_grid().then(|| store.grid_size());
    let mut next = store.shapes().to_vec();
    for shape in &mut next {
        let Some(origin) = origins.get(&shape.id).filter(|_| store.is_selected(&shape.id)) else {
            continue;
        };
        match &origin.points {
            Some(orig_points) => resize_points(shape, origin, orig_points, anchor, dx, dy, grid),
            None => {
                // Handles sit on the normalized box; a reversed line keeps
                // its direction, so its start point is the box's far edge.
                let (bx, bw) = if origin.w < 0.0 { (origin.x + origin.w, -origin.w) } else { (origin.x, origin.w) };
                let (by, bh) = if origin.h < 0.0 { (origin.y + origin.h, -origin.h) } else { (origin.y, origin.h) };
                let [x, y, w, h] = resized(anchor, [bx, by, bw, bh], dx, dy, grid);
                (shape.x, shape.w) = if origin.w < 0.0 { (x + w, -w) } else { (x, w) };
                (shape.y, shape.h) = if origin.h < 0.0 { (y + h, -h) } else { (y, h) };
            }
        }
    }
    store.set_shapes(next);
}

/// Freehand strokes resize by scaling their samples into the resized
/// extent of the original samples.
fn resize_points(
    shape: &mut Shape,
    origin: &ShapeOrigin,
    orig_points: &[Point],
    anchor: ResizeAnchor,
    dx: f64,
    dy: f64,
    grid: Option<f64>,
) {
    let Some(ob) = geometry::points_bounds(orig_points) else {
        return;
    };
    let [nx, ny, nw, nh] = resized(anchor, [ob.x, ob.y, ob.w, ob.h], dx, dy, grid);
    let sx = if ob.w > 0.0 { nw / ob.w } else { 1.0 };
    let sy = if ob.h > 0.0 { nh / ob.h } else { 1.0 };
    if let Some(points) = shape.points_mut() {
        *points = orig_points.iter().map(|p| Point::new(nx + (p.x - ob.x) * sx, ny + (p.y - ob.y) * sy)).collect();
    }
    shape.x = origin.x + (nx - ob.x);
    shape.y = origin.y + (ny - ob.y);
}

/// Apply a handle drag to `[x, y, w, h]`.
///
/// West/north handles move the position and change the size oppositely so
/// the far edge stays put. With a grid, both edges snap independently and
/// the size is derived from the snapped edges.
fn resized(anchor: ResizeAnchor, [x, y, w, h]: [f64; 4], dx: f64, dy: f64, grid: Option<f64>) -> [f64; 4] {
    let (mut nx, mut ny, mut nw, mut nh) = (x, y, w, h);
    if anchor.moves_east() {
        nw = w + dx;
    }
    if anchor.moves_south() {
        nh = h + dy;
    }
    if anchor.moves_west() {
        nx = x + dx;
        nw = w - dx;
    }
    if anchor.moves_north() {
        ny = y + dy;
        nh = h - dy;
    }
    if let Some(grid) = grid {
        let (sx, sy) = (geometry::snap(nx, grid), geometry::snap(ny, grid));
        nw = geometry::snap(nx + nw, grid) - sx;
        nh = geometry::snap(ny + nh, grid) - sy;
        nx = sx;
        ny = sy;
    }
    [nx, ny, nw, nh]
}

/// The full engine: the core plus a renderer.
pub struct Engine<R: Renderer> {
    renderer: R,
    pub core: EngineCore,
}

impl<R: Renderer> Engine<R> {
    #[must_use]
    pub fn new(renderer: R, store: Store) -> Self {
        Self { renderer, core: EngineCore::new(store) }
    }

    /// Draw the current scene.
    ///
    /// # Errors
    ///
    /// Whatever the renderer reports.
    pub fn render(&mut self) -> Result<(), R::Error> {
        self.renderer.draw(&self.core.scene())
    }

    /// Forward `actions` to the host, drawing first if any asks for a redraw.
    ///
    /// # Errors
    ///
    /// Whatever the renderer reports.
    pub fn settle(&mut self, actions: Vec<Action>) -> Result<Vec<Action>, R::Error> {
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(actions)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen, button, mods)
    }

    pub fn on_pointer_move(&mut self, screen: Point, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen, mods)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button, mods: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen, button, mods)
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, mods: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen, delta, mods)
    }

    pub fn on_key_down(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, mods)
    }

    pub fn on_key_up(&mut self, key: &Key, mods: Modifiers) -> Vec<Action> {
        self.core.on_key_up(key, mods)
    }
}

impl<R> Engine<R>
where
    R: Snapshot,
    R::Error: std::fmt::Debug,
{
    /// Rasterize the board and encode it as PNG.
    ///
    /// # Errors
    ///
    /// Snapshot or encoding failures.
    pub fn export_png(&mut self) -> Result<Vec<u8>, ExportError<R::Error>> {
        let pixels = self.renderer.snapshot(&self.core.export_scene()).map_err(ExportError::Snapshot)?;
        let png = render::encode_png(&pixels)?;
        debug!(bytes = png.len(), "png exported");
        Ok(png)
    }
}
