//! Bounded undo/redo history of full shape-list snapshots.
//!
//! Every snapshot is an independent structural copy: nothing pushed into or
//! read out of the history aliases the live shape list. The cursor always
//! points at a valid snapshot; the snapshot under it mirrors the last
//! committed state.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::MAX_HISTORY;
use crate::shape::Shape;

/// Linear snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Shape>>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Start a history whose only snapshot is `initial`.
    ///
    /// `limit` is clamped to at least one snapshot.
    #[must_use]
    pub fn new(initial: &[Shape], limit: usize) -> Self {
        Self { snapshots: vec![initial.to_vec()], cursor: 0, limit: limit.max(1) }
    }

    /// Record a new snapshot after the cursor.
    ///
    /// Any redo tail is discarded, and the oldest snapshots are evicted once
    /// the limit is exceeded.
    pub fn push(&mut self, shapes: &[Shape]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(shapes.to_vec());
        if self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(..excess);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot, returning a copy of it. `None` at the start.
    pub fn undo(&mut self) -> Option<Vec<Shape>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].clone())
    }

    /// Step forward one snapshot, returning a copy of it. `None` at the end.
    pub fn redo(&mut self) -> Option<Vec<Shape>> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor].clone())
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &[Shape] {
        &self.snapshots[self.cursor]
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&[], MAX_HISTORY)
    }
}
