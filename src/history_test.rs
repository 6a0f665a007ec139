#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;
use crate::shape::{ShapeKind, Style};

fn rect(x: f64) -> Shape {
    Shape::new(ShapeKind::Rect, Point::new(x, 0.0), &Style::default()).with_size(10.0, 10.0)
}

fn stroke() -> Shape {
    Shape::new(ShapeKind::Freehand { points: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)] }, Point::default(), &Style::default())
}

// =============================================================
// Basics
// =============================================================

#[test]
fn new_history_has_one_snapshot() {
    let h = History::new(&[rect(0.0)], 60);
    assert_eq!(h.len(), 1);
    assert_eq!(h.cursor(), 0);
    assert!(!h.is_empty());
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn undo_at_start_is_noop() {
    let mut h = History::default();
    assert!(h.undo().is_none());
    assert_eq!(h.cursor(), 0);
}

#[test]
fn redo_at_end_is_noop() {
    let mut h = History::default();
    h.push(&[rect(0.0)]);
    assert!(h.redo().is_none());
    assert_eq!(h.cursor(), 1);
}

#[test]
fn n_undos_then_n_redos_round_trip() {
    let mut h = History::default();
    let mut live: Vec<Shape> = Vec::new();
    let mut states = vec![live.clone()];
    for i in 0..5 {
        live.push(rect(f64::from(i) * 20.0));
        h.push(&live);
        states.push(live.clone());
    }
    for expected in states.iter().rev().skip(1) {
        assert_eq!(&h.undo().unwrap(), expected);
    }
    assert!(h.undo().is_none());
    assert!(h.current().is_empty());
    for expected in states.iter().skip(1) {
        assert_eq!(&h.redo().unwrap(), expected);
    }
    assert_eq!(h.current(), live.as_slice());
}

// =============================================================
// Truncation and bounds
// =============================================================

#[test]
fn push_after_undo_drops_redo_tail() {
    let mut h = History::default();
    h.push(&[rect(0.0)]);
    h.push(&[rect(0.0), rect(20.0)]);
    h.undo();
    h.push(&[rect(99.0)]);
    assert!(!h.can_redo());
    assert!(h.redo().is_none());
    assert_eq!(h.len(), 3);
}

#[test]
fn length_never_exceeds_limit() {
    let mut h = History::default();
    for i in 0..200 {
        h.push(&[rect(f64::from(i))]);
        assert!(h.len() <= MAX_HISTORY);
    }
    assert_eq!(h.len(), MAX_HISTORY);
    assert_eq!(h.cursor(), MAX_HISTORY - 1);
    assert_eq!(h.current()[0].x, 199.0);
}

#[test]
fn eviction_drops_oldest() {
    let mut h = History::new(&[], 3);
    h.push(&[rect(1.0)]);
    h.push(&[rect(2.0)]);
    h.push(&[rect(3.0)]);
    assert_eq!(h.len(), 3);
    h.undo();
    h.undo();
    assert!(h.undo().is_none());
    assert_eq!(h.current()[0].x, 1.0);
}

#[test]
fn zero_limit_keeps_one_snapshot() {
    let mut h = History::new(&[], 0);
    h.push(&[rect(1.0)]);
    assert_eq!(h.len(), 1);
    assert!(!h.can_undo());
}

// =============================================================
// Independence
// =============================================================

#[test]
fn pushed_snapshot_does_not_alias_live_list() {
    let mut h = History::default();
    let mut live = vec![stroke()];
    h.push(&live);
    live[0].points_mut().unwrap().push(Point::new(9.0, 9.0));
    live[0].x = 500.0;
    assert_eq!(h.current()[0].points().unwrap().len(), 2);
    assert_eq!(h.current()[0].x, 0.0);
}

#[test]
fn undone_snapshot_does_not_alias_history() {
    let mut h = History::default();
    h.push(&[stroke()]);
    h.push(&[]);
    let mut restored = h.undo().unwrap();
    restored[0].translate(50.0, 50.0);
    assert_eq!(h.current()[0].points().unwrap()[0], Point::new(0.0, 0.0));
}
