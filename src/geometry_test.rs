#![allow(clippy::float_cmp)]

use super::*;
use crate::shape::Style;

fn shape(kind: ShapeKind, x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(kind, Point::new(x, y), &Style::default()).with_size(w, h)
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    shape(ShapeKind::Rect, x, y, w, h)
}

fn stroke(points: &[(f64, f64)]) -> Shape {
    let points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    shape(ShapeKind::Freehand { points }, 0.0, 0.0, 0.0, 0.0)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// bounding_box
// =============================================================

#[test]
fn box_of_rect_uses_absolute_size() {
    assert_eq!(bounding_box(&rect(10.0, 10.0, -5.0, 20.0)), BoundingBox::new(10.0, 10.0, 5.0, 20.0));
}

#[test]
fn box_of_line_normalizes_direction() {
    let line = shape(ShapeKind::Line, 100.0, 50.0, -60.0, -30.0);
    assert_eq!(bounding_box(&line), BoundingBox::new(40.0, 20.0, 60.0, 30.0));
}

#[test]
fn box_of_freehand_spans_points() {
    let s = stroke(&[(5.0, 9.0), (-3.0, 4.0), (12.0, 1.0)]);
    assert_eq!(bounding_box(&s), BoundingBox::new(-3.0, 1.0, 15.0, 8.0));
}

#[test]
fn box_of_empty_freehand_is_zero() {
    assert_eq!(bounding_box(&stroke(&[])), BoundingBox::default());
}

#[test]
fn combined_box_unions_shapes() {
    let shapes = [rect(0.0, 0.0, 10.0, 10.0), rect(100.0, 50.0, 10.0, 20.0)];
    assert_eq!(combined_bounding_box(&shapes), Some(BoundingBox::new(0.0, 0.0, 110.0, 70.0)));
}

#[test]
fn combined_box_of_nothing_is_none() {
    let shapes: [Shape; 0] = [];
    assert!(combined_bounding_box(&shapes).is_none());
}

#[test]
fn box_contains_and_corners() {
    let outer = BoundingBox::from_corners(pt(50.0, 50.0), pt(-10.0, -10.0));
    assert_eq!(outer, BoundingBox::new(-10.0, -10.0, 60.0, 60.0));
    assert!(outer.contains_box(&BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    assert!(!outer.contains_box(&BoundingBox::new(45.0, 45.0, 10.0, 10.0)));
}

// =============================================================
// point_in_shape
// =============================================================

#[test]
fn rect_hit_inside_and_miss_outside() {
    let r = rect(10.0, 10.0, 100.0, 50.0);
    assert!(point_in_shape(pt(15.0, 15.0), &r));
    assert!(!point_in_shape(pt(0.0, 0.0), &r));
}

#[test]
fn rect_hit_within_padding() {
    let r = rect(10.0, 10.0, 100.0, 50.0);
    assert!(point_in_shape(pt(3.0, 30.0), &r));
    assert!(!point_in_shape(pt(1.0, 30.0), &r));
}

#[test]
fn thick_stroke_widens_padding() {
    let mut r = rect(10.0, 10.0, 100.0, 50.0);
    r.stroke_width = 6.0;
    assert!(point_in_shape(pt(0.0, 30.0), &r));
}

#[test]
fn line_hit_near_segment() {
    let line = shape(ShapeKind::Line, 0.0, 0.0, 100.0, 0.0);
    assert!(point_in_shape(pt(50.0, 1.0), &line));
    assert!(!point_in_shape(pt(50.0, 20.0), &line));
}

#[test]
fn zero_length_line_never_hits() {
    let line = shape(ShapeKind::Arrow, 5.0, 5.0, 0.0, 0.0);
    assert!(!point_in_shape(pt(5.0, 5.0), &line));
}

#[test]
fn freehand_hit_along_any_segment() {
    let s = stroke(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    assert!(point_in_shape(pt(55.0, 25.0), &s));
    assert!(!point_in_shape(pt(25.0, 25.0), &s));
}

#[test]
fn text_hit_includes_cap_height() {
    let t = shape(ShapeKind::Text { text: "hi".into(), style: crate::shape::TextStyle::default() }, 100.0, 100.0, 40.0, 24.0);
    assert!(point_in_shape(pt(110.0, 82.0), &t));
    assert!(!point_in_shape(pt(110.0, 79.0), &t));
}

#[test]
fn ellipse_hit_uses_quadratic_form() {
    let e = shape(ShapeKind::Ellipse, 0.0, 0.0, 100.0, 50.0);
    assert!(point_in_shape(pt(50.0, 25.0), &e));
    // Bounding-box corner is outside the ellipse even with padding.
    assert!(!point_in_shape(pt(0.0, 0.0), &e));
}

#[test]
fn topmost_hit_prefers_last_shape() {
    let shapes = [rect(0.0, 0.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0)];
    assert_eq!(topmost_hit(pt(20.0, 20.0), &shapes), Some(1));
    assert_eq!(topmost_hit(pt(200.0, 200.0), &shapes), None);
}

// =============================================================
// Handles
// =============================================================

#[test]
fn handles_sit_on_corners_and_midpoints() {
    let handles = resize_handles(&BoundingBox::new(0.0, 0.0, 100.0, 50.0));
    let find = |a: ResizeAnchor| handles.iter().find(|h| h.anchor == a).unwrap().pos;
    assert_eq!(find(ResizeAnchor::Nw), pt(0.0, 0.0));
    assert_eq!(find(ResizeAnchor::N), pt(50.0, 0.0));
    assert_eq!(find(ResizeAnchor::E), pt(100.0, 25.0));
    assert_eq!(find(ResizeAnchor::Se), pt(100.0, 50.0));
    assert_eq!(find(ResizeAnchor::W), pt(0.0, 25.0));
}

#[test]
fn anchor_edge_flags() {
    assert!(ResizeAnchor::Ne.moves_north() && ResizeAnchor::Ne.moves_east());
    assert!(!ResizeAnchor::Ne.moves_west() && !ResizeAnchor::Ne.moves_south());
    assert!(ResizeAnchor::W.moves_west());
    assert!(!ResizeAnchor::W.moves_north());
    assert_eq!(ResizeAnchor::Sw.as_str(), "sw");
}

#[test]
fn handle_at_empty_selection_is_none() {
    let shapes = [rect(0.0, 0.0, 100.0, 50.0)];
    assert!(handle_at(pt(0.0, 0.0), &HashSet::new(), &shapes, &Camera::default()).is_none());
}

#[test]
fn handle_at_finds_padded_corner() {
    let shapes = [rect(100.0, 100.0, 100.0, 50.0)];
    let selected = HashSet::from([shapes[0].id.clone()]);
    let cam = Camera::default();
    // South-east handle sits 9px beyond the box corner.
    assert_eq!(handle_at(pt(209.0, 159.0), &selected, &shapes, &cam), Some(ResizeAnchor::Se));
    assert_eq!(handle_at(pt(91.0, 125.0), &selected, &shapes, &cam), Some(ResizeAnchor::W));
    assert!(handle_at(pt(150.0, 125.0), &selected, &shapes, &cam).is_none());
}

#[test]
fn handle_at_respects_camera() {
    let shapes = [rect(0.0, 0.0, 10.0, 10.0)];
    let selected = HashSet::from([shapes[0].id.clone()]);
    let cam = Camera { pan_x: 50.0, pan_y: 50.0, zoom: 2.0 };
    // Box spans screen (50,50)-(70,70); north-east handle at (79, 41).
    assert_eq!(handle_at(pt(79.0, 41.0), &selected, &shapes, &cam), Some(ResizeAnchor::Ne));
}

#[test]
fn handle_at_uses_combined_box_for_multi_select() {
    let shapes = [rect(0.0, 0.0, 10.0, 10.0), rect(90.0, 90.0, 10.0, 10.0)];
    let selected: HashSet<ShapeId> = shapes.iter().map(|s| s.id.clone()).collect();
    assert_eq!(handle_at(pt(109.0, 109.0), &selected, &shapes, &Camera::default()), Some(ResizeAnchor::Se));
}

// =============================================================
// snap
// =============================================================

#[test]
fn snap_rounds_to_grid() {
    assert_eq!(snap(29.0, 20.0), 20.0);
    assert_eq!(snap(31.0, 20.0), 40.0);
    assert_eq!(snap(-9.0, 20.0), 0.0);
}
