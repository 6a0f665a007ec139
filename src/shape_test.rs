#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn rect_at(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(ShapeKind::Rect, Point::new(x, y), &Style::default()).with_size(w, h)
}

fn freehand(points: &[(f64, f64)]) -> Shape {
    let points = points.iter().map(|&(x, y)| Point::new(x, y)).collect::<Vec<_>>();
    let anchor = points.first().copied().unwrap_or_default();
    Shape::new(ShapeKind::Freehand { points }, anchor, &Style::default())
}

// =============================================================
// Identity
// =============================================================

#[test]
fn generated_ids_are_unique() {
    let a = ShapeId::generate();
    let b = ShapeId::generate();
    assert_ne!(a, b);
}

#[test]
fn new_shape_has_fresh_id_and_seed() {
    let a = rect_at(0.0, 0.0, 1.0, 1.0);
    let b = rect_at(0.0, 0.0, 1.0, 1.0);
    assert_ne!(a.id, b.id);
    assert!(a.seed > 0);
}

#[test]
fn refresh_identity_changes_id() {
    let mut s = rect_at(0.0, 0.0, 10.0, 10.0);
    let before = s.id.clone();
    s.refresh_identity();
    assert_ne!(s.id, before);
}

#[test]
fn new_shape_inherits_style() {
    let style = Style { stroke_color: "#ff0000".into(), stroke_width: 5.0, fill_color: "#00ff00".into(), ..Style::default() };
    let s = Shape::new(ShapeKind::Ellipse, Point::new(3.0, 4.0), &style);
    assert_eq!(s.stroke_color, "#ff0000");
    assert_eq!(s.stroke_width, 5.0);
    assert_eq!(s.fill_color, "#00ff00");
    assert_eq!((s.x, s.y, s.w, s.h), (3.0, 4.0, 0.0, 0.0));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn rect_serializes_flat_with_type_tag() {
    let mut s = rect_at(10.0, 20.0, 30.0, 40.0);
    s.id = ShapeId::from("r1");
    s.seed = 7;
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "rect");
    assert_eq!(v["id"], "r1");
    assert_eq!(v["x"], 10.0);
    assert_eq!(v["strokeColor"], "#1a1a2e");
    assert_eq!(v["fillColor"], "none");
    assert_eq!(v["seed"], 7);
}

#[test]
fn freehand_points_serialize_as_pairs() {
    let s = freehand(&[(0.0, 0.0), (5.0, 6.0)]);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "freehand");
    assert_eq!(v["points"], json!([[0.0, 0.0], [5.0, 6.0]]));
}

#[test]
fn text_fields_are_flattened() {
    let s = Shape::new(
        ShapeKind::Text { text: "hi".into(), style: TextStyle { text_align: TextAlign::Center, ..TextStyle::default() } },
        Point::new(0.0, 0.0),
        &Style::default(),
    );
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "text");
    assert_eq!(v["text"], "hi");
    assert_eq!(v["fontSize"], 20.0);
    assert_eq!(v["textAlign"], "center");
}

#[test]
fn deserializes_document_record() {
    let raw = json!({
        "id": "img-1", "type": "image", "x": 1, "y": 2, "w": 250, "h": 250,
        "seed": 42, "strokeColor": "#000", "strokeWidth": 2, "fillColor": "none",
        "imageUrl": "data:image/png;base64,AAAA", "noBorder": true
    });
    let s: Shape = serde_json::from_value(raw).unwrap();
    assert_eq!(s.id.as_str(), "img-1");
    assert_eq!(s.kind, ShapeKind::Image { image_url: "data:image/png;base64,AAAA".into(), no_border: true });
    assert_eq!(s.w, 250.0);
}

#[test]
fn deserializes_camel_case_variant_and_defaults() {
    let raw = json!({ "id": "a", "type": "arrowRight", "x": 0, "y": 0, "w": 10, "h": 10 });
    let s: Shape = serde_json::from_value(raw).unwrap();
    assert_eq!(s.kind, ShapeKind::ArrowRight);
    assert_eq!(s.stroke_width, 2.0);
    assert_eq!(s.fill_color, NO_FILL);
}

#[test]
fn unknown_type_is_rejected() {
    let raw = json!({ "id": "a", "type": "blob", "x": 0, "y": 0, "w": 10, "h": 10 });
    assert!(serde_json::from_value::<Shape>(raw).is_err());
}

#[test]
fn kind_names_match_tags() {
    let kinds = [
        ShapeKind::Freehand { points: vec![] },
        ShapeKind::Rect,
        ShapeKind::Ellipse,
        ShapeKind::Arrow,
        ShapeKind::Line,
        ShapeKind::Diamond,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Star,
        ShapeKind::Database,
        ShapeKind::Bubble,
        ShapeKind::Cylinder,
        ShapeKind::Browser,
        ShapeKind::ArrowRight,
        ShapeKind::Image { image_url: String::new(), no_border: false },
    ];
    for kind in kinds {
        let v = serde_json::to_value(Shape::new(kind.clone(), Point::default(), &Style::default())).unwrap();
        assert_eq!(v["type"], kind.name());
    }
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn translate_moves_anchor() {
    let mut s = rect_at(10.0, 10.0, 5.0, 5.0);
    s.translate(3.0, -4.0);
    assert_eq!((s.x, s.y), (13.0, 6.0));
}

#[test]
fn translate_moves_every_freehand_point() {
    let mut s = freehand(&[(0.0, 0.0), (10.0, 5.0)]);
    s.translate(20.0, 20.0);
    assert_eq!(s.points().unwrap(), &[Point::new(20.0, 20.0), Point::new(30.0, 25.0)]);
}

#[test]
fn clone_is_independent() {
    let original = freehand(&[(0.0, 0.0), (1.0, 1.0)]);
    let mut copy = original.clone();
    copy.points_mut().unwrap().push(Point::new(9.0, 9.0));
    assert_eq!(original.points().unwrap().len(), 2);
}

#[test]
fn degenerate_thresholds() {
    assert!(rect_at(0.0, 0.0, 2.0, -2.0).is_degenerate());
    assert!(!rect_at(0.0, 0.0, 2.0, 3.0).is_degenerate());
    assert!(!rect_at(0.0, 0.0, -5.0, 0.0).is_degenerate());
    assert!(freehand(&[(0.0, 0.0)]).is_degenerate());
    assert!(!freehand(&[(0.0, 0.0), (1.0, 0.0)]).is_degenerate());
}

#[test]
fn normalize_flips_box_variants() {
    let mut s = rect_at(60.0, 60.0, -50.0, -40.0);
    s.normalize();
    assert_eq!((s.x, s.y, s.w, s.h), (10.0, 20.0, 50.0, 40.0));
}

#[test]
fn normalize_keeps_line_direction() {
    let mut s = Shape::new(ShapeKind::Line, Point::new(60.0, 60.0), &Style::default()).with_size(-50.0, -40.0);
    s.normalize();
    assert_eq!((s.x, s.y, s.w, s.h), (60.0, 60.0, -50.0, -40.0));
}
