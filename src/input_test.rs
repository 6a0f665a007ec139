use super::*;

use crate::shape::Style;

// =============================================================
// Tool
// =============================================================

#[test]
fn default_tool_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn shortcuts_cover_every_tool() {
    let pairs = [
        ("v", Tool::Select),
        ("f", Tool::Freehand),
        ("r", Tool::Rect),
        ("e", Tool::Ellipse),
        ("a", Tool::Arrow),
        ("l", Tool::Line),
        ("t", Tool::Text),
        ("x", Tool::Eraser),
    ];
    for (key, tool) in pairs {
        assert_eq!(Tool::from_shortcut(key), Some(tool), "key {key}");
    }
    assert_eq!(Tool::from_shortcut("q"), None);
    assert_eq!(Tool::from_shortcut("V"), None);
}

#[test]
fn only_drawing_tools_create_shapes() {
    assert!(Tool::Select.drawn_kind().is_none());
    assert!(Tool::Text.drawn_kind().is_none());
    assert!(Tool::Eraser.drawn_kind().is_none());
    assert_eq!(Tool::Rect.drawn_kind(), Some(ShapeKind::Rect));
    assert!(matches!(Tool::Freehand.drawn_kind(), Some(ShapeKind::Freehand { points }) if points.is_empty()));
}

#[test]
fn freehand_and_eraser_do_not_select_new_shape() {
    assert!(!Tool::Freehand.selects_drawn_shape());
    assert!(!Tool::Eraser.selects_drawn_shape());
    assert!(Tool::Rect.selects_drawn_shape());
    assert!(Tool::Line.selects_drawn_shape());
}

// =============================================================
// Modifiers / keys
// =============================================================

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers::ctrl().command());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.command());
    assert!(!Modifiers::shift().command());
    assert!(!Modifiers::alt().command());
}

#[test]
fn arrow_keys_map_to_unit_directions() {
    assert_eq!(Key::from("ArrowLeft").arrow_direction(), Some((-1.0, 0.0)));
    assert_eq!(Key::from("ArrowRight").arrow_direction(), Some((1.0, 0.0)));
    assert_eq!(Key::from("ArrowUp").arrow_direction(), Some((0.0, -1.0)));
    assert_eq!(Key::from("ArrowDown").arrow_direction(), Some((0.0, 1.0)));
    assert_eq!(Key::from("Enter").arrow_direction(), None);
}

// =============================================================
// ShapeOrigin / Gesture
// =============================================================

#[test]
fn origin_captures_points_for_freehand_only() {
    let style = Style::default();
    let mut stroke = Shape::new(ShapeKind::Freehand { points: Vec::new() }, Point::new(0.0, 0.0), &style);
    stroke.points_mut().unwrap().push(Point::new(1.0, 2.0));
    let rect = Shape::new(ShapeKind::Rect, Point::new(5.0, 6.0), &style).with_size(7.0, 8.0);

    let o = ShapeOrigin::capture(&stroke);
    assert_eq!(o.points, Some(vec![Point::new(1.0, 2.0)]));

    let o = ShapeOrigin::capture(&rect);
    assert_eq!(o, ShapeOrigin { x: 5.0, y: 6.0, w: 7.0, h: 8.0, points: None });
}

#[test]
fn capture_where_filters_by_id() {
    let style = Style::default();
    let a = Shape::new(ShapeKind::Rect, Point::new(0.0, 0.0), &style);
    let b = Shape::new(ShapeKind::Rect, Point::new(1.0, 1.0), &style);
    let keep = a.id.clone();
    let origins = ShapeOrigin::capture_where(&[a, b], |id| *id == keep);
    assert_eq!(origins.len(), 1);
    assert!(origins.contains_key(&keep));
}

#[test]
fn gesture_defaults_to_none() {
    let g = Gesture::default();
    assert!(matches!(g, Gesture::None));
    assert_eq!(g.name(), "none");
    assert_eq!(Gesture::Erasing.name(), "erasing");
}
