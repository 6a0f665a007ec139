#![allow(clippy::float_cmp)]

use super::*;

use crate::geometry::bounding_box;

#[test]
fn catalog_lists_nine_items_in_order() {
    let names: Vec<String> = catalog().into_iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec!["Cloud", "Diamond", "Star", "Triangle", "Hexagon", "Speech Bubble", "Arrow Right", "Cylinder", "Browser"]
    );
}

#[test]
fn find_is_case_insensitive() {
    assert_eq!(find("speech bubble").map(|i| i.kind), Some(ShapeKind::Bubble));
    assert!(find("pentagon").is_none());
}

#[test]
fn parametric_item_is_centered() {
    let shape = find("Diamond").unwrap().place(Point::new(500.0, 300.0), &Style::default());
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (430.0, 250.0, 140.0, 100.0));
    assert_eq!(shape.kind, ShapeKind::Diamond);
}

#[test]
fn icon_image_is_square() {
    let item = LibraryItem::icon_image("rust", "/icons/rust.svg");
    let shape = item.place(Point::new(100.0, 100.0), &Style::default());
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (60.0, 60.0, 80.0, 80.0));
    assert!(matches!(&shape.kind, ShapeKind::Image { image_url, .. } if image_url == "/icons/rust.svg"));
}

#[test]
fn cloud_template_is_translated_into_place() {
    let shape = find("Cloud").unwrap().place(Point::new(100.0, 100.0), &Style::default());
    let points = shape.points().unwrap();
    assert_eq!(points.len(), 9);
    assert_eq!(points[0], Point::new(55.0, 110.0));
    assert_eq!((shape.w, shape.h), (90.0, 40.0));

    let bb = bounding_box(&shape);
    assert_eq!((bb.x, bb.y, bb.w, bb.h), (55.0, 80.0, 90.0, 40.0));
}

#[test]
fn placed_shapes_get_fresh_ids() {
    let item = find("Star").unwrap();
    let a = item.place(Point::new(0.0, 0.0), &Style::default());
    let b = item.place(Point::new(0.0, 0.0), &Style::default());
    assert_ne!(a.id, b.id);
}
