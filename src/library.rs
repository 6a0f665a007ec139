//! Library shapes: the built-in catalog of one-click shapes and icon images,
//! and their placement at the center of the view.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::camera::Point;
use crate::shape::{Shape, ShapeKind, Style};

const ITEM_W: f64 = 140.0;
const ITEM_H: f64 = 100.0;
const ICON_SIZE: f64 = 80.0;
/// Extent of a freehand template; template points lie within it.
const TEMPLATE_W: f64 = 90.0;
const TEMPLATE_H: f64 = 40.0;

const CLOUD: [[f64; 2]; 9] =
    [[0.0, 30.0], [10.0, 10.0], [30.0, 5.0], [50.0, 10.0], [65.0, 0.0], [80.0, 8.0], [90.0, 25.0], [80.0, 40.0], [10.0, 40.0]];

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryItem {
    pub name: String,
    /// Short glyph shown on the palette button.
    pub icon: String,
    /// Shape template. Freehand templates carry points relative to a
    /// 90x40 frame; image templates carry the icon URL.
    pub kind: ShapeKind,
}

impl LibraryItem {
    fn new(name: &str, icon: &str, kind: ShapeKind) -> Self {
        Self { name: name.to_owned(), icon: icon.to_owned(), kind }
    }

    /// An icon image entry.
    #[must_use]
    pub fn icon_image(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            kind: ShapeKind::Image { image_url: url.into(), no_border: false },
        }
    }

    /// Build the shape for this item centered on `center` (canvas space).
    #[must_use]
    pub fn place(&self, center: Point, style: &Style) -> Shape {
        match &self.kind {
            ShapeKind::Freehand { points } => {
                let origin = center.offset(-TEMPLATE_W / 2.0, -TEMPLATE_H / 2.0);
                let points = points.iter().map(|p| origin.offset(p.x, p.y)).collect();
                Shape::new(ShapeKind::Freehand { points }, origin, style).with_size(TEMPLATE_W, TEMPLATE_H)
            }
            ShapeKind::Image { .. } => {
                let anchor = center.offset(-ICON_SIZE / 2.0, -ICON_SIZE / 2.0);
                Shape::new(self.kind.clone(), anchor, style).with_size(ICON_SIZE, ICON_SIZE)
            }
            kind => {
                let anchor = center.offset(-ITEM_W / 2.0, -ITEM_H / 2.0);
                Shape::new(kind.clone(), anchor, style).with_size(ITEM_W, ITEM_H)
            }
        }
    }
}

/// The built-in shape catalog in palette order.
#[must_use]
pub fn catalog() -> Vec<LibraryItem> {
    vec![
        LibraryItem::new("Cloud", "☁️", ShapeKind::Freehand { points: CLOUD.iter().map(|&p| Point::from(p)).collect() }),
        LibraryItem::new("Diamond", "💎", ShapeKind::Diamond),
        LibraryItem::new("Star", "⭐", ShapeKind::Star),
        LibraryItem::new("Triangle", "🔺", ShapeKind::Triangle),
        LibraryItem::new("Hexagon", "⬡", ShapeKind::Hexagon),
        LibraryItem::new("Speech Bubble", "💬", ShapeKind::Bubble),
        LibraryItem::new("Arrow Right", "➡️", ShapeKind::ArrowRight),
        LibraryItem::new("Cylinder", "🛢️", ShapeKind::Cylinder),
        LibraryItem::new("Browser", "🌐", ShapeKind::Browser),
    ]
}

/// Find a catalog item by name, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<LibraryItem> {
    catalog().into_iter().find(|item| item.name.eq_ignore_ascii_case(name))
}
