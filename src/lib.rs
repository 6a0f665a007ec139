//! Interactive whiteboard engine: shapes, history, hit-testing, and the
//! pointer state machine behind an infinite pannable, zoomable canvas.
//!
//! The crate owns board state and interaction logic only. A host forwards
//! raw input events to [`engine::EngineCore`], reacts to the returned
//! [`engine::Action`]s, and supplies a [`render::Renderer`] for pixels.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pointer, wheel, and keyboard state machine; view controls |
//! | [`store`] | Shape list, selection, clipboard, and undo history |
//! | [`shape`] | Shape data model, ids, and styles |
//! | [`geometry`] | Bounding boxes, hit-testing, resize handles, snapping |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`history`] | Bounded snapshot history |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`text_edit`] | Text overlay open/commit/cancel |
//! | [`ingest`] | Dropped image files to image shapes |
//! | [`library`] | Built-in shape catalog |
//! | [`document`] | JSON export and import |
//! | [`persist`] | Key-value storage and persisted records |
//! | [`render`] | Scene view and renderer trait |
//! | [`config`] | Environment configuration |
//! | [`consts`] | Shared numeric constants (zoom limits, hit pads, grid, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod document;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod ingest;
pub mod input;
pub mod library;
pub mod persist;
pub mod render;
pub mod shape;
pub mod store;
pub mod text_edit;
