//! Exported board document: `{ "shapes": [...], "version": 1 }`.
//!
//! Import is all-or-nothing. A document that fails to parse, lacks a
//! `shapes` array, or carries an unknown version leaves the store untouched
//! and reports an [`ImportError`] for the caller to show.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::shape::Shape;
use crate::store::Store;

/// Format version written by [`export_document`].
pub const DOCUMENT_VERSION: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("document has no shapes list")]
    MissingShapes,

    #[error("invalid shape in document: {0}")]
    InvalidShape(#[source] serde_json::Error),

    #[error("unsupported document version {0}")]
    UnsupportedVersion(u64),
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    shapes: &'a [Shape],
    version: u64,
}

/// Serialize `shapes` as a pretty-printed document.
///
/// # Errors
///
/// Returns a serialization error only if a shape cannot be encoded.
pub fn export_document(shapes: &[Shape]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DocumentRef { shapes, version: DOCUMENT_VERSION })
}

/// Parse a document into its shape list without touching any store.
///
/// A missing `version` is read as version 1.
///
/// # Errors
///
/// See [`ImportError`].
pub fn parse_document(raw: &str) -> Result<Vec<Shape>, ImportError> {
    let mut doc: Value = serde_json::from_str(raw).map_err(ImportError::InvalidJson)?;

    if let Some(version) = doc.get("version").and_then(Value::as_u64) {
        if version > DOCUMENT_VERSION {
            return Err(ImportError::UnsupportedVersion(version));
        }
    }

    let shapes = match doc.get_mut("shapes").map(Value::take) {
        Some(shapes @ Value::Array(_)) => shapes,
        _ => return Err(ImportError::MissingShapes),
    };
    serde_json::from_value(shapes).map_err(ImportError::InvalidShape)
}

/// Parse `raw` and replace the store's shapes as one undoable commit.
///
/// Returns the number of imported shapes.
///
/// # Errors
///
/// See [`ImportError`]. On error the store is unchanged.
pub fn import_document(store: &mut Store, raw: &str) -> Result<usize, ImportError> {
    let shapes = parse_document(raw)?;
    let count = shapes.len();
    store.import_shapes(shapes);
    info!(count, "document imported");
    Ok(count)
}
