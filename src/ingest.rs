//! Drag-and-drop image ingestion.
//!
//! SYSTEM CONTEXT
//! ==============
//! A drop delivers a batch of external files. Each image is read through an
//! [`AssetLoader`] (asynchronously) and turned into a data-URI image shape.
//! Ingestion runs in two steps so the interaction loop never waits on I/O:
//!
//! 1. [`prepare_batch`] loads every file and builds the shapes. It borrows
//!    nothing from the store.
//! 2. [`commit_batch`] appends the finished batch to the store's *current*
//!    list in one undoable commit and selects it.
//!
//! Placement offsets come from each file's index in the drop, not from the
//! order in which loads complete, so placement is deterministic. Non-image
//! files are skipped. A file that fails to load is skipped with a warning.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::{LocalBoxFuture, join_all};
use image::ImageFormat;
use tracing::{debug, info, warn};

use crate::camera::Point;
use crate::consts::{DROP_IMAGE_SIZE, DROP_STAGGER};
use crate::shape::{Shape, ShapeId, ShapeKind, Style};
use crate::store::Store;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// One file from a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    /// File name or path as reported by the host.
    pub name: String,
    /// MIME type declared by the host, if any.
    pub mime: Option<String>,
}

impl DroppedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: Option<&str>) -> Self {
        Self { name: name.into(), mime: mime.map(str::to_owned) }
    }

    /// Whether the declared type rules the file out before it is read.
    fn declared_non_image(&self) -> bool {
        self.mime.as_deref().is_some_and(|m| !m.starts_with("image/"))
    }
}

/// Reads the bytes behind a dropped file.
pub trait AssetLoader {
    fn load<'a>(&'a self, file: &'a DroppedFile) -> LocalBoxFuture<'a, Result<Vec<u8>, IngestError>>;
}

/// Loads dropped files from the local filesystem, relative to `root`.
#[derive(Debug, Clone, Default)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsLoader {
    fn load<'a>(&'a self, file: &'a DroppedFile) -> LocalBoxFuture<'a, Result<Vec<u8>, IngestError>> {
        Box::pin(async move {
            std::fs::read(self.root.join(&file.name))
                .map_err(|source| IngestError::Read { name: file.name.clone(), source })
        })
    }
}

/// MIME type for loaded bytes: the declared type if present, else sniffed
/// from the content, else guessed from the file name.
fn resolve_mime(file: &DroppedFile, bytes: &[u8]) -> Option<String> {
    if let Some(mime) = &file.mime {
        return Some(mime.clone());
    }
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type().to_owned());
    }
    match ImageFormat::from_path(Path::new(&file.name)) {
        Ok(format) => Some(format.to_mime_type().to_owned()),
        Err(_) => None,
    }
}

/// Encode bytes as a `data:` URI.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Load every image in `files` and build its shape.
///
/// The `i`-th file is placed at `drop_at + (i * stagger, i * stagger)`.
/// Shapes come back in drop order.
#[allow(clippy::cast_precision_loss)]
pub async fn prepare_batch(loader: &dyn AssetLoader, files: &[DroppedFile], drop_at: Point, style: &Style) -> Vec<Shape> {
    let loads = files.iter().enumerate().filter(|(_, f)| !f.declared_non_image()).map(|(i, file)| async move {
        match loader.load(file).await {
            Ok(bytes) => Some((i, file, bytes)),
            Err(e) => {
                warn!(error = %e, "skipping dropped file");
                None
            }
        }
    });

    join_all(loads)
        .await
        .into_iter()
        .flatten()
        .filter_map(|(i, file, bytes)| {
            let Some(mime) = resolve_mime(file, &bytes).filter(|m| m.starts_with("image/")) else {
                debug!(name = %file.name, "skipping non-image drop");
                return None;
            };
            let offset = i as f64 * DROP_STAGGER;
            let kind = ShapeKind::Image { image_url: data_uri(&mime, &bytes), no_border: false };
            Some(Shape::new(kind, drop_at.offset(offset, offset), style).with_size(DROP_IMAGE_SIZE, DROP_IMAGE_SIZE))
        })
        .collect()
}

/// Append a prepared batch to the store as one undoable commit and select it.
///
/// Returns the number of shapes added. An empty batch changes nothing.
pub fn commit_batch(store: &mut Store, batch: Vec<Shape>) -> usize {
    if batch.is_empty() {
        return 0;
    }
    let count = batch.len();
    let ids: Vec<ShapeId> = batch.iter().map(|s| s.id.clone()).collect();
    let mut next = store.shapes().to_vec();
    next.extend(batch);
    store.push_history(next);
    store.set_selection(ids);
    info!(count, "dropped images added");
    count
}

/// Notice shown after a batch lands, e.g. `"Added 2 images"`.
#[must_use]
pub fn added_notice(count: usize) -> String {
    if count == 1 { "Added 1 image".to_owned() } else { format!("Added {count} images") }
}
