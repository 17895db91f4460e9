//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the pipeline needs:
//! decode a source once, and render one [`ResizeJob`] to PNG bytes. Natural
//! dimensions come from the decoded, oriented [`SourceImage`]. Writing the bytes is not the backend's concern
//! (see [`operations`](super::operations)).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::ResizeJob;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The source could not be decoded, or no raster could be produced from it.
    #[error("Data source error: {0}")]
    DataSource(String),
    /// The resized raster could not be encoded.
    #[error("Resize error: {0}")]
    Resize(String),
}

/// Pixel width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A decoded source image, shared read-only by every job of one invocation.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    /// Wrap an already-decoded (and already oriented) image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }
}

/// Trait for image processing backends.
///
/// `Sync` because jobs render in parallel against one shared backend.
pub trait ImageBackend: Sync {
    /// Decode the source image, applying its orientation.
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Resize `source` for `job` and encode the result as PNG.
    fn render(&self, source: &SourceImage, job: &ResizeJob) -> Result<Vec<u8>, BackendError>;
}
