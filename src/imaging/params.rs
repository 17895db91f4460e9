//! Parameter types for image operations.
//!
//! A [`ResizeJob`] describes *what* to produce for one variant: exact pixel
//! size and output filename. It is derived from a template entry before any
//! pixel work starts and handed to the backend unchanged.

use super::backend::Dimensions;

/// One variant to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    pub width: u32,
    pub height: u32,
    /// File name inside the asset folder, e.g. `AppIcon_60@2x.png`.
    pub filename: String,
}

impl ResizeJob {
    pub fn new(width: u32, height: u32, filename: impl Into<String>) -> Self {
        Self {
            width,
            height,
            filename: filename.into(),
        }
    }

    pub fn from_dimensions(dims: Dimensions, filename: impl Into<String>) -> Self {
        Self::new(dims.width, dims.height, filename)
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}
