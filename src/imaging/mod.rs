//! Image processing in pure Rust, with no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader`, EXIF orientation applied |
//! | **Size guard** | per-axis pixel limit, checked before resizing |
//! | **Resize → PNG** | Lanczos3 fit + exact resize, PNG encoder |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: [`ResizeJob`], the per-variant work description
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Render jobs through a backend and write them to disk

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, SourceImage};
pub use calculations::{BaseSize, BaseSizeError};
pub use operations::{JobOutcome, write_variant, write_variants};
pub use params::ResizeJob;
pub use rust_backend::RustBackend;
