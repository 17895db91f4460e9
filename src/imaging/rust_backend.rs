//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` + `ImageDecoder::orientation` |
//! | Size guard | jobs beyond [`MAX_PIXEL_DIMENSION`] fail before any buffer is allocated |
//! | Thumbnail | `DynamicImage::resize` (Lanczos3, aspect kept, fits within the job's box) |
//! | Exact size | `DynamicImage::resize_exact` when the thumbnail is off by a pixel or the job is non-uniform |
//! | Encode → PNG | `DynamicImage::write_to` into an in-memory buffer |

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::calculations::{MAX_PIXEL_DIMENSION, within_pixel_limit};
use super::params::ResizeJob;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::DataSource(format!("Failed to decode {}: {}", path.display(), err))
}

/// Open a decoder for `path`, sniffing the format from the file contents.
fn open_decoder(path: &Path) -> Result<impl ImageDecoder, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()
        .map_err(|e| decode_error(path, e))
}

/// Encode an image as PNG into memory.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, BackendError> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| BackendError::Resize(format!("PNG encode failed: {}", e)))?;
    Ok(buffer)
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let mut decoder = open_decoder(path)?;
        // Missing or unreadable EXIF means no transform.
        let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
        let mut img = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, e))?;
        img.apply_orientation(orientation);
        Ok(SourceImage::from_image(img))
    }

    fn render(&self, source: &SourceImage, job: &ResizeJob) -> Result<Vec<u8>, BackendError> {
        if !within_pixel_limit(job.dimensions()) {
            return Err(BackendError::Resize(format!(
                "{} is {}x{}, over the {}px limit",
                job.filename, job.width, job.height, MAX_PIXEL_DIMENSION
            )));
        }
        // Fits inside the job's box, so its long edge never exceeds the job's.
        let thumbnail = source
            .image()
            .resize(job.width, job.height, FilterType::Lanczos3);
        if thumbnail.width() == 0 || thumbnail.height() == 0 {
            return Err(BackendError::DataSource(format!(
                "No raster produced for {} from a {}x{} source",
                job.filename,
                source.image().width(),
                source.image().height()
            )));
        }

        let sized = if thumbnail.width() == job.width && thumbnail.height() == job.height {
            thumbnail
        } else {
            thumbnail.resize_exact(job.width, job.height, FilterType::Lanczos3)
        };
        encode_png(&sized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use image::{ImageEncoder, RgbImage, RgbaImage};

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    fn create_test_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 200, 255])
        })
        .save(path)
        .unwrap();
    }

    fn decoded_dimensions(png: &[u8]) -> (u32, u32) {
        let img = image::load_from_memory_with_format(png, ImageFormat::Png).unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn decode_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let source = RustBackend::new().decode(&path).unwrap();
        assert_eq!(source.dimensions(), Dimensions { width: 200, height: 150 });
    }

    #[test]
    fn decode_png_keeps_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("source.png");
        create_test_png(&path, 90, 60);

        let source = RustBackend::new().decode(&path).unwrap();
        assert_eq!(source.dimensions(), Dimensions { width: 90, height: 60 });
    }

    #[test]
    fn decode_garbage_is_data_source_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = RustBackend::new().decode(&path);
        assert!(matches!(result, Err(BackendError::DataSource(_))));
    }

    #[test]
    fn decode_missing_file_is_io_error() {
        let result = RustBackend::new().decode(Path::new("/nonexistent/source.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn render_square_from_square_source() {
        let source = SourceImage::from_image(DynamicImage::new_rgba8(512, 512));
        let png = RustBackend::new()
            .render(&source, &ResizeJob::new(120, 120, "AppIcon_60@2x.png"))
            .unwrap();
        assert_eq!(decoded_dimensions(&png), (120, 120));
    }

    #[test]
    fn render_hits_exact_target_with_aspect_rounding() {
        // 900x600 → 200x133: aspect-fit alone would give 200x133 or 200x134
        let source = SourceImage::from_image(DynamicImage::new_rgb8(900, 600));
        let png = RustBackend::new()
            .render(&source, &ResizeJob::new(200, 133, "photo@2x.png"))
            .unwrap();
        assert_eq!(decoded_dimensions(&png), (200, 133));
    }

    #[test]
    fn render_stretches_non_square_source_to_square_job() {
        let source = SourceImage::from_image(DynamicImage::new_rgb8(300, 200));
        let png = RustBackend::new()
            .render(&source, &ResizeJob::new(64, 64, "AppIcon_32@2x.png"))
            .unwrap();
        assert_eq!(decoded_dimensions(&png), (64, 64));
    }

    #[test]
    fn render_upscales_small_source() {
        let source = SourceImage::from_image(DynamicImage::new_rgba8(16, 16));
        let png = RustBackend::new()
            .render(&source, &ResizeJob::new(1024, 1024, "AppIcon_ios.png"))
            .unwrap();
        assert_eq!(decoded_dimensions(&png), (1024, 1024));
    }

    #[test]
    fn render_skinny_job_from_square_source() {
        let source = SourceImage::from_image(DynamicImage::new_rgba8(3, 3));
        let png = RustBackend::new()
            .render(&source, &ResizeJob::new(MAX_PIXEL_DIMENSION, 1, "strip@1x.png"))
            .unwrap();
        assert_eq!(decoded_dimensions(&png), (MAX_PIXEL_DIMENSION, 1));
    }

    #[test]
    fn render_over_pixel_limit_fails_without_allocating() {
        let source = SourceImage::from_image(DynamicImage::new_rgba8(3, 3));
        let job = ResizeJob::new(MAX_PIXEL_DIMENSION + 1, 2, "photo@2x.png");

        let result = RustBackend::new().render(&source, &job);
        assert!(matches!(result, Err(BackendError::Resize(_))));

        let result = RustBackend::new().render(&source, &ResizeJob::new(1, u32::MAX, "x.png"));
        assert!(matches!(result, Err(BackendError::Resize(_))));
    }
}
