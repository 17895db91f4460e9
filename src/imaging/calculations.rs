//! Pure calculation functions for variant dimensions.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ## Rounding
//!
//! Intermediate sizes stay fractional. Rounding happens exactly once, when a
//! final pixel count is produced ([`to_pixels`]): `f64::round` (half away from
//! zero), then clamped to at least one pixel. A 900×600 source with a `width`
//! override of 100 therefore gives a base of 100×66.67 and an `@2x` variant of
//! 200×133, not 200×134 as rounding the base first would.

use super::backend::Dimensions;
use crate::variant::{NominalSize, Scale};
use thiserror::Error;

/// A source with no explicit `@1x` size is assumed to be an `@3x` asset.
pub const SOURCE_SCALE: f64 = 3.0;

/// Pixel size of the single universal marketing icon.
pub const UNIVERSAL_ICON_SIZE: u32 = 1024;

/// Largest width or height a variant may have.
pub const MAX_PIXEL_DIMENSION: u32 = 16_384;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BaseSizeError {
    #[error("{axis} override must be a positive number, got {value}")]
    InvalidOverride { axis: &'static str, value: f64 },
    #[error("source image has a zero dimension ({0}x{1})")]
    EmptySource(u32, u32),
    #[error("base size {width}x{height} exceeds the {max}px limit")]
    TooLarge { width: f64, height: f64, max: u32 },
}

/// Round a fractional pixel size to a positive integer.
pub fn to_pixels(value: f64) -> u32 {
    // `as` saturates, so huge values clamp to u32::MAX and NaN to 0.
    (value.round() as u32).max(1)
}

/// Whether a variant of `dims` may be rendered.
pub fn within_pixel_limit(dims: Dimensions) -> bool {
    dims.width <= MAX_PIXEL_DIMENSION && dims.height <= MAX_PIXEL_DIMENSION
}

/// Pixel dimensions of an icon slot: nominal size × scale.
///
/// ```
/// # use assetool::imaging::calculations::icon_dimensions;
/// # use assetool::variant::{NominalSize, Scale};
/// let dims = icon_dimensions(&NominalSize::parse("60x60").unwrap(), Scale::parse("2x").unwrap());
/// assert_eq!((dims.width, dims.height), (120, 120));
/// ```
pub fn icon_dimensions(size: &NominalSize, scale: Scale) -> Dimensions {
    let factor = scale.factor() as f64;
    Dimensions {
        width: to_pixels(size.width * factor),
        height: to_pixels(size.height * factor),
    }
}

/// The `@1x` size of an image set, kept fractional until a scale is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSize {
    pub width: f64,
    pub height: f64,
}

impl BaseSize {
    /// Establish the `@1x` size from optional overrides and the source's
    /// natural dimensions.
    ///
    /// | Overrides | Base |
    /// |-----------|------|
    /// | width and height | used as given |
    /// | width only | height follows the source aspect ratio |
    /// | height only | width follows the source aspect ratio |
    /// | neither | source ÷ [`SOURCE_SCALE`] |
    pub fn resolve(
        natural: Dimensions,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<Self, BaseSizeError> {
        let width = width.map(|v| check_override("width", v)).transpose()?;
        let height = height.map(|v| check_override("height", v)).transpose()?;

        if let (Some(width), Some(height)) = (width, height) {
            return Self { width, height }.checked();
        }
        if natural.width == 0 || natural.height == 0 {
            return Err(BaseSizeError::EmptySource(natural.width, natural.height));
        }

        let src_w = natural.width as f64;
        let src_h = natural.height as f64;
        match (width, height) {
            (Some(width), None) => Self {
                width,
                height: width * src_h / src_w,
            }
            .checked(),
            (None, Some(height)) => Self {
                width: height * src_w / src_h,
                height,
            }
            .checked(),
            // Variants beyond the limit fail individually at render time.
            _ => Ok(Self {
                width: src_w / SOURCE_SCALE,
                height: src_h / SOURCE_SCALE,
            }),
        }
    }

    /// Reject an overridden base whose `@1x` already exceeds the pixel limit.
    fn checked(self) -> Result<Self, BaseSizeError> {
        let max = MAX_PIXEL_DIMENSION as f64;
        if self.width > max || self.height > max {
            return Err(BaseSizeError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_PIXEL_DIMENSION,
            });
        }
        Ok(self)
    }

    /// Final pixel dimensions at `scale`.
    pub fn at_scale(&self, scale: Scale) -> Dimensions {
        let factor = scale.factor() as f64;
        Dimensions {
            width: to_pixels(self.width * factor),
            height: to_pixels(self.height * factor),
        }
    }
}

fn check_override(axis: &'static str, value: f64) -> Result<f64, BaseSizeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BaseSizeError::InvalidOverride { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    fn scale(text: &str) -> Scale {
        Scale::parse(text).unwrap()
    }

    // =========================================================================
    // icon_dimensions
    // =========================================================================

    #[test]
    fn icon_is_nominal_times_scale() {
        let size = NominalSize::parse("60x60").unwrap();
        assert_eq!(icon_dimensions(&size, scale("2x")), dims(120, 120));
        assert_eq!(icon_dimensions(&size, scale("3x")), dims(180, 180));
    }

    #[test]
    fn icon_fractional_nominal() {
        let size = NominalSize::parse("83.5x83.5").unwrap();
        assert_eq!(icon_dimensions(&size, scale("2x")), dims(167, 167));

        let size = NominalSize::parse("27.5x27.5").unwrap();
        assert_eq!(icon_dimensions(&size, scale("2x")), dims(55, 55));
    }

    #[test]
    fn icon_fractional_result_rounds() {
        let size = NominalSize::parse("83.5x83.5").unwrap();
        // 83.5 is exact; 83.5 × 1 = 83.5 rounds half away from zero
        assert_eq!(icon_dimensions(&size, scale("1x")), dims(84, 84));
    }

    // =========================================================================
    // BaseSize::resolve
    // =========================================================================

    #[test]
    fn base_defaults_to_source_as_3x() {
        let base = BaseSize::resolve(dims(900, 600), None, None).unwrap();
        assert_eq!((base.width, base.height), (300.0, 200.0));
        assert_eq!(base.at_scale(scale("1x")), dims(300, 200));
        assert_eq!(base.at_scale(scale("2x")), dims(600, 400));
        assert_eq!(base.at_scale(scale("3x")), dims(900, 600));
    }

    #[test]
    fn base_both_overrides_used_directly() {
        let base = BaseSize::resolve(dims(900, 600), Some(50.0), Some(70.0)).unwrap();
        assert_eq!(base.at_scale(scale("2x")), dims(100, 140));
    }

    #[test]
    fn base_width_only_follows_aspect() {
        let base = BaseSize::resolve(dims(900, 600), Some(100.0), None).unwrap();
        assert_eq!(base.width, 100.0);
        assert!((base.height - 66.666_666).abs() < 1e-3);
        assert_eq!(base.at_scale(scale("1x")), dims(100, 67));
        // Rounded once at the end: 133.33 → 133 (rounding the base first would give 134)
        assert_eq!(base.at_scale(scale("2x")), dims(200, 133));
        assert_eq!(base.at_scale(scale("3x")), dims(300, 200));
    }

    #[test]
    fn base_height_only_follows_aspect() {
        let base = BaseSize::resolve(dims(900, 600), None, Some(100.0)).unwrap();
        assert_eq!(base.at_scale(scale("1x")), dims(150, 100));
        assert_eq!(base.at_scale(scale("3x")), dims(450, 300));
    }

    #[test]
    fn base_non_divisible_source() {
        // 1000 / 3 = 333.33: @1x 333, @2x 667, @3x back to exactly 1000
        let base = BaseSize::resolve(dims(1000, 500), None, None).unwrap();
        assert_eq!(base.at_scale(scale("1x")), dims(333, 167));
        assert_eq!(base.at_scale(scale("2x")), dims(667, 333));
        assert_eq!(base.at_scale(scale("3x")), dims(1000, 500));
    }

    #[test]
    fn tiny_source_never_yields_zero() {
        let base = BaseSize::resolve(dims(1, 1), None, None).unwrap();
        assert_eq!(base.at_scale(scale("1x")), dims(1, 1));
    }

    #[test]
    fn invalid_overrides_rejected() {
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(BaseSize::resolve(dims(900, 600), Some(bad), None).is_err());
            assert!(BaseSize::resolve(dims(900, 600), None, Some(bad)).is_err());
        }
    }

    #[test]
    fn empty_source_rejected_unless_fully_overridden() {
        assert_eq!(
            BaseSize::resolve(dims(0, 600), None, None),
            Err(BaseSizeError::EmptySource(0, 600))
        );
        assert!(BaseSize::resolve(dims(0, 600), Some(10.0), None).is_err());
        assert!(BaseSize::resolve(dims(0, 0), Some(10.0), Some(20.0)).is_ok());
    }

    #[test]
    fn huge_overrides_rejected() {
        let result = BaseSize::resolve(dims(3, 3), Some(1e10), Some(1e10));
        assert!(matches!(result, Err(BaseSizeError::TooLarge { .. })));

        let result = BaseSize::resolve(dims(3, 3), Some(1e10), None);
        assert!(matches!(result, Err(BaseSizeError::TooLarge { .. })));
    }

    #[test]
    fn derived_axis_over_limit_rejected() {
        // 100pt wide at 1:1000 gives a 100000pt tall base
        let result = BaseSize::resolve(dims(1, 1000), Some(100.0), None);
        assert!(matches!(result, Err(BaseSizeError::TooLarge { .. })));
    }

    #[test]
    fn override_at_limit_accepted() {
        let max = MAX_PIXEL_DIMENSION as f64;
        assert!(BaseSize::resolve(dims(3, 3), Some(max), Some(1.0)).is_ok());
    }

    #[test]
    fn pixel_limit_per_axis() {
        assert!(within_pixel_limit(dims(MAX_PIXEL_DIMENSION, MAX_PIXEL_DIMENSION)));
        assert!(!within_pixel_limit(dims(MAX_PIXEL_DIMENSION + 1, 1)));
        assert!(!within_pixel_limit(dims(1, u32::MAX)));
    }

    #[test]
    fn to_pixels_clamps_and_rounds() {
        assert_eq!(to_pixels(0.2), 1);
        assert_eq!(to_pixels(0.0), 1);
        assert_eq!(to_pixels(2.5), 3);
        assert_eq!(to_pixels(133.33), 133);
    }
}
