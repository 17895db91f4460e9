//! Typed forms of the string-encoded numbers in templates.
//!
//! Templates write scales as `"2x"` and sizes as `"60x60"` or `"83.5x83.5"`.
//! They are parsed once into [`Scale`] and [`NominalSize`]; callers decide
//! whether a parse failure skips the entry (icon sets) or fails the template
//! (image sets).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantParseError {
    #[error("missing '{0}'")]
    Missing(&'static str),
    #[error("invalid scale '{0}', expected e.g. \"2x\"")]
    InvalidScale(String),
    #[error("invalid size '{0}', expected e.g. \"60x60\"")]
    InvalidSize(String),
}

/// Integer scale factor (`"3x"` → 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale(u32);

impl Scale {
    pub const ONE: Scale = Scale(1);

    pub fn new(factor: u32) -> Option<Self> {
        (factor > 0).then_some(Self(factor))
    }

    pub fn factor(self) -> u32 {
        self.0
    }

    /// Parse `"<digits>x"`. The leading digits are the factor; zero is rejected.
    pub fn parse(text: &str) -> Result<Self, VariantParseError> {
        let invalid = || VariantParseError::InvalidScale(text.to_string());
        let digits = text.trim().strip_suffix('x').ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits
            .parse::<u32>()
            .ok()
            .and_then(Scale::new)
            .ok_or_else(invalid)
    }
}

/// Nominal (point) size of an icon slot.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalSize {
    pub width: f64,
    pub height: f64,
    /// Width component as written in the template, used in filenames.
    pub label: String,
}

impl NominalSize {
    /// Parse `"<w>x<h>"` where both parts are positive decimals.
    pub fn parse(text: &str) -> Result<Self, VariantParseError> {
        let invalid = || VariantParseError::InvalidSize(text.to_string());
        let (w, h) = text.trim().split_once('x').ok_or_else(invalid)?;
        let width = parse_dimension(w).ok_or_else(invalid)?;
        let height = parse_dimension(h).ok_or_else(invalid)?;
        Ok(Self {
            width,
            height,
            label: w.trim().to_string(),
        })
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

fn parse_dimension(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
