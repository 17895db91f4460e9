//! Dimension resolver: template entries → named entries + resize jobs.
//!
//! Both asset kinds produce a [`VariantPlan`]: the entries that go into the
//! written manifest (each with its `filename` set) and, index for index, the
//! [`ResizeJob`] that renders that file. The plan is complete before any pixel
//! work starts, so the manifest always lists the intended files regardless of
//! which renders later succeed.

use crate::imaging::calculations::{BaseSize, UNIVERSAL_ICON_SIZE, icon_dimensions};
use crate::imaging::{Dimensions, ResizeJob};
use crate::naming::{self, FilenameRegistry};
use crate::platform::UNIVERSAL_IDIOM;
use crate::template::TemplateEntry;
use crate::variant::{NominalSize, Scale, VariantParseError};

/// Manifest entries and their jobs, in template order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantPlan {
    pub entries: Vec<TemplateEntry>,
    pub jobs: Vec<ResizeJob>,
}

impl VariantPlan {
    fn push(&mut self, entry: &TemplateEntry, job: ResizeJob) {
        self.entries.push(entry.with_filename(&job.filename));
        self.jobs.push(job);
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// What an icon entry resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSlot {
    /// Single-size icon for a whole platform.
    Universal { platform_tag: String, dims: Dimensions },
    /// Regular slot: nominal size at a scale.
    Sized { size: NominalSize, scale: Scale },
}

impl IconSlot {
    pub fn dimensions(&self) -> Dimensions {
        match self {
            IconSlot::Universal { dims, .. } => *dims,
            IconSlot::Sized { size, scale } => icon_dimensions(size, *scale),
        }
    }
}

/// Resolve one icon entry.
///
/// Universal entries (idiom `universal`, no `scale`) take their `size` if it
/// parses and 1024×1024 otherwise. Everything else needs a valid `scale` and
/// `size`.
pub fn resolve_icon_entry(entry: &TemplateEntry) -> Result<IconSlot, VariantParseError> {
    if entry.idiom() == Some(UNIVERSAL_IDIOM) && entry.scale.is_none() {
        let dims = entry
            .size
            .as_deref()
            .and_then(|s| NominalSize::parse(s).ok())
            .map(|size| icon_dimensions(&size, Scale::ONE))
            .unwrap_or(Dimensions {
                width: UNIVERSAL_ICON_SIZE,
                height: UNIVERSAL_ICON_SIZE,
            });
        return Ok(IconSlot::Universal {
            platform_tag: entry.platform().unwrap_or(UNIVERSAL_IDIOM).to_string(),
            dims,
        });
    }

    let scale = entry.scale.as_deref().ok_or(VariantParseError::Missing("scale"))?;
    let size = entry.size.as_deref().ok_or(VariantParseError::Missing("size"))?;
    Ok(IconSlot::Sized {
        size: NominalSize::parse(size)?,
        scale: Scale::parse(scale)?,
    })
}

/// Plan an icon set from already-filtered entries.
///
/// Entries whose `scale` or `size` do not parse are left out of both the
/// manifest and the jobs.
pub fn plan_icon_set(entries: &[TemplateEntry]) -> VariantPlan {
    let mut registry = FilenameRegistry::new();
    let mut plan = VariantPlan::default();

    for entry in entries {
        let Ok(slot) = resolve_icon_entry(entry) else {
            continue;
        };
        let candidates = match &slot {
            IconSlot::Universal { platform_tag, .. } => {
                vec![naming::universal_icon_filename(platform_tag)]
            }
            IconSlot::Sized { size, scale } => {
                let mut names = vec![naming::icon_filename(&size.label, *scale)];
                if let Some(idiom) = entry.idiom() {
                    names.push(naming::icon_idiom_filename(idiom, &size.label, *scale));
                }
                names
            }
        };
        let filename = registry.claim(candidates);
        plan.push(entry, ResizeJob::from_dimensions(slot.dimensions(), filename));
    }
    plan
}

/// An image-set entry whose `scale` could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidImageEntry {
    pub index: usize,
    pub error: VariantParseError,
}

/// Plan an image set: every entry is kept, sized at `base × scale`.
pub fn plan_image_set(
    entries: &[TemplateEntry],
    base: &BaseSize,
    base_name: &str,
) -> Result<VariantPlan, InvalidImageEntry> {
    let mut registry = FilenameRegistry::new();
    let mut plan = VariantPlan::default();

    for (index, entry) in entries.iter().enumerate() {
        let scale = entry
            .scale
            .as_deref()
            .ok_or(VariantParseError::Missing("scale"))
            .and_then(Scale::parse)
            .map_err(|error| InvalidImageEntry { index, error })?;
        let filename = registry.claim([naming::image_filename(base_name, scale)]);
        plan.push(entry, ResizeJob::from_dimensions(base.at_scale(scale), filename));
    }
    Ok(plan)
}
