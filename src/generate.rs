//! Pipeline orchestrator: the two public operations.
//!
//! ```text
//! icon set:   decode → icon template → platform filter → resolve → resize (parallel) → Contents.json
//! image set:  decode → natural size → image template → @1x base → resolve → resize (parallel) → Contents.json
//! ```
//!
//! ## Failure policy
//!
//! Anything that leaves nothing useful to produce aborts the call: a
//! template that cannot be loaded ([`GenerateError::Config`]), a source that
//! cannot be decoded ([`GenerateError::DataSource`]), or unusable dimensions
//! ([`GenerateError::Resource`]). Writing the manifest is not best-effort
//! either.
//!
//! Individual variants are. A render or write failure for one job is recorded
//! in the [`GenerateReport`] and reported as a [`GenerateEvent::VariantFailed`],
//! and the call still succeeds. The manifest lists the planned file names,
//! not just the ones that got written.
//!
//! ## Output
//!
//! ```text
//! <output>/AppIcon.appiconset/
//! ├── Contents.json
//! ├── AppIcon_20@2x.png
//! └── ...
//! <output>/<base>.imageset/
//! ├── Contents.json
//! ├── <base>@1x.png
//! ├── <base>@2x.png
//! └── <base>@3x.png
//! ```
//!
//! Re-running with the same inputs overwrites the same files with the same
//! content.

use crate::filter::filter_icon_entries;
use crate::imaging::{
    BackendError, BaseSize, Dimensions, ImageBackend, JobOutcome, RustBackend, SourceImage,
    write_variants,
};
use crate::manifest::{self, MANIFEST_FILENAME, ManifestError};
use crate::naming;
use crate::platform::Platform;
use crate::resolve::{VariantPlan, plan_icon_set, plan_image_set};
use crate::template::{Template, TemplateError, TemplateKind, load_template};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Template error: {0}")]
    Config(#[from] TemplateError),
    #[error("Cannot decode source image {}: {source}", .path.display())]
    DataSource {
        path: PathBuf,
        source: BackendError,
    },
    #[error("Unusable image size: {0}")]
    Resource(String),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Progress events, sent in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    Started {
        folder: PathBuf,
        variants: usize,
    },
    VariantWritten {
        filename: String,
        width: u32,
        height: u32,
    },
    VariantFailed {
        filename: String,
        width: u32,
        height: u32,
        error: String,
    },
    ManifestWritten {
        path: PathBuf,
    },
}

/// Optional inputs shared by both operations.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replaces the bundled icon template.
    pub icon_template: Option<PathBuf>,
    /// Replaces the bundled image template.
    pub image_template: Option<PathBuf>,
    pub progress: Option<Sender<GenerateEvent>>,
}

impl GenerateOptions {
    fn emit(&self, event: GenerateEvent) {
        if let Some(tx) = &self.progress {
            // A dropped receiver only means nobody is listening.
            tx.send(event).ok();
        }
    }
}

/// Explicit `@1x` size for an image set. Missing axes follow the source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeOverrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// What one operation produced.
#[derive(Debug)]
pub struct GenerateReport {
    /// The `.appiconset` / `.imageset` folder.
    pub folder: PathBuf,
    pub manifest_path: PathBuf,
    /// The manifest as written.
    pub manifest: Template,
    /// One per planned variant, in manifest order.
    pub outcomes: Vec<JobOutcome>,
}

impl GenerateReport {
    pub fn written(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(JobOutcome::is_written)
    }
}

/// Generate `AppIcon.appiconset` under `output` for `platforms`.
pub fn generate_icon_set(
    input: &Path,
    output: &Path,
    platforms: &[Platform],
    prefers_universal: bool,
) -> Result<GenerateReport, GenerateError> {
    generate_icon_set_with_backend(
        &RustBackend::new(),
        input,
        output,
        platforms,
        prefers_universal,
        &GenerateOptions::default(),
    )
}

/// Generate an icon set using a specific backend (allows testing with mock).
pub fn generate_icon_set_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    platforms: &[Platform],
    prefers_universal: bool,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let source = decode_source(backend, input)?;
    icon_set_from_source(
        backend,
        &source,
        output,
        platforms,
        prefers_universal,
        options,
    )
}

/// Generate an icon set from an already-decoded source.
pub fn icon_set_from_source(
    backend: &impl ImageBackend,
    source: &SourceImage,
    output: &Path,
    platforms: &[Platform],
    prefers_universal: bool,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let template = load_template(TemplateKind::IconSet, options.icon_template.as_deref())?;
    let entries = filter_icon_entries(&template.images, platforms, prefers_universal);
    let plan = plan_icon_set(&entries);
    let folder = output.join(naming::icon_set_folder());
    run_plan(backend, source, &template, plan, folder, options)
}

/// Generate `<name>.imageset` under `output`, where `<name>` is the input's
/// file stem.
pub fn generate_image_set(
    input: &Path,
    output: &Path,
    overrides: SizeOverrides,
) -> Result<GenerateReport, GenerateError> {
    generate_image_set_with_backend(
        &RustBackend::new(),
        input,
        output,
        overrides,
        &GenerateOptions::default(),
    )
}

/// Generate an image set using a specific backend (allows testing with mock).
pub fn generate_image_set_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    overrides: SizeOverrides,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let source = decode_source(backend, input)?;
    image_set_from_source(
        backend,
        &source,
        source.dimensions(),
        &naming::base_name(input),
        output,
        overrides,
        options,
    )
}

/// Generate an image set from an already-decoded source with known natural
/// dimensions.
pub fn image_set_from_source(
    backend: &impl ImageBackend,
    source: &SourceImage,
    natural: Dimensions,
    base_name: &str,
    output: &Path,
    overrides: SizeOverrides,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let template = load_template(TemplateKind::ImageSet, options.image_template.as_deref())?;
    let base = BaseSize::resolve(natural, overrides.width, overrides.height)
        .map_err(|e| GenerateError::Resource(e.to_string()))?;
    let plan = plan_image_set(&template.images, &base, base_name).map_err(|invalid| {
        TemplateError::InvalidEntry {
            name: template_name(TemplateKind::ImageSet, options.image_template.as_deref()),
            index: invalid.index,
            reason: invalid.error.to_string(),
        }
    })?;
    let folder = output.join(naming::image_set_folder(base_name));
    run_plan(backend, source, &template, plan, folder, options)
}

fn template_name(kind: TemplateKind, override_path: Option<&Path>) -> String {
    override_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| kind.resource_name().to_string())
}

fn decode_source(backend: &impl ImageBackend, input: &Path) -> Result<SourceImage, GenerateError> {
    backend
        .decode(input)
        .map_err(|source| GenerateError::DataSource {
            path: input.to_path_buf(),
            source,
        })
}

/// Render every planned job best-effort, then write the manifest.
fn run_plan(
    backend: &impl ImageBackend,
    source: &SourceImage,
    template: &Template,
    plan: VariantPlan,
    folder: PathBuf,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    manifest::ensure_dir(&folder)?;
    options.emit(GenerateEvent::Started {
        folder: folder.clone(),
        variants: plan.len(),
    });

    let manifest = template.with_images(plan.entries);
    let outcomes = write_variants(backend, source, &plan.jobs, &folder);
    for outcome in &outcomes {
        let job = &outcome.job;
        options.emit(match &outcome.result {
            Ok(_) => GenerateEvent::VariantWritten {
                filename: job.filename.clone(),
                width: job.width,
                height: job.height,
            },
            Err(e) => GenerateEvent::VariantFailed {
                filename: job.filename.clone(),
                width: job.width,
                height: job.height,
                error: e.to_string(),
            },
        });
    }

    let manifest_path = manifest::write_manifest(&manifest, &folder, MANIFEST_FILENAME)?;
    options.emit(GenerateEvent::ManifestWritten {
        path: manifest_path.clone(),
    });

    Ok(GenerateReport {
        folder,
        manifest_path,
        manifest,
        outcomes,
    })
}
