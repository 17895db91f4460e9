//! High-level image operations.
//!
//! These functions combine a backend with the filesystem: render each
//! [`ResizeJob`] and write its PNG into the asset folder. Jobs are independent
//! and run in parallel on the rayon pool; a failing job produces a failed
//! [`JobOutcome`] and never stops the others.

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::ResizeJob;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Result of one resize job.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: ResizeJob,
    pub result: Result<PathBuf, BackendError>,
}

impl JobOutcome {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

/// Render one job and write it to `output_dir/job.filename`.
///
/// Overwrites an existing file of the same name.
pub fn write_variant(
    backend: &impl ImageBackend,
    source: &SourceImage,
    job: &ResizeJob,
    output_dir: &Path,
) -> Result<PathBuf, BackendError> {
    let png = backend.render(source, job)?;
    let path = output_dir.join(&job.filename);
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Run every job, best-effort. Outcomes come back in job order.
pub fn write_variants(
    backend: &impl ImageBackend,
    source: &SourceImage,
    jobs: &[ResizeJob],
    output_dir: &Path,
) -> Vec<JobOutcome> {
    jobs.par_iter()
        .map(|job| JobOutcome {
            job: job.clone(),
            result: write_variant(backend, source, job, output_dir),
        })
        .collect()
}
