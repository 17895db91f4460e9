//! CLI output formatting.
//!
//! # Output Format
//!
//! Progress, one event at a time:
//!
//! ```text
//! AppIcon.appiconset (18 variants)
//!     AppIcon_20@2x.png 40x40
//!     AppIcon_20@3x.png 60x60
//!     AppIcon_1024@1x.png 1024x1024: failed (Resize error: ...)
//!     Contents.json
//! ```
//!
//! Then a summary:
//!
//! ```text
//! Generated 17 of 18 variants → out/AppIcon.appiconset
//!     Failed: AppIcon_1024@1x.png
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::{GenerateEvent, GenerateReport};
use std::path::Path;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// ============================================================================
// Progress
// ============================================================================

/// Format a single progress event as display lines.
pub fn format_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::Started { folder, variants } => {
            vec![format!(
                "{} ({})",
                display_name(folder),
                plural(*variants, "variant")
            )]
        }
        GenerateEvent::VariantWritten {
            filename,
            width,
            height,
        } => vec![format!("    {filename} {width}x{height}")],
        GenerateEvent::VariantFailed {
            filename,
            width,
            height,
            error,
        } => vec![format!("    {filename} {width}x{height}: failed ({error})")],
        GenerateEvent::ManifestWritten { path } => vec![format!("    {}", display_name(path))],
    }
}

/// Print a progress event to stdout.
pub fn print_event(event: &GenerateEvent) {
    for line in format_event(event) {
        println!("{}", line);
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Format the end-of-run summary for one asset folder.
pub fn format_report(report: &GenerateReport) -> Vec<String> {
    let total = report.outcomes.len();
    let written = report.written().count();

    let mut lines = vec![format!(
        "Generated {} of {} \u{2192} {}",
        written,
        plural(total, "variant"),
        report.folder.display()
    )];
    for outcome in report.failed() {
        lines.push(format!("    Failed: {}", outcome.job.filename));
    }
    lines
}

/// Print the summary to stdout.
pub fn print_report(report: &GenerateReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{BackendError, JobOutcome, ResizeJob};
    use crate::template::{TemplateKind, bundled_template};
    use std::path::PathBuf;

    fn report(outcomes: Vec<JobOutcome>) -> GenerateReport {
        GenerateReport {
            folder: PathBuf::from("out/photo.imageset"),
            manifest_path: PathBuf::from("out/photo.imageset/Contents.json"),
            manifest: bundled_template(TemplateKind::ImageSet).unwrap(),
            outcomes,
        }
    }

    fn written(filename: &str) -> JobOutcome {
        JobOutcome {
            job: ResizeJob::new(10, 10, filename),
            result: Ok(PathBuf::from(filename)),
        }
    }

    fn failed(filename: &str) -> JobOutcome {
        JobOutcome {
            job: ResizeJob::new(10, 10, filename),
            result: Err(BackendError::Resize("boom".into())),
        }
    }

    // =========================================================================
    // Progress tests
    // =========================================================================

    #[test]
    fn started_shows_folder_name_and_count() {
        let lines = format_event(&GenerateEvent::Started {
            folder: PathBuf::from("/tmp/out/AppIcon.appiconset"),
            variants: 18,
        });
        assert_eq!(lines, vec!["AppIcon.appiconset (18 variants)"]);
    }

    #[test]
    fn started_singular() {
        let lines = format_event(&GenerateEvent::Started {
            folder: PathBuf::from("AppIcon.appiconset"),
            variants: 1,
        });
        assert_eq!(lines, vec!["AppIcon.appiconset (1 variant)"]);
    }

    #[test]
    fn variant_lines_are_indented() {
        let ok = format_event(&GenerateEvent::VariantWritten {
            filename: "AppIcon_60@2x.png".into(),
            width: 120,
            height: 120,
        });
        assert_eq!(ok, vec!["    AppIcon_60@2x.png 120x120"]);

        let bad = format_event(&GenerateEvent::VariantFailed {
            filename: "AppIcon_60@3x.png".into(),
            width: 180,
            height: 180,
            error: "Resize error: boom".into(),
        });
        assert_eq!(
            bad,
            vec!["    AppIcon_60@3x.png 180x180: failed (Resize error: boom)"]
        );
    }

    #[test]
    fn manifest_written_shows_file_name() {
        let lines = format_event(&GenerateEvent::ManifestWritten {
            path: PathBuf::from("/tmp/out/AppIcon.appiconset/Contents.json"),
        });
        assert_eq!(lines, vec!["    Contents.json"]);
    }

    // =========================================================================
    // Summary tests
    // =========================================================================

    #[test]
    fn report_all_written() {
        let lines = format_report(&report(vec![written("a@1x.png"), written("a@2x.png")]));
        assert_eq!(
            lines,
            vec!["Generated 2 of 2 variants \u{2192} out/photo.imageset"]
        );
    }

    #[test]
    fn report_lists_failures() {
        let lines = format_report(&report(vec![
            written("a@1x.png"),
            failed("a@2x.png"),
            written("a@3x.png"),
        ]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Generated 2 of 3 variants"));
        assert_eq!(lines[1], "    Failed: a@2x.png");
    }
}
