//! # assetool
//!
//! Generates Xcode asset catalog folders from one source image: an
//! `AppIcon.appiconset` with every icon size the chosen platforms need, or a
//! `<name>.imageset` with `@1x`/`@2x`/`@3x` renditions. Each folder gets a
//! `Contents.json` manifest naming its files.
//!
//! # Architecture: One Pipeline, Two Asset Kinds
//!
//! ```text
//! source image ─ decode ─┐
//! template ─ filter ─ resolve ─ resize (parallel) ─ write PNGs ─ Contents.json
//! ```
//!
//! Templates are `Contents.json` documents without filenames. The bundled
//! ones ship inside the binary and can be replaced per run. Everything up to
//! the resize step is pure data work on template entries, so most of the
//! pipeline is tested without touching pixels.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | The two operations, `generate_icon_set` and `generate_image_set` |
//! | [`template`] | Loading bundled or user `Contents.json` templates |
//! | [`platform`] | Platform names and the idioms each one accepts |
//! | [`filter`] | Selecting icon entries for the requested platforms |
//! | [`variant`] | Typed scale (`"2x"`) and size (`"60x60"`) values |
//! | [`resolve`] | Template entries → filenames and pixel sizes |
//! | [`naming`] | File and folder naming conventions |
//! | [`imaging`] | Decode, resize and PNG encode via the `image` crate |
//! | [`manifest`] | Writing `Contents.json` |
//! | [`config`] | Optional `assetool.toml` loading and validation |
//! | [`output`] | CLI progress and summary formatting |
//!
//! # Design Decisions
//!
//! ## The Source Is Drawn at 3x
//!
//! For image sets the source is treated as the `@3x` rendition unless an
//! explicit `@1x` width or height is given. Pixel sizes are rounded once, at
//! the final scale, so `@2x` is not forced to be exactly twice a rounded
//! `@1x`.
//!
//! ## Best-Effort Variants
//!
//! A variant that fails to render or write is reported and skipped. The
//! manifest still lists it, so a rerun can fill the gap.
//!
//! ## Pure-Rust Imaging
//!
//! Resizing uses the `image` crate (Lanczos3). No system libraries are
//! needed at runtime.

pub mod config;
pub mod filter;
pub mod generate;
pub mod imaging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod platform;
pub mod resolve;
pub mod template;
pub mod variant;
