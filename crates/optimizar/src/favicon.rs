//! Favicon candidate generation with a conservative adoption policy.
//!
//! The tool has no ICO encoder, so a smaller PNG re-encode is only ever
//! *proposed*: adopting it means changing the asset's format contract,
//! which requires a matching change to the page that references it. The
//! operator gets a backup plus instructions instead of a silent swap.

use crate::config::PipelineConfig;
use crate::result::{OptimizeError, OptimizeResult};
use crate::transcode::encode_png;
use image::imageops::FilterType;
use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Canvas edge for the candidate, the common favicon raster size
pub const FAVICON_SIZE: u32 = 32;

/// Result of one favicon candidate run
#[derive(Debug, Clone)]
pub struct FaviconOutcome {
    /// Size of the favicon as found on disk
    pub original_bytes: u64,
    /// Size of the 32x32 PNG candidate
    pub candidate_bytes: u64,
    /// Whether the candidate was kept for manual adoption
    ///
    /// Decided purely by the size policy; never auto-applied and never
    /// interactive.
    pub adopted: bool,
    /// Where the candidate was written (removed again when not adopted)
    pub candidate_path: PathBuf,
    /// Backup copy of the original, present only when adopted
    pub backup_path: Option<PathBuf>,
}

impl FaviconOutcome {
    /// Percentage the candidate would save over the original
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let original = self.original_bytes as f64;
        let candidate = self.candidate_bytes as f64;
        (original - candidate) / original * 100.0
    }
}

/// Generate a 32x32 PNG candidate for the configured favicon
///
/// Linear pipeline: read, resize to a contain-fit transparent canvas,
/// PNG-encode at max compression, then apply the adoption policy. When
/// the candidate is smaller the original is backed up (copied, not
/// moved) and the candidate is left next to it; otherwise the candidate
/// is deleted and the tree is untouched.
///
/// # Errors
///
/// Fail-closed: any decode or I/O failure cleans up the candidate
/// artifact and returns without modifying the original or its backup.
pub fn generate_favicon_candidate(config: &PipelineConfig) -> OptimizeResult<FaviconOutcome> {
    let favicon = config.favicon_path.as_path();
    let original_bytes = fs::metadata(favicon)?.len();

    let source = fs::read(favicon)?;
    let img =
        image::load_from_memory(&source).map_err(|e| OptimizeError::decode(e.to_string()))?;
    let canvas = contain_on_canvas(&img, FAVICON_SIZE);
    let encoded = encode_png(&DynamicImage::ImageRgba8(canvas))?;
    let candidate_bytes = encoded.len() as u64;

    let candidate_path = candidate_sibling(favicon);
    fs::write(&candidate_path, &encoded)?;
    debug!(path = %candidate_path.display(), bytes = candidate_bytes, "wrote favicon candidate");

    if candidate_bytes < original_bytes {
        let backup_path = backup_sibling(favicon);
        if let Err(e) = fs::copy(favicon, &backup_path) {
            // No partial adoption: remove the candidate before reporting.
            let _ = fs::remove_file(&candidate_path);
            return Err(e.into());
        }
        Ok(FaviconOutcome {
            original_bytes,
            candidate_bytes,
            adopted: true,
            candidate_path,
            backup_path: Some(backup_path),
        })
    } else {
        fs::remove_file(&candidate_path)?;
        Ok(FaviconOutcome {
            original_bytes,
            candidate_bytes,
            adopted: false,
            candidate_path,
            backup_path: None,
        })
    }
}

/// Scale into a square canvas without cropping, transparent padding
fn contain_on_canvas(img: &DynamicImage, size: u32) -> RgbaImage {
    let resized = img.resize(size, size, FilterType::Lanczos3);
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let (w, h) = resized.dimensions();
    let x = i64::from((size - w) / 2);
    let y = i64::from((size - h) / 2);
    imageops::overlay(&mut canvas, &resized.to_rgba8(), x, y);
    canvas
}

/// `<dir>/<stem>-candidate.png` next to the favicon
fn candidate_sibling(favicon: &Path) -> PathBuf {
    let mut name = favicon
        .file_stem()
        .map_or_else(|| OsString::from("favicon"), |s| s.to_os_string());
    name.push("-candidate.png");
    favicon.with_file_name(name)
}

/// `<original>.backup`, full name kept so the format stays obvious
fn backup_sibling(favicon: &Path) -> PathBuf {
    let mut name = favicon.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}
