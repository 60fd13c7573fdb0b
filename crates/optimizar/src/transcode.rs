//! Per-file re-encoding at a fixed quality, plus the WebP derivative.

use crate::replace::write_atomic;
use crate::report::TranscodeReport;
use crate::result::{OptimizeError, OptimizeResult};
use crate::scanner::{AssetFile, ImageKind};
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, DynamicImage, GenericImageView, ImageFormat};
use std::fs;
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed encode quality for JPEG and WebP output
///
/// Not exposed through configuration; the pipeline runs at one setting.
pub const QUALITY: u8 = 80;

/// Path of the WebP derivative for an image: `<dir>/<basename>.webp`
#[must_use]
pub fn webp_sibling_path(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

/// Optimize one image in place and write its WebP derivative
///
/// The original file keeps its extension and is replaced atomically; the
/// derivative is written directly since it is a new artifact. The WebP is
/// encoded from the committed optimized file, so a derivative failure
/// after a successful replace still leaves a valid optimized original.
///
/// # Errors
///
/// Any decode, encode, or I/O failure is returned for this file alone;
/// callers log it and continue with the next file.
pub fn optimize_file(path: &Path) -> OptimizeResult<TranscodeReport> {
    let asset = AssetFile::from_path(path)?;
    let bytes = fs::read(path)?;

    let optimized = reencode(&bytes, asset.kind)?;
    write_atomic(path, &optimized)?;
    debug!(path = %path.display(), kind = ?asset.kind, "committed optimized image");

    let webp = encode_webp(&optimized, asset.kind)?;
    let webp_bytes = webp.len() as u64;
    fs::write(webp_sibling_path(path), webp)?;

    Ok(TranscodeReport {
        original_bytes: asset.size_bytes,
        optimized_bytes: optimized.len() as u64,
        webp_bytes: Some(webp_bytes),
    })
}

/// Re-encode raw image bytes in their native format
fn reencode(bytes: &[u8], kind: ImageKind) -> OptimizeResult<Vec<u8>> {
    match kind {
        ImageKind::Png => encode_png(&decode(bytes, ImageFormat::Png)?),
        ImageKind::Jpeg => encode_jpeg(&decode(bytes, ImageFormat::Jpeg)?),
        ImageKind::Gif => reencode_gif(bytes),
    }
}

/// Decode with the format implied by the extension
///
/// Mislabeled contents fail here rather than being silently transcoded as
/// whatever they sniff as.
fn decode(bytes: &[u8], format: ImageFormat) -> OptimizeResult<DynamicImage> {
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| OptimizeError::decode(e.to_string()))
}

/// Encode as PNG at maximum lossless compression
///
/// Sources without an alpha channel stay RGB so the re-encode cannot grow
/// them by a quarter.
pub(crate) fn encode_png(img: &DynamicImage) -> OptimizeResult<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut output = Vec::new();

    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);

        let data = if img.color().has_alpha() {
            encoder.set_color(png::ColorType::Rgba);
            img.to_rgba8().into_raw()
        } else {
            encoder.set_color(png::ColorType::Rgb);
            img.to_rgb8().into_raw()
        };

        let mut writer = encoder
            .write_header()
            .map_err(|e| OptimizeError::encode(format!("Failed to write PNG header: {e}")))?;
        writer
            .write_image_data(&data)
            .map_err(|e| OptimizeError::encode(format!("Failed to write PNG data: {e}")))?;
    }

    Ok(output)
}

/// Encode as JPEG at quality 80 with progressive scan
fn encode_jpeg(img: &DynamicImage) -> OptimizeResult<Vec<u8>> {
    let rgb = img.to_rgb8();
    let width = u16::try_from(rgb.width())
        .map_err(|_| OptimizeError::encode("image too wide for JPEG"))?;
    let height = u16::try_from(rgb.height())
        .map_err(|_| OptimizeError::encode("image too tall for JPEG"))?;

    let mut output = Vec::new();
    {
        let mut encoder = jpeg_encoder::Encoder::new(BufWriter::new(&mut output), QUALITY);
        encoder.set_progressive(true);
        encoder
            .encode(rgb.as_raw(), width, height, jpeg_encoder::ColorType::Rgb)
            .map_err(|e| OptimizeError::encode(e.to_string()))?;
    }
    Ok(output)
}

/// Frame-preserving GIF passthrough
///
/// GIF has no lossy quality knob in this pipeline; every frame is decoded
/// and re-encoded as-is. The source loop count is not surfaced by the
/// decoder, so output repeats forever, which is what the site's GIFs do.
fn reencode_gif(bytes: &[u8]) -> OptimizeResult<Vec<u8>> {
    let decoder =
        GifDecoder::new(Cursor::new(bytes)).map_err(|e| OptimizeError::decode(e.to_string()))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| OptimizeError::decode(e.to_string()))?;

    let mut output = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut output);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| OptimizeError::encode(e.to_string()))?;
        encoder
            .encode_frames(frames)
            .map_err(|e| OptimizeError::encode(e.to_string()))?;
    }
    Ok(output)
}

/// Lossy WebP at quality 80 from already-optimized native bytes
///
/// Animated GIFs contribute their first frame; the derivative is a still.
fn encode_webp(optimized: &[u8], kind: ImageKind) -> OptimizeResult<Vec<u8>> {
    let format = match kind {
        ImageKind::Png => ImageFormat::Png,
        ImageKind::Jpeg => ImageFormat::Jpeg,
        ImageKind::Gif => ImageFormat::Gif,
    };
    let img = decode(optimized, format)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let memory = webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode(f32::from(QUALITY));
    Ok(memory.to_vec())
}
