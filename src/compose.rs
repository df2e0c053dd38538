//! The render pipeline: decode → orient → extend → logo → text → flatten.
//!
//! One parameterized pipeline, driven by [`RenderOptions`], covers every
//! output variant. Stage policy follows the error design: decoding the
//! source (and encoding the result) are the only fatal steps; everything
//! downstream degrades — missing metadata renders as empty text, an
//! unknown make renders without a mark.

use crate::canvas::{self, CanvasError, ExtendedCanvas};
use crate::exif::{read_exif, ExifInfo};
use crate::font;
use crate::layout;
use crate::logo::{self, Brand};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage};
use log::debug;
use std::path::Path;
use thiserror::Error;

/// Longest edge of a bounded preview, in pixels.
pub const PREVIEW_MAX_EDGE: u32 = 1000;

/// JPEG quality for encoded previews.
const PREVIEW_QUALITY: u8 = 90;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to decode source image: {0}")]
    Source(image::ImageError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("failed to encode output: {0}")]
    Encode(image::ImageError),
}

/// Which overlay elements to include. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub logo: bool,
    pub aperture: bool,
    pub exposure: bool,
    pub iso: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            logo: true,
            aperture: true,
            exposure: true,
            iso: true,
        }
    }
}

/// Render a source file into a framed image.
///
/// Decode failure is the one fatal path; metadata problems degrade.
pub fn render(path: &Path, opts: &RenderOptions) -> Result<RgbImage, RenderError> {
    let source = image::open(path).map_err(RenderError::Source)?;
    let info = read_exif(path);
    compose(source, &info, opts)
}

/// Render a source file and save the framed image to `output`.
///
/// The output format follows the extension (`.jpg`, `.png`, ...).
pub fn render_to_file(path: &Path, output: &Path, opts: &RenderOptions) -> Result<(), RenderError> {
    let framed = render(path, opts)?;
    framed.save(output).map_err(RenderError::Encode)
}

/// Render a source file into bounded-preview JPEG bytes.
///
/// The longest edge is clamped to [`PREVIEW_MAX_EDGE`], aspect-preserving,
/// resampled with Lanczos3.
pub fn render_preview_jpeg(path: &Path, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let framed = render(path, opts)?;
    let bounded = bound_longest_edge(framed, PREVIEW_MAX_EDGE);

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, PREVIEW_QUALITY)
        .write_image(
            bounded.as_raw(),
            bounded.width(),
            bounded.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(RenderError::Encode)?;
    Ok(buf)
}

/// Composite metadata onto an already-decoded source.
///
/// Split out from [`render`] so callers (and tests) can supply the
/// metadata record directly.
pub fn compose(
    source: DynamicImage,
    info: &ExifInfo,
    opts: &RenderOptions,
) -> Result<RgbImage, RenderError> {
    let oriented = apply_orientation(source, &info.orientation);
    let ExtendedCanvas {
        mut image,
        source_height,
        band_height,
    } = canvas::extend(&oriented)?;
    let width = image.width();

    // Title row: optional brand mark, then the model text after it.
    let title_size = layout::MODEL.font_size(band_height);
    let tm = font::metrics(title_size);
    let title_y = layout::MODEL.baseline_y(source_height, band_height, tm.ascent, tm.descent);
    let mut cursor_x = layout::MODEL.anchor_x(width, 0);
    if opts.logo {
        match Brand::from_make(&info.make) {
            Some(brand) => {
                if let Some(mark) = logo::place(brand, band_height, cursor_x, title_y) {
                    image::imageops::overlay(&mut image, &mark.image, mark.x, mark.y);
                    cursor_x += mark.advance;
                }
            }
            None if !info.make.is_empty() => debug!("no brand mark for make {:?}", info.make),
            None => {}
        }
    }
    font::draw_text(
        &mut image,
        layout::MODEL.color,
        cursor_x,
        title_y,
        title_size,
        &info.model,
    );

    // Detail row, left: capture date with the date separators normalized
    // ("2024:05:01 12:30:00" → "2024-05-01 12:30:00").
    let dt_size = layout::DATETIME.font_size(band_height);
    let dm = font::metrics(dt_size);
    let dt_y = layout::DATETIME.baseline_y(source_height, band_height, dm.ascent, dm.descent);
    let dt_text = info.capture_time.replacen(':', "-", 2);
    font::draw_text(
        &mut image,
        layout::DATETIME.color,
        layout::DATETIME.anchor_x(width, 0),
        dt_y,
        dt_size,
        &dt_text,
    );

    // Title row, right: lens model and focal length.
    let lens_text = format!("{} ({}mm)", info.lens_model, info.focal_length);
    let lens_size = layout::LENS.font_size(band_height);
    let lm = font::metrics(lens_size);
    let lens_y = layout::LENS.baseline_y(source_height, band_height, lm.ascent, lm.descent);
    let lens_w = font::measure(&lens_text, lens_size);
    font::draw_text(
        &mut image,
        layout::LENS.color,
        layout::LENS.anchor_x(width, lens_w),
        lens_y,
        lens_size,
        &lens_text,
    );

    // Detail row, right: the settings line from the enabled parts.
    let settings_text = settings_line(info, opts);
    if !settings_text.is_empty() {
        let settings_size = layout::SETTINGS.font_size(band_height);
        let sm = font::metrics(settings_size);
        let settings_y =
            layout::SETTINGS.baseline_y(source_height, band_height, sm.ascent, sm.descent);
        let settings_w = font::measure(&settings_text, settings_size);
        font::draw_text(
            &mut image,
            layout::SETTINGS.color,
            layout::SETTINGS.anchor_x(width, settings_w),
            settings_y,
            settings_size,
            &settings_text,
        );
    }

    // Flatten: the canvas is fully opaque, so RGB is the export format.
    Ok(DynamicImage::ImageRgba8(image).to_rgb8())
}

/// Build the settings line (`"1/250s, f/4, ISO400"`) from the enabled parts.
fn settings_line(info: &ExifInfo, opts: &RenderOptions) -> String {
    let mut parts = Vec::new();
    if opts.exposure {
        parts.push(format!("{}s", info.exposure_time));
    }
    if opts.aperture {
        parts.push(format!("f/{}", info.f_number));
    }
    if opts.iso {
        parts.push(format!("ISO{}", info.iso));
    }
    parts.join(", ")
}

/// Rotate the source per its EXIF orientation code.
///
/// Only codes 3, 6 and 8 rotate (180°, 270° CCW, 90° CCW); any other
/// value, including absent, is a no-op.
fn apply_orientation(img: DynamicImage, code: &str) -> DynamicImage {
    match code {
        "3" => img.rotate180(),
        "6" => img.rotate90(),
        "8" => img.rotate270(),
        _ => img,
    }
}

/// Shrink so the longest edge fits `max`, preserving aspect ratio.
/// Images already within bounds pass through untouched.
fn bound_longest_edge(img: RgbImage, max: u32) -> RgbImage {
    let (w, h) = (img.width(), img.height());
    if w <= max && h <= max {
        return img;
    }
    let (new_w, new_h) = if w >= h {
        (max, (h as u64 * max as u64 / w as u64).max(1) as u32)
    } else {
        ((w as u64 * max as u64 / h as u64).max(1) as u32, max)
    };
    image::imageops::resize(&img, new_w, new_h, FilterType::Lanczos3)
}
