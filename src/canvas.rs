//! Canvas extension — appending the white margin band below the source.

use image::{DynamicImage, Rgba, RgbaImage};
use thiserror::Error;

/// Fraction of the source height reserved for the margin band.
///
/// This is the single margin-ratio constant; every band-relative size in
/// [`crate::layout`] and [`crate::logo`] keys off the height it produces.
pub const MARGIN_RATIO: f64 = 0.15;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("source image has zero width or height")]
    EmptySource,
}

/// A source image pasted onto an enlarged white canvas.
#[derive(Debug)]
pub struct ExtendedCanvas {
    pub image: RgbaImage,
    /// Height of the original image — the top edge of the margin band.
    pub source_height: u32,
    /// Height of the appended margin band.
    pub band_height: u32,
}

/// Compute the margin band height for a source of height `h`.
pub fn band_height(source_height: u32) -> u32 {
    ((source_height as f64 * MARGIN_RATIO).floor() as u32).max(1)
}

/// Extend a source image with a white margin band at the bottom.
///
/// The canvas is `width × (height + band)`, fully white, with the source
/// pasted at the origin unscaled. A zero-sized source is the only failure;
/// decoded images never hit it in practice.
pub fn extend(source: &DynamicImage) -> Result<ExtendedCanvas, CanvasError> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(CanvasError::EmptySource);
    }

    let band = band_height(height);
    let mut canvas = RgbaImage::from_pixel(width, height + band, WHITE);
    image::imageops::overlay(&mut canvas, &source.to_rgba8(), 0, 0);

    Ok(ExtendedCanvas {
        image: canvas,
        source_height: height,
        band_height: band,
    })
}
