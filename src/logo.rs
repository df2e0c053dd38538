//! Brand mark resolution and placement.
//!
//! Manufacturer strings in EXIF are free text ("NIKON CORPORATION",
//! "SONY Corp", "Apple"), so matching is a lower-cased substring scan over
//! a closed keyword table. Adding a brand is a new table row and asset,
//! not new control flow. Every failure mode — unknown make, missing or
//! undecodable asset — degrades to rendering without a logo.

use image::imageops::FilterType;
use image::RgbaImage;
use log::warn;

/// Target logo height as a fraction of the margin band height.
pub const LOGO_HEIGHT_FRAC: f64 = 0.3;

/// Gap after the logo, as a fraction of the logo height.
const LOGO_GAP_FRAC: f64 = 0.3;

/// Vertical lift of the logo center above the title baseline, as a
/// fraction of the logo height.
const LOGO_LIFT_FRAC: f64 = 0.37;

/// The set of camera makers with a bundled mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Nikon,
    Sony,
    Apple,
    Canon,
    Panasonic,
    Leica,
}

/// Substring keys checked against the lower-cased make; first match wins.
const BRAND_KEYWORDS: &[(&str, Brand)] = &[
    ("nikon", Brand::Nikon),
    ("sony", Brand::Sony),
    ("apple", Brand::Apple),
    ("canon", Brand::Canon),
    ("panasonic", Brand::Panasonic),
    ("leica", Brand::Leica),
];

impl Brand {
    /// Resolve a free-text manufacturer string to a known brand.
    pub fn from_make(make: &str) -> Option<Brand> {
        let needle = make.to_lowercase();
        BRAND_KEYWORDS
            .iter()
            .find(|(key, _)| needle.contains(key))
            .map(|(_, brand)| *brand)
    }

    fn asset_bytes(self) -> &'static [u8] {
        match self {
            Brand::Nikon => include_bytes!("../assets/logos/nikon.png"),
            Brand::Sony => include_bytes!("../assets/logos/sony.png"),
            Brand::Apple => include_bytes!("../assets/logos/apple.png"),
            Brand::Canon => include_bytes!("../assets/logos/canon.png"),
            Brand::Panasonic => include_bytes!("../assets/logos/panasonic.png"),
            Brand::Leica => include_bytes!("../assets/logos/leica.png"),
        }
    }
}

/// A scaled mark ready to composite, with its placement and the distance
/// the following text cursor must advance.
#[derive(Debug)]
pub struct PlacedLogo {
    pub image: RgbaImage,
    pub x: i64,
    pub y: i64,
    /// Scaled width plus the trailing gap.
    pub advance: i32,
}

/// Scale a brand's mark to the band and compute its placement.
///
/// The mark is scaled aspect-preserving to `band_height * 0.3` and sits
/// left of the model text: its center rides above the title baseline by a
/// fixed fraction of its own height. Returns `None` (with a warning) if
/// the bundled asset fails to decode.
pub fn place(brand: Brand, band_height: u32, x_cursor: i32, title_baseline: i32) -> Option<PlacedLogo> {
    let source = match image::load_from_memory(brand.asset_bytes()) {
        Ok(img) => img,
        Err(e) => {
            warn!("logo asset for {brand:?} failed to decode, skipping: {e}");
            return None;
        }
    };

    let target_h = ((band_height as f64 * LOGO_HEIGHT_FRAC) as u32).max(1);
    let scaled_w = ((source.width() as u64 * target_h as u64) / source.height().max(1) as u64)
        .max(1) as u32;
    let scaled = image::imageops::resize(&source, scaled_w, target_h, FilterType::CatmullRom);

    let y = title_baseline - target_h as i32 / 2 - (target_h as f64 * LOGO_LIFT_FRAC).floor() as i32;
    let advance = scaled_w as i32 + (target_h as f64 * LOGO_GAP_FRAC).floor() as i32;

    Some(PlacedLogo {
        image: scaled,
        x: x_cursor as i64,
        y: y as i64,
        advance,
    })
}
