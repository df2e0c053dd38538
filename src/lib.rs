//! # exif-frame
//!
//! Overlays camera metadata — model, lens, exposure settings, capture time,
//! and an optional brand mark — onto a photograph by extending its canvas
//! with a white margin band and rendering formatted text into it.
//!
//! # Architecture: One Pipeline, Five Stages
//!
//! ```text
//! decode → orient → extend → logo → text ×4 → flatten
//! ```
//!
//! Decoding the source is the only fatal stage (plus encoding at the very
//! end). Every later stage degrades instead of aborting: a missing tag
//! renders as empty text, an unknown manufacturer renders without a mark.
//! Malformed EXIF is common in the wild, and a single bad tag should never
//! cost the whole overlay.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`format`] | Rational parsing and display normalization (`"10/2500"` → `"1/250"`) |
//! | [`exif`] | Best-effort tag extraction into the normalized [`exif::ExifInfo`] record |
//! | [`canvas`] | White margin-band extension below the source |
//! | [`layout`] | Baseline/anchor math and the per-element style table |
//! | [`font`] | Embedded face: measurement, metrics, baseline rasterization |
//! | [`logo`] | Manufacturer → bundled brand mark, aspect-preserving scale |
//! | [`compose`] | The pipeline itself, plus file output and bounded previews |
//!
//! # Design Decisions
//!
//! ## Baseline-Relative Layout
//!
//! Every text y-coordinate is a baseline, not a bounding-box edge. The
//! shared `(band + ascent − descent) / 2` centering term in [`layout`]
//! accounts for the face's real ink extents, so the title and detail rows
//! stay visually balanced across arbitrary image sizes without per-font
//! tuning.
//!
//! ## Variance Is Configuration
//!
//! The overlay's optional pieces (logo, aperture, exposure, ISO) are four
//! booleans on [`compose::RenderOptions`] driving one pipeline — not
//! separate code paths per output flavor.
//!
//! ## Process-Wide Immutable Assets
//!
//! The font face is parsed once into a `LazyLock` and the brand marks are
//! `include_bytes!` data. Both are read-only after load, so concurrent
//! renders share them without locking; each render owns its canvas
//! exclusively.

pub mod canvas;
pub mod compose;
pub mod exif;
pub mod font;
pub mod format;
pub mod layout;
pub mod logo;

#[cfg(test)]
pub(crate) mod test_helpers;
