//! EXIF extraction into the normalized [`ExifInfo`] record.
//!
//! Reading is strictly best-effort: a file with no EXIF container, a
//! container with missing tags, or tags with malformed values all produce
//! empty-string fields, never errors. The record is built once per source
//! image and is immutable afterwards.

use crate::format::{clean_tag_text, format_exposure, format_ratio_rounded};
use exif::{In, Tag, Value};
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Normalized camera metadata for one image.
///
/// Every field defaults to the empty string when the source tag is absent
/// or unparseable. The numeric fields hold display strings, already
/// normalized (`exposure_time` canonical `1/x`, `f_number`/focal lengths
/// rounded decimals). `orientation` is the raw EXIF code `"1"`–`"8"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifInfo {
    pub make: String,
    pub model: String,
    pub lens_make: String,
    pub lens_model: String,
    pub capture_time: String,
    pub exposure_time: String,
    pub f_number: String,
    pub iso: String,
    pub focal_length: String,
    pub focal_length_35mm: String,
    pub orientation: String,
}

/// Read and normalize EXIF metadata from an image file.
///
/// Never fails: any read or parse problem degrades to default fields.
pub fn read_exif(path: &Path) -> ExifInfo {
    let Ok(file) = File::open(path) else {
        debug!("no readable file at {}, metadata empty", path.display());
        return ExifInfo::default();
    };
    let mut reader = BufReader::new(file);
    let parsed = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("no EXIF in {}: {e}", path.display());
            return ExifInfo::default();
        }
    };

    ExifInfo {
        make: raw_field(&parsed, Tag::Make),
        model: raw_field(&parsed, Tag::Model),
        lens_make: raw_field(&parsed, Tag::LensMake),
        lens_model: raw_field(&parsed, Tag::LensModel),
        capture_time: raw_field(&parsed, Tag::DateTimeOriginal),
        exposure_time: format_exposure(&raw_field(&parsed, Tag::ExposureTime)),
        f_number: format_ratio_rounded(&raw_field(&parsed, Tag::FNumber)),
        iso: uint_field(&parsed, Tag::PhotographicSensitivity),
        focal_length: format_ratio_rounded(&raw_field(&parsed, Tag::FocalLength)),
        focal_length_35mm: format_ratio_rounded(&raw_field(&parsed, Tag::FocalLengthIn35mmFilm)),
        orientation: uint_field(&parsed, Tag::Orientation),
    }
}

/// Render a tag's value as cleaned raw text.
///
/// Rationals come out in `a/b` form so the normalizers in [`crate::format`]
/// see the exact numerator and denominator, not a pre-rounded decimal.
fn raw_field(parsed: &exif::Exif, tag: Tag) -> String {
    let Some(field) = parsed.get_field(tag, In::PRIMARY) else {
        return String::new();
    };
    let text = match &field.value {
        Value::Rational(v) if !v.is_empty() => format!("{}/{}", v[0].num, v[0].denom),
        Value::SRational(v) if !v.is_empty() => format!("{}/{}", v[0].num, v[0].denom),
        Value::Ascii(v) if !v.is_empty() => String::from_utf8_lossy(&v[0]).into_owned(),
        _ => match field.value.get_uint(0) {
            Some(n) => n.to_string(),
            None => field.display_value().to_string(),
        },
    };
    clean_tag_text(&text)
}

/// Read an integer-valued tag (ISO, orientation) as a decimal string.
fn uint_field(parsed: &exif::Exif, tag: Tag) -> String {
    parsed
        .get_field(tag, In::PRIMARY)
        .and_then(|f| f.value.get_uint(0))
        .map(|n| n.to_string())
        .unwrap_or_default()
}
