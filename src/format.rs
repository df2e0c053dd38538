//! EXIF field normalization — raw tag text into display strings.
//!
//! EXIF stores most numeric fields as rationals (`"4/1"`, `"10/2500"`), and
//! the wild contains plenty of malformed ones: corrupt files, vendor tags
//! with garbage denominators, stray quotes in text fields. The policy here
//! is best-effort everywhere: a value that cannot be parsed is passed
//! through unchanged, so a single bad tag never aborts a render.
//!
//! All functions are pure and testable without any I/O.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RationalError {
    #[error("not an a/b rational")]
    Malformed,
    #[error("zero denominator")]
    DivisionByZero,
}

/// Parse an `"a/b"` rational into its numerator and denominator.
///
/// Requires exactly two `/`-separated numeric parts and a nonzero
/// denominator. Surrounding whitespace on either part is tolerated.
pub fn parse_rational(text: &str) -> Result<(f64, f64), RationalError> {
    let mut parts = text.splitn(3, '/');
    let (Some(num), Some(den), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(RationalError::Malformed);
    };
    let num: f64 = num.trim().parse().map_err(|_| RationalError::Malformed)?;
    let den: f64 = den.trim().parse().map_err(|_| RationalError::Malformed)?;
    if den == 0.0 {
        return Err(RationalError::DivisionByZero);
    }
    Ok((num, den))
}

/// Format a rational as a decimal, rounded for display.
///
/// Integral quotients drop the fraction (`"4/1"` → `"4"`), everything else
/// keeps one decimal place (`"3/2"` → `"1.5"`). Used for f-numbers and
/// focal lengths. Unparseable input is returned unchanged.
pub fn format_ratio_rounded(text: &str) -> String {
    match parse_rational(text) {
        Ok((num, den)) => format_quotient(num / den),
        Err(_) => text.to_string(),
    }
}

/// Format an exposure time, re-expressing sub-second values as `1/x`.
///
/// Ratios of one second or more follow [`format_ratio_rounded`] rules.
/// Sub-second ratios collapse to the nearest-integer reciprocal, so
/// `"10/2500"` becomes `"1/250"` and `"1/125"` survives a round trip.
/// Zero or negative ratios and unparseable input are returned unchanged.
pub fn format_exposure(text: &str) -> String {
    let Ok((num, den)) = parse_rational(text) else {
        return text.to_string();
    };
    let ratio = num / den;
    if ratio >= 1.0 {
        format_quotient(ratio)
    } else if ratio > 0.0 {
        format!("1/{:.0}", (1.0 / ratio).round())
    } else {
        text.to_string()
    }
}

/// Strip embedded double quotes and collapse whitespace runs to single
/// spaces, trimming the ends. Applied to every raw tag before use.
pub fn clean_tag_text(text: &str) -> String {
    let unquoted = text.replace('"', "");
    unquoted.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_quotient(ratio: f64) -> String {
    if ratio.fract() == 0.0 {
        format!("{ratio:.0}")
    } else {
        format!("{ratio:.1}")
    }
}
