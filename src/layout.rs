//! Anchor and baseline math for the margin band.
//!
//! All functions here are pure: they take canvas dimensions, band height,
//! and font metrics as plain numbers and return pixel coordinates. The
//! band hosts two visual rows — a title row (camera model, lens line)
//! nudged above center and a detail row (datetime, settings) nudged below
//! — both built from the same centering term.
//!
//! The shared `(band + ascent − descent) / 2` term centers a text baseline
//! within the band using the face's actual ink extents, so the two rows
//! stay balanced across fonts and band heights without per-element tuning.
//!
//! Coordinates are in the extended canvas's own space: origin top-left,
//! y increasing downward, and every y here is a *baseline*, not a bounding
//! box edge.

use image::Rgba;

/// Fraction of the canvas width used as the left/right inset.
pub const SIDE_MARGIN_RATIO: f64 = 0.03;

const NEAR_BLACK: Rgba<u8> = Rgba([16, 16, 16, 255]);
const GRAY_BLUE: Rgba<u8> = Rgba([180, 180, 200, 255]);

/// Horizontal inset shared by every element.
pub fn side_margin(width: u32) -> u32 {
    (width as f64 * SIDE_MARGIN_RATIO).floor() as u32
}

/// Horizontal anchor edge for a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Right,
}

/// Which of the two visual rows the element sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Nudged up from the band center (title row).
    Upper,
    /// Nudged down from the band center (detail row).
    Lower,
}

/// Fixed layout configuration for one text element.
///
/// These are constants, not runtime data: the four elements of the band
/// each get one style, and variance between renders lives entirely in the
/// text they carry.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Font size as a fraction of the band height.
    pub size_frac: f64,
    /// Baseline nudge from band center, as a fraction of the band height.
    pub row_offset_frac: f64,
    pub row: Row,
    pub anchor: Anchor,
    pub color: Rgba<u8>,
}

/// Camera model — the headline element.
pub const MODEL: TextStyle = TextStyle {
    size_frac: 0.28,
    row_offset_frac: 0.13,
    row: Row::Upper,
    anchor: Anchor::Left,
    color: NEAR_BLACK,
};

/// Capture timestamp, below the model.
pub const DATETIME: TextStyle = TextStyle {
    size_frac: 0.15,
    row_offset_frac: 0.17,
    row: Row::Lower,
    anchor: Anchor::Left,
    color: GRAY_BLUE,
};

/// Lens model and focal length, upper right.
pub const LENS: TextStyle = TextStyle {
    size_frac: 0.15,
    row_offset_frac: 0.17,
    row: Row::Upper,
    anchor: Anchor::Right,
    color: GRAY_BLUE,
};

/// Exposure settings line, lower right.
pub const SETTINGS: TextStyle = TextStyle {
    size_frac: 0.2,
    row_offset_frac: 0.13,
    row: Row::Lower,
    anchor: Anchor::Right,
    color: NEAR_BLACK,
};

impl TextStyle {
    /// Font size in pixels for a given band height.
    pub fn font_size(&self, band_height: u32) -> f32 {
        (band_height as f64 * self.size_frac) as f32
    }

    /// Baseline y-coordinate in the extended canvas.
    ///
    /// `ascent` and `descent` are the face's ink extents at this element's
    /// size, both positive pixels.
    pub fn baseline_y(&self, source_height: u32, band_height: u32, ascent: i32, descent: i32) -> i32 {
        let centered = source_height as i32 + (band_height as i32 + ascent - descent) / 2;
        let nudge = (band_height as f64 * self.row_offset_frac).floor() as i32;
        match self.row {
            Row::Upper => centered - nudge,
            Row::Lower => centered + nudge,
        }
    }

    /// Left edge of the text run, given its measured width.
    pub fn anchor_x(&self, width: u32, text_width: u32) -> i32 {
        match self.anchor {
            Anchor::Left => side_margin(width) as i32,
            Anchor::Right => width as i32 - side_margin(width) as i32 - text_width as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_margin_is_floor_of_ratio() {
        assert_eq!(side_margin(4000), 120);
        assert_eq!(side_margin(100), 3);
        assert_eq!(side_margin(10), 0);
    }

    #[test]
    fn title_row_sits_above_detail_row() {
        // Invariant for any positive band: model baseline < settings baseline.
        for band in [1u32, 10, 37, 180, 450, 1000] {
            let model_y = MODEL.baseline_y(3000, band, 20, 5);
            let settings_y = SETTINGS.baseline_y(3000, band, 14, 4);
            assert!(
                model_y < settings_y,
                "band {band}: model {model_y} not above settings {settings_y}"
            );
        }
    }

    #[test]
    fn baseline_lands_inside_canvas() {
        let band = 450;
        let y = MODEL.baseline_y(3000, band, 120, 30);
        assert!(y > 3000);
        assert!(y < 3000 + band as i32);
    }

    #[test]
    fn baseline_centering_term() {
        // source 100, band 20, ascent 8, descent 2:
        // centered = 100 + (20 + 8 - 2)/2 = 113; nudge = floor(20*0.13) = 2
        assert_eq!(MODEL.baseline_y(100, 20, 8, 2), 111);
        assert_eq!(SETTINGS.baseline_y(100, 20, 8, 2), 115);
    }

    #[test]
    fn left_anchor_ignores_text_width() {
        assert_eq!(MODEL.anchor_x(1000, 600), 30);
        assert_eq!(MODEL.anchor_x(1000, 0), 30);
    }

    #[test]
    fn right_anchor_subtracts_text_width() {
        assert_eq!(LENS.anchor_x(1000, 200), 1000 - 30 - 200);
        assert_eq!(SETTINGS.anchor_x(4000, 500), 4000 - 120 - 500);
    }

    #[test]
    fn font_sizes_scale_with_band() {
        assert_eq!(MODEL.font_size(100), 28.0);
        assert_eq!(DATETIME.font_size(100), 15.0);
        assert_eq!(LENS.font_size(100), 15.0);
        assert_eq!(SETTINGS.font_size(100), 20.0);
    }
}
