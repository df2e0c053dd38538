//! Text measurement and rasterization on the embedded face.
//!
//! The face is parsed from embedded bytes exactly once into a process-wide
//! static and shared read-only by every render; concurrent callers need no
//! locking. Drawing is baseline-positioned and blends glyph coverage into
//! the canvas, so placement composes directly with [`crate::layout`].

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::sync::LazyLock;

static FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

static FACE: LazyLock<Font<'static>> = LazyLock::new(|| {
    // The bytes are compiled in; failure here is a build defect, not input.
    Font::try_from_bytes(FONT_BYTES).expect("embedded font parses")
});

/// Ink extents above and below the baseline, both positive pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub ascent: i32,
    pub descent: i32,
}

/// Face metrics at the given pixel size.
pub fn metrics(size: f32) -> Metrics {
    let v = FACE.v_metrics(Scale::uniform(size));
    Metrics {
        ascent: v.ascent.round() as i32,
        descent: (-v.descent).round() as i32,
    }
}

/// Width of a text run in pixels (sum of horizontal advances).
pub fn measure(text: &str, size: f32) -> u32 {
    let scale = Scale::uniform(size);
    let width: f32 = text
        .chars()
        .map(|c| FACE.glyph(c).scaled(scale).h_metrics().advance_width)
        .sum();
    width.round() as u32
}

/// Render a text run with its baseline at `(x, baseline_y)`.
///
/// Glyph coverage is alpha-blended over the existing pixels; anything
/// falling outside the canvas is clipped.
pub fn draw_text(img: &mut RgbaImage, color: Rgba<u8>, x: i32, baseline_y: i32, size: f32, text: &str) {
    let scale = Scale::uniform(size);
    for glyph in FACE.layout(text, scale, point(x as f32, baseline_y as f32)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = img.get_pixel_mut(px as u32, py as u32);
            let a = coverage.min(1.0);
            let inv = 1.0 - a;
            for c in 0..3 {
                dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
            }
            dst.0[3] = 255;
        });
    }
}
