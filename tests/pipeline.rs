//! End-to-end pipeline tests over real files.

use exif_frame::canvas::band_height;
use exif_frame::compose::{self, RenderOptions};
use exif_frame::exif::{read_exif, ExifInfo};
use image::ImageEncoder;
use std::path::Path;

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 96])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

#[test]
fn render_extends_canvas_below_source() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("photo.jpg");
    write_jpeg(&input, 640, 480);

    let framed = compose::render(&input, &RenderOptions::default()).unwrap();
    assert_eq!(framed.width(), 640);
    assert_eq!(framed.height(), 480 + band_height(480));
}

#[test]
fn render_missing_file_is_fatal() {
    let result = compose::render(
        Path::new("/nonexistent/photo.jpg"),
        &RenderOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn render_to_file_writes_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("photo.jpg");
    let output = tmp.path().join("photo-framed.jpg");
    write_jpeg(&input, 320, 240);

    compose::render_to_file(&input, &output, &RenderOptions::default()).unwrap();
    assert!(output.exists());

    // The written file decodes back to the framed dimensions.
    let reread = image::open(&output).unwrap();
    assert_eq!(reread.width(), 320);
    assert_eq!(reread.height(), 240 + band_height(240));
}

#[test]
fn render_to_file_supports_png_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("photo.jpg");
    let output = tmp.path().join("framed.png");
    write_jpeg(&input, 120, 90);

    compose::render_to_file(&input, &output, &RenderOptions::default()).unwrap();
    assert!(image::open(&output).is_ok());
}

#[test]
fn preview_clamps_longest_edge() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("big.jpg");
    write_jpeg(&input, 2400, 1600);

    let bytes = compose::render_preview_jpeg(&input, &RenderOptions::default()).unwrap();
    let preview = image::load_from_memory(&bytes).unwrap();
    assert!(preview.width().max(preview.height()) <= compose::PREVIEW_MAX_EDGE);
    // Aspect of the framed canvas (2400 × 1840) survives the clamp.
    assert_eq!(preview.width(), 1000);
}

#[test]
fn preview_of_small_source_keeps_dimensions() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("small.jpg");
    write_jpeg(&input, 400, 300);

    let bytes = compose::render_preview_jpeg(&input, &RenderOptions::default()).unwrap();
    let preview = image::load_from_memory(&bytes).unwrap();
    assert_eq!(preview.width(), 400);
    assert_eq!(preview.height(), 300 + band_height(300));
}

#[test]
fn metadata_of_plain_jpeg_is_all_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("photo.jpg");
    write_jpeg(&input, 64, 48);

    assert_eq!(read_exif(&input), ExifInfo::default());
}

#[test]
fn full_metadata_overlay_inks_the_band() {
    let info = ExifInfo {
        make: "Canon".into(),
        model: "EOS R5".into(),
        lens_model: "RF 50mm F1.8".into(),
        capture_time: "2024:05:01 12:30:00".into(),
        exposure_time: "1/250".into(),
        f_number: "4".into(),
        iso: "400".into(),
        focal_length: "50".into(),
        ..ExifInfo::default()
    };
    let source = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        800,
        600,
        image::Rgb([96, 96, 96]),
    ));

    let framed = compose::compose(source, &info, &RenderOptions::default()).unwrap();

    // Source region untouched above the band, text and mark ink within it.
    assert_eq!(framed.get_pixel(10, 10).0, [96, 96, 96]);
    let band_ink = (600..framed.height())
        .flat_map(|y| (0..framed.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| framed.get_pixel(x, y).0[0] < 200)
        .count();
    assert!(band_ink > 100, "band carries text and the brand mark");
}
