//! Assertion helpers for tests.

use dither_engine::Image;
use pretty_assertions::assert_eq;

/// Assert `output` has the same dimensions as `input`.
pub fn assert_same_shape(input: &Image, output: &Image) {
    assert_eq!(
        (output.width(), output.height()),
        (input.width(), input.height()),
        "Output dimensions differ from input"
    );
    assert_eq!(output.as_raw().len(), input.as_raw().len());
}

/// Assert every pixel is opaque with `R = G = B` in `{0, 255}`.
pub fn assert_binary(image: &Image) {
    for (i, p) in image.pixels().enumerate() {
        assert!(
            p[3] == 255 && p[0] == p[1] && p[1] == p[2] && (p[0] == 0 || p[0] == 255),
            "Pixel {} ({}, {}) is not binary: {:?}",
            i,
            i % image.width(),
            i / image.width(),
            p
        );
    }
}

/// Fraction of black pixels.
pub fn black_ratio(image: &Image) -> f64 {
    if image.is_empty() {
        return 0.0;
    }
    let blacks = image.pixels().filter(|p| p[0] == 0).count();
    blacks as f64 / image.len() as f64
}

/// Render as rows of `#` (black) and `.` (white), for readable diffs.
pub fn render(image: &Image) -> Vec<String> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| if image.pixel(x, y)[0] == 0 { '#' } else { '.' })
                .collect()
        })
        .collect()
}
