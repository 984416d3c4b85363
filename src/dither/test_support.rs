//! Shared fixtures for the per-kernel unit tests.

use crate::image::Image;

/// Square opaque gray field.
pub(super) fn gray(size: usize, level: u8) -> Image {
    Image::filled(size, size, [level, level, level, 255])
}

/// 8x4 horizontal ramp: 0, 32, 64, ... 224 across every row.
pub(super) fn ramp() -> Image {
    Image::from_fn(8, 4, |x, _| {
        let v = (x * 32) as u8;
        [v, v, v, 255]
    })
}

/// Rows of `#` (black) and `.` (white).
pub(super) fn render(image: &Image) -> Vec<String> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| if image.pixel(x, y)[0] == 0 { '#' } else { '.' })
                .collect()
        })
        .collect()
}
