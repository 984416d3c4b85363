//! Test images.

use dither_engine::Image;

/// Uniform opaque gray.
pub fn flat_gray(width: usize, height: usize, level: u8) -> Image {
    Image::filled(width, height, [level, level, level, 255])
}

/// Horizontal black-to-white ramp, opaque.
pub fn horizontal_ramp(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |x, _| {
        let v = if width > 1 {
            (x * 255 / (width - 1)) as u8
        } else {
            0
        };
        [v, v, v, 255]
    })
}

/// Photo-like card: diagonal ramp with tinted quadrants and varying alpha.
pub fn photo_card(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |x, y| {
        let v = ((x + y) * 255 / (width + height).max(1)) as u8;
        let alpha = ((x * 31 + y * 17) % 256) as u8;
        match (x * 2 / width.max(1), y * 2 / height.max(1)) {
            (0, 0) => [v, v, v, 255],
            (1, 0) => [v, v / 3, 0, alpha],
            (0, _) => [0, v, v / 2, 255],
            _ => [v / 2, v / 2, v, alpha],
        }
    })
}

/// Already-binary checkerboard with 3-pixel cells.
pub fn checkerboard(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |x, y| {
        if (x / 3 + y / 3) % 2 == 0 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    })
}
