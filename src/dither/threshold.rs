//! Plain threshold quantization.
//!
//! Each pixel is compared against the cutoff on its own, with no error
//! carried to neighbors. Flat regions come out as flat black or white.

use super::{Dither, DitherOptions};
use crate::color::luminance_rgba;
use crate::image::Image;

/// Threshold ("nearest") quantization.
///
/// Emits black when the pixel's luminance is below `threshold`, white
/// otherwise.
///
/// # Example
///
/// ```
/// use dither_engine::{Dither, DitherOptions, Image, Threshold};
///
/// let image = Image::filled(2, 2, [100, 100, 100, 255]);
/// let out = Threshold.dither(&image, &DitherOptions::new());
/// assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Threshold;

impl Dither for Threshold {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        let cutoff = options.cutoff();
        let mut output = Image::blank_like(image);

        for (idx, pixel) in image.pixels().enumerate() {
            let value = if luminance_rgba(pixel) < cutoff { 0 } else { 255 };
            output.set_level(idx, value);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_cutoff_is_black() {
        let image = Image::filled(3, 3, [127, 127, 127, 255]);
        let out = Threshold.dither(&image, &DitherOptions::new());
        assert!(out.pixels().all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_at_cutoff_is_white() {
        let image = Image::filled(3, 3, [128, 128, 128, 255]);
        let out = Threshold.dither(&image, &DitherOptions::new());
        assert!(out.pixels().all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn test_alpha_forced_opaque() {
        let image = Image::filled(2, 2, [200, 200, 200, 0]);
        let out = Threshold.dither(&image, &DitherOptions::new());
        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_uses_luminance_not_mean() {
        // Pure green: luminance 182.4, channel mean 85
        let image = Image::filled(1, 1, [0, 255, 0, 255]);
        let out = Threshold.dither(&image, &DitherOptions::new());
        assert_eq!(out.pixel(0, 0), [255, 255, 255, 255]);

        // Pure blue: luminance 18.4
        let image = Image::filled(1, 1, [0, 0, 255, 255]);
        let out = Threshold.dither(&image, &DitherOptions::new());
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_degenerate_thresholds() {
        let image = Image::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            [v, v, v, 255]
        });

        let all_white = Threshold.dither(&image, &DitherOptions::new().threshold(-1));
        assert!(all_white.pixels().all(|p| p[0] == 255));

        let all_black = Threshold.dither(&image, &DitherOptions::new().threshold(256));
        assert!(all_black.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_input_untouched() {
        let image = Image::filled(2, 2, [100, 150, 200, 7]);
        let before = image.clone();
        let _ = Threshold.dither(&image, &DitherOptions::new());
        assert_eq!(image, before);
    }
}
