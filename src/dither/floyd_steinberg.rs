//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the classic error diffusion algorithm: the whole
//! quantization error is pushed to four neighbors, so average tone is
//! preserved over large areas.

use crate::image::Image;

use super::{dither_with_kernel, Dither, DitherOptions, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Each weight is over 16, for a total of 16/16 = 100%.
///
/// # Example
///
/// ```
/// use dither_engine::{Dither, DitherOptions, FloydSteinberg, Image};
///
/// let image = Image::filled(8, 8, [100, 100, 100, 255]);
/// let out = FloydSteinberg.dither(&image, &DitherOptions::new());
/// assert!(out.is_binary());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        dither_with_kernel(image, &FLOYD_STEINBERG, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::test_support::{gray, ramp, render};

    #[test]
    fn test_ramp_pattern() {
        let out = FloydSteinberg.dither(&ramp(), &DitherOptions::new());
        assert_eq!(render(&out), vec!["###.#...", "####.#..", "##.#..#.", "###.#..."]);
    }

    #[test]
    fn test_flat_gray_density() {
        // L = 100 is 39% of full scale; 40 of 64 pixels come out black
        let out = FloydSteinberg.dither(&gray(8, 100), &DitherOptions::new());
        let blacks = out.pixels().filter(|p| p[0] == 0).count();
        assert_eq!(blacks, 40);
    }

    #[test]
    fn test_deterministic() {
        let image = ramp();
        let options = DitherOptions::new().threshold(100);
        assert_eq!(
            FloydSteinberg.dither(&image, &options),
            FloydSteinberg.dither(&image, &options)
        );
    }

    #[test]
    fn test_preserves_average_tone() {
        // Full propagation keeps the white ratio close to L / 255
        let out = FloydSteinberg.dither(&gray(32, 64), &DitherOptions::new());
        let whites = out.pixels().filter(|p| p[0] == 255).count();
        let ratio = whites as f64 / out.len() as f64;
        assert!(
            (ratio - 64.0 / 255.0).abs() < 0.05,
            "white ratio {:.3}, expected ~0.25",
            ratio
        );
    }
}
