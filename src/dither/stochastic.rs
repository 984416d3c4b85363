//! Stochastic (random threshold) dithering.
//!
//! Every pixel is compared against its own uniformly random level. The
//! random source is supplied by the caller, so a seeded generator makes the
//! output reproducible while the thread-local generator gives a fresh
//! pattern on each call.

use rand::Rng;

use super::DitherOptions;
use crate::color::luminance_rgba;
use crate::image::Image;

/// Dither with a per-pixel random threshold.
///
/// For each pixel in row-major order, draws `r` uniformly from `[0, 1)` and
/// emits black when `L / 255 < r * (threshold / 255)`, white otherwise.
/// Exactly one value is drawn per pixel, so equal generator states give
/// byte-identical output.
///
/// # Example
///
/// ```
/// use dither_engine::{dither_stochastic, DitherOptions, Image};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let image = Image::filled(8, 8, [60, 60, 60, 255]);
/// let options = DitherOptions::new();
///
/// let a = dither_stochastic(&image, &options, &mut StdRng::seed_from_u64(7));
/// let b = dither_stochastic(&image, &options, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn dither_stochastic<R>(image: &Image, options: &DitherOptions, rng: &mut R) -> Image
where
    R: Rng + ?Sized,
{
    let scale = options.scale();
    let mut output = Image::blank_like(image);

    for (idx, pixel) in image.pixels().enumerate() {
        let r: f64 = rng.gen();
        let value = if luminance_rgba(pixel) / 255.0 < r * scale {
            0
        } else {
            255
        };
        output.set_level(idx, value);
    }

    output
}
