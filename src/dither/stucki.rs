//! Stucki error diffusion dithering algorithm.
//!
//! Stucki uses the Jarvis-Judice-Ninke footprint with heavier weights near
//! the center, which gives slightly sharper output.

use crate::image::Image;

use super::{dither_with_kernel, Dither, DitherOptions, STUCKI};

/// Stucki error diffusion dithering.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Stucki;

impl Dither for Stucki {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        dither_with_kernel(image, &STUCKI, options)
    }
}
