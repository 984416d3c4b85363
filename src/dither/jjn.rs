//! Jarvis-Judice-Ninke error diffusion dithering algorithm.
//!
//! JJN spreads error over 12 neighbors across three rows. The wide
//! footprint gives smoother gradients than Floyd-Steinberg at roughly three
//! times the work per pixel.

use crate::image::Image;

use super::{dither_with_kernel, Dither, DitherOptions, JARVIS_JUDICE_NINKE};

/// Jarvis-Judice-Ninke error diffusion dithering.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
///
/// Weights are over 48, for 100% propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JarvisJudiceNinke;

impl Dither for JarvisJudiceNinke {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        dither_with_kernel(image, &JARVIS_JUDICE_NINKE, options)
    }
}
