//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! The discarded quarter pushes light tones toward white and dark tones
//! toward black, which gives the crisp, high-contrast look of early
//! Macintosh graphics.

use crate::image::Image;

use super::{dither_with_kernel, Dither, DitherOptions, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// The Atkinson kernel distributes error to 6 neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        dither_with_kernel(image, &ATKINSON, options)
    }
}
