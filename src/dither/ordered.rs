//! Ordered (matrix) dithering.
//!
//! Ordered dithering compares each pixel against a threshold matrix tiled
//! across the image. Unlike error diffusion it processes each pixel
//! independently, so the output is deterministic and has no neighbor
//! dependencies.
//!
//! # Comparison
//!
//! For a pixel with luminance `L` and matrix level `m = (rank + 0.5) / N^2`:
//!
//! ```text
//! L / 255 < m * (threshold / 255)   =>  black
//! otherwise                          =>  white
//! ```
//!
//! The matrix level is scaled by `threshold / 255` rather than used
//! directly, so the threshold option moves pattern density and the
//! brightness cutoff together. At the default threshold of 128 every
//! comparison level sits below 0.5, and luminance at or above 128 always
//! renders white.

use super::matrix::ThresholdMatrix;
use super::{Dither, DitherOptions};
use crate::color::luminance_rgba;
use crate::image::Image;

/// Ordered dithering against a fixed threshold matrix.
///
/// # Example
///
/// ```
/// use dither_engine::{Dither, DitherOptions, Image, OrderedDither, BAYER_4};
///
/// let image = Image::filled(8, 8, [64, 64, 64, 255]);
/// let out = OrderedDither::new(BAYER_4).dither(&image, &DitherOptions::new());
///
/// // The pattern repeats every 4 pixels
/// assert_eq!(out.pixel(1, 2), out.pixel(5, 6));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderedDither {
    matrix: ThresholdMatrix,
}

impl OrderedDither {
    /// Create an ordered ditherer for the given matrix.
    #[inline]
    pub fn new(matrix: ThresholdMatrix) -> Self {
        Self { matrix }
    }

    /// The matrix this ditherer tiles.
    #[inline]
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }
}

impl Dither for OrderedDither {
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image {
        let width = image.width();
        let scale = options.scale();
        let mut output = Image::blank_like(image);

        for (idx, pixel) in image.pixels().enumerate() {
            let x = idx % width;
            let y = idx / width;
            let level = self.matrix.normalized(x, y);
            let value = if luminance_rgba(pixel) / 255.0 < level * scale {
                0
            } else {
                255
            };
            output.set_level(idx, value);
        }

        output
    }
}
