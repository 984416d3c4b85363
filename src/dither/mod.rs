//! Bi-level dithering algorithms.
//!
//! This module turns a continuous-tone RGBA image into a black-and-white
//! one. Every algorithm reduces each pixel to its BT.709 luminance first.
//!
//! # Algorithms
//!
//! - **Threshold**: plain cutoff, no texture
//! - **Error diffusion**: Floyd-Steinberg, Atkinson (75% propagation),
//!   Jarvis-Judice-Ninke, Stucki
//! - **Ordered**: Bayer 2x2, 4x4, 8x8 and a clustered-dot 4x4 matrix
//! - **Stochastic**: random per-pixel threshold from a caller-supplied
//!   generator
//!
//! # Architecture
//!
//! Deterministic algorithms implement the [`Dither`] trait. The stochastic
//! ditherer is a free function, [`dither_stochastic`], because it needs a
//! mutable random source. [`Algorithm`] names all ten and is what the
//! [`Ditherer`](crate::Ditherer) facade dispatches on.
//!
//! # Example
//!
//! ```
//! use dither_engine::{Atkinson, Dither, DitherOptions, Image};
//!
//! let image = Image::filled(4, 4, [90, 90, 90, 255]);
//! let out = Atkinson.dither(&image, &DitherOptions::new());
//! assert!(out.is_binary());
//! ```

mod atkinson;
mod floyd_steinberg;
mod jjn;
mod kernel;
mod matrix;
mod options;
mod ordered;
mod stochastic;
mod stucki;
mod threshold;

#[cfg(test)]
mod test_support;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use jjn::JarvisJudiceNinke;
pub use kernel::*;
pub use matrix::*;
pub use options::{DitherOptions, DEFAULT_THRESHOLD};
pub use ordered::OrderedDither;
pub use stochastic::dither_stochastic;
pub use stucki::Stucki;
pub use threshold::Threshold;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::DitherError;
use crate::color::luminance_rgba;
use crate::image::Image;

/// Dither algorithm selection.
///
/// A closed set of ten algorithms. Names resolve through
/// [`Algorithm::from_name`] (strict) or [`Algorithm::resolve`], which falls
/// back to [`Algorithm::Threshold`] for anything it does not recognize.
///
/// # Names
///
/// | Variant | Canonical | Also accepted |
/// |---------|-----------|---------------|
/// | `Threshold` | `threshold` | `nearest` |
/// | `FloydSteinberg` | `floyd-steinberg` | `floyd` |
/// | `Atkinson` | `atkinson` | |
/// | `JarvisJudiceNinke` | `jarvis-judice-ninke` | `jarvis` |
/// | `Stucki` | `stucki` | |
/// | `Bayer2` | `bayer-2` | `bayer2` |
/// | `Bayer4` | `bayer-4` | `bayer4` |
/// | `Bayer8` | `bayer-8` | `bayer8` |
/// | `Clustered4` | `clustered-4` | `cluster4` |
/// | `Stochastic` | `stochastic` | `random` |
///
/// # Serde
///
/// Serializes to the canonical name. Deserializes from any string using
/// the same fallback as [`Algorithm::resolve`].
///
/// # Example
///
/// ```
/// use dither_engine::Algorithm;
///
/// assert_eq!(Algorithm::resolve("floyd"), Algorithm::FloydSteinberg);
/// assert_eq!(Algorithm::resolve("not-a-real-name"), Algorithm::Threshold);
/// assert!("not-a-real-name".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Algorithm {
    /// Plain threshold quantization.
    #[default]
    Threshold,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation, 6 neighbors).
    ///
    /// Higher contrast than the full-propagation kernels; highlights and
    /// shadows clip sooner.
    Atkinson,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbors).
    JarvisJudiceNinke,

    /// Stucki error diffusion (100% propagation, 12 neighbors).
    Stucki,

    /// Ordered dithering with the 2x2 Bayer matrix.
    Bayer2,

    /// Ordered dithering with the 4x4 Bayer matrix.
    Bayer4,

    /// Ordered dithering with the 8x8 Bayer matrix.
    Bayer8,

    /// Ordered dithering with the 4x4 clustered-dot matrix.
    Clustered4,

    /// Random per-pixel threshold.
    ///
    /// Not deterministic unless a seeded generator is supplied.
    Stochastic,
}

/// Broad family an [`Algorithm`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Independent per-pixel cutoff.
    Threshold,
    /// Row-major scan propagating quantization error.
    ErrorDiffusion,
    /// Tiled threshold matrix.
    Ordered,
    /// Random per-pixel threshold.
    Stochastic,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Threshold,
        Algorithm::FloydSteinberg,
        Algorithm::Atkinson,
        Algorithm::JarvisJudiceNinke,
        Algorithm::Stucki,
        Algorithm::Bayer2,
        Algorithm::Bayer4,
        Algorithm::Bayer8,
        Algorithm::Clustered4,
        Algorithm::Stochastic,
    ];

    /// Canonical selector name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Threshold => "threshold",
            Algorithm::FloydSteinberg => "floyd-steinberg",
            Algorithm::Atkinson => "atkinson",
            Algorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            Algorithm::Stucki => "stucki",
            Algorithm::Bayer2 => "bayer-2",
            Algorithm::Bayer4 => "bayer-4",
            Algorithm::Bayer8 => "bayer-8",
            Algorithm::Clustered4 => "clustered-4",
            Algorithm::Stochastic => "stochastic",
        }
    }

    /// Look up an algorithm by canonical name or alias.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything
    /// else.
    pub fn from_name(name: &str) -> Option<Self> {
        let algorithm = match name {
            "threshold" | "nearest" => Algorithm::Threshold,
            "floyd-steinberg" | "floyd" => Algorithm::FloydSteinberg,
            "atkinson" => Algorithm::Atkinson,
            "jarvis-judice-ninke" | "jarvis" => Algorithm::JarvisJudiceNinke,
            "stucki" => Algorithm::Stucki,
            "bayer-2" | "bayer2" => Algorithm::Bayer2,
            "bayer-4" | "bayer4" => Algorithm::Bayer4,
            "bayer-8" | "bayer8" => Algorithm::Bayer8,
            "clustered-4" | "cluster4" => Algorithm::Clustered4,
            "stochastic" | "random" => Algorithm::Stochastic,
            _ => return None,
        };
        Some(algorithm)
    }

    /// Look up an algorithm by name, falling back to
    /// [`Algorithm::Threshold`] for unknown names.
    ///
    /// The fallback is not an error: any selector yields a usable
    /// algorithm.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(selector = name, "Unknown dither algorithm, using threshold");
            Algorithm::Threshold
        })
    }

    /// Which family this algorithm belongs to.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Threshold => AlgorithmKind::Threshold,
            Algorithm::FloydSteinberg
            | Algorithm::Atkinson
            | Algorithm::JarvisJudiceNinke
            | Algorithm::Stucki => AlgorithmKind::ErrorDiffusion,
            Algorithm::Bayer2 | Algorithm::Bayer4 | Algorithm::Bayer8 | Algorithm::Clustered4 => {
                AlgorithmKind::Ordered
            }
            Algorithm::Stochastic => AlgorithmKind::Stochastic,
        }
    }

    /// Diffusion kernel for error diffusion algorithms.
    pub fn kernel(&self) -> Option<&'static Kernel> {
        match self {
            Algorithm::FloydSteinberg => Some(&FLOYD_STEINBERG),
            Algorithm::Atkinson => Some(&ATKINSON),
            Algorithm::JarvisJudiceNinke => Some(&JARVIS_JUDICE_NINKE),
            Algorithm::Stucki => Some(&STUCKI),
            _ => None,
        }
    }

    /// Threshold matrix for ordered algorithms.
    pub fn matrix(&self) -> Option<ThresholdMatrix> {
        match self {
            Algorithm::Bayer2 => Some(BAYER_2),
            Algorithm::Bayer4 => Some(BAYER_4),
            Algorithm::Bayer8 => Some(BAYER_8),
            Algorithm::Clustered4 => Some(CLUSTERED_4),
            _ => None,
        }
    }

    /// True when equal inputs always give equal outputs without a seeded
    /// generator.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.kind() != AlgorithmKind::Stochastic
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DitherError::UnknownAlgorithm(s.to_string()))
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Self::resolve(&name)
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name()
    }
}

/// Trait for deterministic bi-level ditherers.
///
/// Implementors read an RGBA image and return a new image of the same
/// dimensions where every pixel is opaque black or opaque white. The input
/// is never modified.
pub trait Dither {
    /// Dither an image.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels (RGBA8, row-major)
    /// * `options` - Dithering configuration
    ///
    /// # Returns
    ///
    /// A fresh [`Image`] with `R = G = B` in `{0, 255}` and `A = 255`.
    fn dither(&self, image: &Image, options: &DitherOptions) -> Image;
}

/// Core error diffusion algorithm, parameterized by kernel.
///
/// # Algorithm
///
/// 1. Compute a luminance plane for the whole image (single precision).
/// 2. Visit pixels left to right, top to bottom.
/// 3. Quantize the current (error-adjusted) value against the threshold:
///    below gives 0, otherwise 255.
/// 4. Push `error * weight` into every in-bounds kernel neighbor.
///
/// The plane lives only for the duration of the call. Neighbor updates are
/// computed in double precision and stored back in single precision.
pub(crate) fn dither_with_kernel(image: &Image, kernel: &Kernel, options: &DitherOptions) -> Image {
    let width = image.width();
    let height = image.height();
    let cutoff = options.cutoff();

    let mut plane: Vec<f32> = image
        .pixels()
        .map(|pixel| luminance_rgba(pixel) as f32)
        .collect();
    let mut output = Image::blank_like(image);
    if image.is_empty() {
        // A zero-width image may still report a huge height
        return output;
    }

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let value = plane[idx] as f64;
            let quantized = if value < cutoff { 0u8 } else { 255u8 };
            output.set_level(idx, quantized);

            let error = value - quantized as f64;
            if error == 0.0 {
                continue;
            }

            for (dx, dy, weight) in kernel.taps() {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let target = ny as usize * width + nx as usize;
                plane[target] = (plane[target] as f64 + error * weight) as f32;
            }
        }
    }

    output
}
