//! dither-engine: bi-level dithering for RGBA images
//!
//! This library turns continuous-tone images into pure black-and-white
//! images using thresholding, error diffusion, ordered (matrix) dithering,
//! or stochastic dithering.
//!
//! # Quick Start
//!
//! The [`apply`] function takes an algorithm name and never fails:
//!
//! ```
//! use dither_engine::{apply, DitherOptions, Image};
//!
//! let image = Image::filled(4, 4, [128, 128, 128, 255]);
//! let out = apply(&image, "floyd-steinberg", &DitherOptions::new());
//!
//! assert_eq!(out.width(), 4);
//! assert!(out.is_binary());
//! ```
//!
//! For typed selection and reuse, build a [`Ditherer`]:
//!
//! ```
//! use dither_engine::{Algorithm, Ditherer, Image};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let ditherer = Ditherer::new(Algorithm::Stochastic).threshold(200);
//! let image = Image::filled(4, 4, [90, 90, 90, 255]);
//!
//! // Seeded generator: reproducible stochastic output
//! let a = ditherer.dither_with_rng(&image, &mut StdRng::seed_from_u64(1));
//! let b = ditherer.dither_with_rng(&image, &mut StdRng::seed_from_u64(1));
//! assert_eq!(a, b);
//! ```
//!
//! # Algorithms
//!
//! | Selector | Family | Notes |
//! |----------|--------|-------|
//! | `threshold` | point | plain cutoff |
//! | `floyd-steinberg` | error diffusion | 4 taps, 100% |
//! | `atkinson` | error diffusion | 6 taps, 75% |
//! | `jarvis-judice-ninke` | error diffusion | 12 taps, 100% |
//! | `stucki` | error diffusion | 12 taps, 100% |
//! | `bayer-2`, `bayer-4`, `bayer-8` | ordered | dispersed dots |
//! | `clustered-4` | ordered | halftone dots |
//! | `stochastic` | random | needs a generator |
//!
//! Any other selector resolves to `threshold`.
//!
//! # Output
//!
//! Every algorithm returns a new [`Image`] with the input's dimensions,
//! `R = G = B` in `{0, 255}` and `A = 255`. The input is never modified.
//! Scaling the image before or after dithering is left to the caller.
//!
//! # Threshold Semantics
//!
//! `threshold` means slightly different things per family:
//!
//! - Threshold and error diffusion compare luminance directly against it.
//! - Ordered and stochastic dithering scale their per-pixel level by
//!   `threshold / 255`, so raising it both darkens the output and widens
//!   the dither pattern.

pub mod api;
pub mod color;
pub mod config;
pub mod dither;
pub mod image;


pub use api::{apply, apply_with_rng, DitherError, Ditherer};
pub use config::DitherConfig;
pub use dither::{
    dither_stochastic, Algorithm, AlgorithmKind, Atkinson, Dither, DitherOptions, FloydSteinberg,
    JarvisJudiceNinke, Kernel, OrderedDither, Stucki, Threshold, ThresholdMatrix, ATKINSON,
    BAYER_2, BAYER_4, BAYER_8, CLUSTERED_4, DEFAULT_THRESHOLD, FLOYD_STEINBERG,
    JARVIS_JUDICE_NINKE, STUCKI,
};
pub use image::Image;
