//! Ditherer builder and selector facade, the primary entry points.
//!
//! [`Ditherer`] pairs an [`Algorithm`] with [`DitherOptions`] and dispatches
//! to exactly one ditherer. [`apply`] accepts a selector string and resolves
//! it first, falling back to threshold for unknown names.

use rand::Rng;

use crate::config::DitherConfig;
use crate::dither::{
    dither_stochastic, dither_with_kernel, Algorithm, Dither, DitherOptions, OrderedDither,
    Threshold,
};
use crate::image::Image;

/// High-level dithering builder.
///
/// # Design
///
/// - Defaults to [`Algorithm::Threshold`] with threshold 128
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder serves many
///   images
///
/// # Example
///
/// ```
/// use dither_engine::{Algorithm, Ditherer, Image};
///
/// let ditherer = Ditherer::new(Algorithm::Bayer4).threshold(160);
///
/// let image = Image::filled(4, 4, [90, 90, 90, 255]);
/// let result = ditherer.dither(&image);
///
/// assert_eq!(result.width(), 4);
/// assert!(result.is_binary());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ditherer {
    algorithm: Algorithm,
    options: DitherOptions,
}

impl Ditherer {
    /// Create a ditherer for `algorithm` with default options.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            options: DitherOptions::default(),
        }
    }

    /// Create a ditherer from a selector name.
    ///
    /// Unknown names fall back to [`Algorithm::Threshold`].
    pub fn named(selector: &str) -> Self {
        Self::new(Algorithm::resolve(selector))
    }

    /// Create a ditherer from a loaded configuration.
    pub fn from_config(config: &DitherConfig) -> Self {
        Self::new(config.algorithm).options(config.options())
    }

    /// Set the brightness threshold.
    #[inline]
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.options = self.options.threshold(threshold);
        self
    }

    /// Replace all options.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// The selected algorithm.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The current options.
    #[inline]
    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    /// Dither an image.
    ///
    /// [`Algorithm::Stochastic`] draws from the thread-local generator; use
    /// [`dither_with_rng()`](Self::dither_with_rng) for reproducible output.
    pub fn dither(&self, image: &Image) -> Image {
        self.dither_with_rng(image, &mut rand::thread_rng())
    }

    /// Dither an image, drawing any randomness from `rng`.
    ///
    /// Only [`Algorithm::Stochastic`] touches the generator.
    pub fn dither_with_rng<R>(&self, image: &Image, rng: &mut R) -> Image
    where
        R: Rng + ?Sized,
    {
        tracing::debug!(
            algorithm = %self.algorithm,
            threshold = self.options.threshold,
            width = image.width(),
            height = image.height(),
            "Dithering image"
        );

        let options = &self.options;
        match self.algorithm {
            Algorithm::Threshold => Threshold.dither(image, options),
            Algorithm::Stochastic => dither_stochastic(image, options, rng),
            // Kernel and matrix tables live on `Algorithm`
            algorithm => match (algorithm.kernel(), algorithm.matrix()) {
                (Some(kernel), _) => dither_with_kernel(image, kernel, options),
                (None, Some(matrix)) => OrderedDither::new(matrix).dither(image, options),
                (None, None) => Threshold.dither(image, options),
            },
        }
    }
}

/// Dither `image` with the algorithm named by `selector`.
///
/// Unknown selectors fall back to threshold quantization; this function
/// never fails.
///
/// # Example
///
/// ```
/// use dither_engine::{apply, DitherOptions, Image};
///
/// let image = Image::filled(8, 8, [100, 100, 100, 255]);
/// let options = DitherOptions::new();
///
/// let a = apply(&image, "not-a-real-name", &options);
/// let b = apply(&image, "threshold", &options);
/// assert_eq!(a, b);
/// ```
pub fn apply(image: &Image, selector: &str, options: &DitherOptions) -> Image {
    Ditherer::named(selector).options(*options).dither(image)
}

/// Like [`apply`], with an explicit random source for the stochastic
/// algorithm.
pub fn apply_with_rng<R>(image: &Image, selector: &str, options: &DitherOptions, rng: &mut R) -> Image
where
    R: Rng + ?Sized,
{
    Ditherer::named(selector)
        .options(*options)
        .dither_with_rng(image, rng)
}
