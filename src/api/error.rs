//! Unified error type for the dither-engine public API.
//!
//! Dithering itself never fails. [`DitherError`] covers the fallible edges:
//! building an [`Image`](crate::Image) from a raw buffer, strict algorithm
//! name parsing, and loading configuration.

use thiserror::Error;

/// Unified error type for the dither-engine public API.
///
/// # Example
///
/// ```
/// use dither_engine::{DitherError, Image};
///
/// fn load(width: usize, height: usize, data: Vec<u8>) -> Result<Image, DitherError> {
///     let image = Image::new(width, height, data)?;
///     Ok(image)
/// }
///
/// assert!(load(2, 2, vec![0; 15]).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DitherError {
    /// Pixel buffer length does not match `width * height * 4`.
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `width * height * 4` does not fit in `usize`.
    #[error("Image dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },

    /// Strict parsing met a name outside the known algorithm set.
    #[error("Unknown dither algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
