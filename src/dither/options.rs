//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct shared by every
//! ditherer.

use serde::{Deserialize, Serialize};

/// Default brightness cutoff on the 0..=255 scale.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// Configuration options for dithering.
///
/// # Defaults
///
/// - Threshold: 128
///
/// # Example
///
/// ```
/// use dither_engine::DitherOptions;
///
/// let options = DitherOptions::new();
/// assert_eq!(options.threshold, 128);
///
/// let options = DitherOptions::new().threshold(90);
/// assert_eq!(options.threshold, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DitherOptions {
    /// Brightness cutoff, conventionally 0..=255.
    ///
    /// Values outside that range are accepted unchanged. Point-wise
    /// algorithms then render all black or all white.
    ///
    /// Default: `128`
    pub threshold: i32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness threshold.
    #[inline]
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Threshold as a floating-point cutoff on the 0..=255 scale.
    #[inline]
    pub(crate) fn cutoff(&self) -> f64 {
        self.threshold as f64
    }

    /// Threshold normalized to 0..=1 (`threshold / 255`).
    #[inline]
    pub(crate) fn scale(&self) -> f64 {
        self.threshold as f64 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = DitherOptions::default();
        assert_eq!(opts.threshold, 128, "threshold should default to 128");
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(DitherOptions::new(), DitherOptions::default());
    }

    #[test]
    fn test_builder_threshold() {
        let opts = DitherOptions::new().threshold(200);
        assert_eq!(opts.threshold, 200);
    }

    #[test]
    fn test_out_of_range_is_kept() {
        assert_eq!(DitherOptions::new().threshold(-40).threshold, -40);
        assert_eq!(DitherOptions::new().threshold(1000).threshold, 1000);
    }

    #[test]
    fn test_scale() {
        assert_eq!(DitherOptions::new().threshold(255).scale(), 1.0);
        assert_eq!(DitherOptions::new().threshold(0).scale(), 0.0);
        assert_eq!(DitherOptions::new().cutoff(), 128.0);
    }

    #[test]
    fn test_deserialize_missing_threshold_uses_default() {
        let opts: DitherOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(opts.threshold, 128);
    }

    #[test]
    fn test_deserialize_threshold() {
        let opts: DitherOptions = serde_yaml::from_str("threshold: 42").unwrap();
        assert_eq!(opts.threshold, 42);
    }
}
