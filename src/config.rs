use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::DitherError;
use crate::dither::{Algorithm, DitherOptions, DEFAULT_THRESHOLD};

/// Dithering configuration, typically loaded from YAML.
///
/// ```yaml
/// algorithm: atkinson
/// threshold: 140
/// ```
///
/// Both fields are optional. An unrecognized `algorithm` falls back to
/// threshold quantization instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DitherConfig {
    /// Which algorithm to run
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Brightness cutoff passed through to [`DitherOptions::threshold`]
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl DitherConfig {
    /// Parse configuration from a YAML (or JSON) string.
    pub fn from_yaml_str(content: &str) -> Result<Self, DitherError> {
        let config: Self = serde_yaml::from_str(content)?;
        tracing::debug!(
            algorithm = %config.algorithm,
            threshold = config.threshold,
            "Parsed dither configuration"
        );
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DitherError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to read dither config");
            e
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            algorithm = %config.algorithm,
            threshold = config.threshold,
            "Loaded dither configuration"
        );
        Ok(config)
    }

    /// Options record for the configured threshold.
    pub fn options(&self) -> DitherOptions {
        DitherOptions::new().threshold(self.threshold)
    }
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
