//! Brightness conversion
//!
//! Every ditherer reduces an RGB pixel to a single scalar brightness before
//! quantizing. The conversion uses the ITU-R BT.709 perceptual weights, so
//! green dominates and blue contributes least.
//!
//! # Example
//!
//! ```
//! use dither_engine::color::luminance;
//!
//! // Equal channels keep their value
//! assert_eq!(luminance(100, 100, 100), 100.0);
//!
//! // Pure green is far brighter than pure blue
//! assert!(luminance(0, 255, 0) > luminance(0, 0, 255));
//! ```

mod luminance;

pub use luminance::{luminance, luminance_rgba, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
