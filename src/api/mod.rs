//! Public API for the dither-engine crate.
//!
//! This module provides the high-level API: the [`Ditherer`] builder, the
//! [`apply`]/[`apply_with_rng`] selector facade, and the [`DitherError`]
//! unified error type.

mod ditherer;
mod error;

pub use ditherer::{apply, apply_with_rng, Ditherer};
pub use error::DitherError;
