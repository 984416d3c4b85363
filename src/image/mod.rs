//! RGBA raster buffers.
//!
//! [`Image`] is both the input and the output of every ditherer. The input
//! is borrowed read-only; each ditherer allocates a fresh output of the same
//! dimensions whose pixels are opaque and strictly black or white.

mod buffer;

pub use buffer::{Image, CHANNELS};
