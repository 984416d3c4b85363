//! BT.709 luminance

/// Red contribution to luminance (ITU-R BT.709).
pub const RED_WEIGHT: f64 = 0.2126;

/// Green contribution to luminance (ITU-R BT.709).
pub const GREEN_WEIGHT: f64 = 0.7152;

/// Blue contribution to luminance (ITU-R BT.709).
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Perceptual brightness of an 8-bit RGB pixel.
///
/// Returns `0.2126 R + 0.7152 G + 0.0722 B` on the 0..=255 scale. The
/// domain is bounded, so no clamping is applied. Note that pure white
/// lands a hair below 255.0 because the weights are not exactly
/// representable in binary floating point.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64
}

/// Luminance of an `[R, G, B, A]` pixel. Alpha is ignored.
#[inline]
pub fn luminance_rgba(pixel: &[u8]) -> f64 {
    luminance(pixel[0], pixel[1], pixel[2])
}
