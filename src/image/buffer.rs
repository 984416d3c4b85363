//! Image struct: validated RGBA8 pixel storage.

use crate::api::DitherError;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A row-major RGBA8 raster.
///
/// Holds `width * height` pixels of four 8-bit channels each, stored as a
/// flat byte vector. The length invariant is checked once at construction,
/// so every ditherer can index the buffer without further validation.
///
/// # Example
///
/// ```
/// use dither_engine::Image;
///
/// let image = Image::filled(3, 2, [100, 100, 100, 255]);
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.as_raw().len(), 3 * 2 * 4);
/// assert_eq!(image.pixel(2, 1), [100, 100, 100, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// RGBA bytes, row-major.
    data: Vec<u8>,
}

impl Image {
    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`DitherError::DimensionOverflow`] if `width * height * 4` overflows
    /// - [`DitherError::BufferSize`] if `data.len()` differs from it
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, DitherError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(DitherError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image where every pixel has the same RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 4],
    {
        let len = Self::byte_len(width, height).unwrap_or_else(|e| panic!("{}", e));
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Allocate an opaque black image; ditherers overwrite every pixel.
    pub(crate) fn blank_like(other: &Image) -> Self {
        Self {
            width: other.width,
            height: other.height,
            data: vec![0; other.data.len()],
        }
    }

    fn byte_len(width: usize, height: usize) -> Result<usize, DitherError> {
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(DitherError::DimensionOverflow { width, height })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its RGBA bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        let i = (y * self.width + x) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Iterate over pixels as `[R, G, B, A]` slices in row-major order.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// True when every pixel is opaque with `R = G = B` in `{0, 255}`.
    pub fn is_binary(&self) -> bool {
        self.pixels()
            .all(|p| p[3] == 255 && p[0] == p[1] && p[1] == p[2] && (p[0] == 0 || p[0] == 255))
    }

    /// Write a bi-level value to pixel `index` (row-major pixel index).
    #[inline]
    pub(crate) fn set_level(&mut self, index: usize, value: u8) {
        let i = index * CHANNELS;
        self.data[i] = value;
        self.data[i + 1] = value;
        self.data[i + 2] = value;
        self.data[i + 3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_exact_length() {
        let image = Image::new(2, 3, vec![7; 24]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);
        assert_eq!(image.len(), 6);
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let err = Image::new(2, 2, vec![0; 15]).unwrap_err();
        match err {
            DitherError::BufferSize { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("Expected BufferSize, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_overflow() {
        let err = Image::new(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, DitherError::DimensionOverflow { .. }));
    }

    #[test]
    fn test_zero_sized_image() {
        let image = Image::new(0, 5, Vec::new()).unwrap();
        assert!(image.is_empty());
        assert!(image.is_binary(), "vacuously binary");
    }

    #[test]
    fn test_from_fn_row_major() {
        let image = Image::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(image.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(image.pixel(2, 0), [2, 0, 0, 255]);
        assert_eq!(image.pixel(1, 1), [1, 1, 0, 255]);
        // Second row starts at byte 12
        assert_eq!(&image.as_raw()[12..16], &[0, 1, 0, 255]);
    }

    #[test]
    fn test_blank_like_matches_dimensions() {
        let source = Image::filled(4, 3, [9, 9, 9, 9]);
        let blank = Image::blank_like(&source);
        assert_eq!(blank.width(), 4);
        assert_eq!(blank.height(), 3);
        assert!(blank.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_level_writes_opaque_gray() {
        let mut image = Image::filled(2, 1, [1, 2, 3, 4]);
        image.set_level(1, 255);
        assert_eq!(image.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(image.pixel(1, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_is_binary() {
        assert!(Image::filled(2, 2, [0, 0, 0, 255]).is_binary());
        assert!(Image::filled(2, 2, [255, 255, 255, 255]).is_binary());
        assert!(!Image::filled(2, 2, [255, 255, 255, 0]).is_binary());
        assert!(!Image::filled(2, 2, [128, 128, 128, 255]).is_binary());
        assert!(!Image::filled(2, 2, [255, 0, 255, 255]).is_binary());
    }

    #[test]
    fn test_into_raw_roundtrip() {
        let data: Vec<u8> = (0..16).collect();
        let image = Image::new(2, 2, data.clone()).unwrap();
        assert_eq!(image.into_raw(), data);
    }

    #[test]
    #[should_panic(expected = "Image dimensions overflow")]
    fn test_from_fn_overflow_panics() {
        Image::from_fn(usize::MAX, 2, |_, _| [0; 4]);
    }

    #[test]
    #[should_panic(expected = "Image dimensions overflow")]
    fn test_filled_overflow_panics() {
        Image::filled(usize::MAX / 2, 3, [0; 4]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_pixel_out_of_bounds_panics() {
        Image::filled(2, 2, [0; 4]).pixel(2, 0);
    }
}
