//! Threshold matrices for ordered dithering.
//!
//! A matrix is tiled across the image modulo its size, giving every pixel a
//! position-dependent comparison level. Bayer matrices spread their levels
//! (dispersed dots, crosshatch texture); the clustered matrix grows levels
//! outward from a seed (halftone dots).

/// An N x N ordered-dither threshold matrix.
///
/// `cells` holds `size * size` distinct ranks in `0..size * size`,
/// row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMatrix {
    /// Side length N.
    pub size: usize,
    /// Row-major ranks.
    pub cells: &'static [u8],
}

impl ThresholdMatrix {
    /// Rank at image coordinate `(x, y)`, tiling the matrix.
    #[inline]
    pub fn rank(&self, x: usize, y: usize) -> u8 {
        self.cells[(y % self.size) * self.size + (x % self.size)]
    }

    /// Normalized level `(rank + 0.5) / N^2` at `(x, y)`, strictly in (0, 1).
    #[inline]
    pub fn normalized(&self, x: usize, y: usize) -> f64 {
        (self.rank(x, y) as f64 + 0.5) / (self.size * self.size) as f64
    }
}

/// Bayer 2x2 matrix.
///
/// ```text
///    0  2
///    3  1
/// ```
pub const BAYER_2: ThresholdMatrix = ThresholdMatrix {
    size: 2,
    cells: &[
        0, 2, //
        3, 1,
    ],
};

/// Bayer 4x4 matrix.
pub const BAYER_4: ThresholdMatrix = ThresholdMatrix {
    size: 4,
    cells: &[
        0, 8, 2, 10, //
        12, 4, 14, 6, //
        3, 11, 1, 9, //
        15, 7, 13, 5,
    ],
};

/// Bayer 8x8 matrix.
pub const BAYER_8: ThresholdMatrix = ThresholdMatrix {
    size: 8,
    cells: &[
        0, 32, 8, 40, 2, 34, 10, 42, //
        48, 16, 56, 24, 50, 18, 58, 26, //
        12, 44, 4, 36, 14, 46, 6, 38, //
        60, 28, 52, 20, 62, 30, 54, 22, //
        3, 35, 11, 43, 1, 33, 9, 41, //
        51, 19, 59, 27, 49, 17, 57, 25, //
        15, 47, 7, 39, 13, 45, 5, 37, //
        63, 31, 55, 23, 61, 29, 53, 21,
    ],
};

/// Clustered-dot 4x4 matrix.
///
/// Ranks grow from the lower-right seed (0) so dark regions form compact
/// dots rather than a dispersed pattern.
pub const CLUSTERED_4: ThresholdMatrix = ThresholdMatrix {
    size: 4,
    cells: &[
        12, 8, 10, 11, //
        14, 6, 9, 7, //
        13, 3, 1, 0, //
        15, 5, 2, 4,
    ],
};
