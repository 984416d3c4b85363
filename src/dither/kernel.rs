//! Error diffusion kernel definitions.
//!
//! Each kernel lists the neighbors that receive a share of a pixel's
//! quantization error and how large that share is.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, numerator)`; the neighbor at `(x + dx, y + dy)`
/// receives `error * numerator / divisor`.
///
/// # Ordering
///
/// Entries only reach pixels the row-major scan has not finalized yet:
/// `dy >= 0`, and `dx > 0` whenever `dy == 0`.
///
/// # Error Propagation
///
/// The share of error propagated is `sum(numerators) / divisor`. Most
/// kernels propagate 100%, Atkinson intentionally propagates only 75%.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, numerator) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor shared by every numerator.
    pub divisor: u8,
}

impl Kernel {
    /// Weight of one entry as a fraction of the error.
    #[inline]
    pub fn weight(&self, numerator: u8) -> f64 {
        numerator as f64 / self.divisor as f64
    }

    /// Iterate over `(dx, dy, weight)` taps.
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        self.entries
            .iter()
            .map(move |&(dx, dy, n)| (dx, dy, self.weight(n)))
    }

    /// Total fraction of error this kernel propagates.
    pub fn weight_sum(&self) -> f64 {
        self.taps().map(|(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The discarded quarter gives Atkinson its higher-contrast look.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (48/48).
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki dithering kernel.
///
/// Same footprint as Jarvis-Judice-Ninke with heavier center weights (42/42).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};
