// File: crates/chart-core/src/scale.rs
// Summary: Linear domain-to-range mapping with a zero-span guard.

/// Maps a data domain onto a pixel range. The range may run backwards
/// (e.g. `(chart_height, 0.0)`) so larger values plot higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Inverted-Y convention: domain minimum lands on `bottom_px`.
    pub fn new_inverted_y(domain: (f64, f64), bottom_px: f64, top_px: f64) -> Self {
        Self::new(domain, (bottom_px, top_px))
    }

    /// A zero-span domain collapses every value to the range start, so a
    /// degenerate dataset draws at the baseline instead of dividing by zero.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span.abs() < 1e-12 {
            return self.r0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }
}
