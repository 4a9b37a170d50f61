//! Core trait definitions for waveforms.

use crate::TimeGrid;

/// Common interface for all closed-form waveforms.
///
/// A waveform is a pure function of time. Evaluating the same waveform on the
/// same grid always yields the same samples.
pub trait Waveform {
    /// Value of the waveform at instant `t` (seconds).
    fn value_at(&self, t: f64) -> f64;

    /// Evaluates the waveform at every instant of `grid`.
    ///
    /// Default implementation calls `value_at()` for each instant. Waveforms
    /// whose value depends on the grid as a whole override this.
    fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.iter().map(|&t| self.value_at(t)).collect()
    }
}
