//! Discrete impulse waveform.

use super::{WaveParams, Waveform};
use crate::TimeGrid;

/// A single sample of height `A` at the grid instant closest to zero.
///
/// The delta has no meaningful closed form on an arbitrary grid, so sampling
/// places it at the instant with the smallest `|t|` (the first one on ties)
/// and leaves every other sample at exactly zero.
///
/// # Examples
///
/// ```
/// use wavelab::{Impulse, TimeGrid, Waveform};
///
/// let grid = TimeGrid::from_samples(vec![-0.5, -0.1, 0.0, 0.2, 0.4]).unwrap();
/// assert_eq!(Impulse::new(3.0).sample(&grid), vec![0.0, 0.0, 3.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub amplitude: f64,
}

impl Impulse {
    /// Creates a new impulse of height `amplitude`.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl From<WaveParams> for Impulse {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude)
    }
}

/// Index of the first instant with the smallest magnitude.
fn nearest_to_zero(times: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, t) in times.iter().map(|t| t.abs()).enumerate() {
        match best {
            Some((_, smallest)) if t >= smallest => {}
            _ => best = Some((i, t)),
        }
    }
    best.map(|(i, _)| i)
}

impl Waveform for Impulse {
    fn value_at(&self, t: f64) -> f64 {
        if t == 0.0 { self.amplitude } else { 0.0 }
    }

    fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        let mut samples = vec![0.0; grid.len()];
        if let Some(i) = nearest_to_zero(grid.as_slice()) {
            samples[i] = self.amplitude;
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_at_zero() {
        let grid = TimeGrid::from_samples(vec![-0.5, -0.1, 0.0, 0.2, 0.4]).unwrap();
        assert_eq!(Impulse::new(3.0).sample(&grid), vec![0.0, 0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_impulse_without_zero_sample() {
        let grid = TimeGrid::from_samples(vec![0.3, 0.5, 0.9]).unwrap();
        assert_eq!(Impulse::new(1.0).sample(&grid), vec![1.0, 0.0, 0.0]);

        let grid = TimeGrid::from_samples(vec![-0.9, -0.2, 0.4]).unwrap();
        assert_eq!(Impulse::new(1.0).sample(&grid), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_tie_picks_first() {
        let grid = TimeGrid::from_samples(vec![-0.1, 0.1]).unwrap();
        assert_eq!(Impulse::new(2.0).sample(&grid), vec![2.0, 0.0]);
    }

    #[test]
    fn test_exactly_one_nonzero() {
        let grid = TimeGrid::discrete(37).unwrap();
        let samples = Impulse::new(4.0).sample(&grid);
        assert_eq!(samples.iter().filter(|&&y| y != 0.0).count(), 1);
        assert_eq!(samples[0], 4.0);
    }

    #[test]
    fn test_value_at() {
        let impulse = Impulse::new(2.0);
        assert_eq!(impulse.value_at(0.0), 2.0);
        assert_eq!(impulse.value_at(0.01), 0.0);
        assert_eq!(impulse.sample(&TimeGrid::origin()), vec![2.0]);
    }
}
