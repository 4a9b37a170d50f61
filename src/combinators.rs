//! Signal combinators for transforming sampled signals.
//!
//! This module provides the primitive operations the transform engine is
//! built from: moving the time axis (shift, reversal, rescaling), scaling
//! amplitude, and combining two signals sample by sample.
//!
//! Axis operations never touch sample values. A shifted, flipped or rescaled
//! signal keeps exactly the samples it had, only their instants move, so the
//! result reads as the same shape rather than a resampled one.

use crate::error::TransformError;
use crate::{GeneratedSignal, TimeGrid, TransformResult};

/// Anything that pairs a time grid with one sample per instant.
pub trait Sampled {
    fn grid(&self) -> &TimeGrid;
    fn samples(&self) -> &[f64];
}

impl Sampled for GeneratedSignal {
    fn grid(&self) -> &TimeGrid {
        GeneratedSignal::grid(self)
    }

    fn samples(&self) -> &[f64] {
        GeneratedSignal::samples(self)
    }
}

impl Sampled for TransformResult {
    fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// Multiplies every sample by `factor`.
pub fn gain(samples: &[f64], factor: f64) -> Vec<f64> {
    samples.iter().map(|&y| factor * y).collect()
}

/// Sample-by-sample sum of two equally long signals.
///
/// # Errors
///
/// Returns [`TransformError::LengthMismatch`] when the lengths differ.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>, TransformError> {
    zip_with(a, b, |x, y| x + y)
}

/// Sample-by-sample product of two equally long signals.
///
/// # Errors
///
/// Returns [`TransformError::LengthMismatch`] when the lengths differ.
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, TransformError> {
    zip_with(a, b, |x, y| x * y)
}

fn zip_with(
    a: &[f64],
    b: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>, TransformError> {
    if a.len() != b.len() {
        return Err(TransformError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

/// Moves every instant by `t0`.
pub fn shift(grid: &TimeGrid, t0: f64) -> TimeGrid {
    grid.map_axis(|t| t + t0)
}

/// Mirrors every instant about zero.
pub fn reverse(grid: &TimeGrid) -> TimeGrid {
    grid.map_axis(|t| -t)
}

/// Divides every instant by `a`. A factor of zero yields an infinite axis.
pub fn scale_time(grid: &TimeGrid, a: f64) -> TimeGrid {
    grid.map_axis(|t| t / a)
}

/// Extension trait providing the operations as methods on any [`Sampled`].
///
/// This trait is automatically implemented for all types that implement
/// `Sampled`, so results can be chained.
///
/// # Examples
///
/// ```
/// use wavelab::{SampledExt, SignalSpec, TimeGrid, WaveParams};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// let ramp = SignalSpec::Ramp(WaveParams::default()).generate(&grid);
///
/// let out = ramp.reversed().shifted(1.0);
/// assert_eq!(out.grid.as_slice(), &[1.0, 0.75, 0.5, 0.25, 0.0]);
/// assert_eq!(out.samples, ramp.samples());
/// ```
pub trait SampledExt: Sampled + Sized {
    /// Delays (`t0 > 0`) or advances (`t0 < 0`) the signal.
    fn shifted(&self, t0: f64) -> TransformResult {
        TransformResult {
            grid: shift(self.grid(), t0),
            samples: self.samples().to_vec(),
            parameter: Some(t0),
        }
    }

    /// Flips the signal about `t = 0`.
    fn reversed(&self) -> TransformResult {
        TransformResult {
            grid: reverse(self.grid()),
            samples: self.samples().to_vec(),
            parameter: None,
        }
    }

    /// Compresses (`a > 1`) or stretches (`a < 1`) the time axis.
    fn time_scaled(&self, a: f64) -> TransformResult {
        TransformResult {
            grid: scale_time(self.grid(), a),
            samples: self.samples().to_vec(),
            parameter: Some(a),
        }
    }

    /// Multiplies the amplitude by `factor`.
    fn gain(&self, factor: f64) -> TransformResult {
        TransformResult {
            grid: self.grid().clone(),
            samples: gain(self.samples(), factor),
            parameter: Some(factor),
        }
    }

    /// Adds another signal sampled on the same grid.
    fn add<S: Sampled>(&self, other: &S) -> Result<TransformResult, TransformError> {
        Ok(TransformResult {
            grid: self.grid().clone(),
            samples: add(self.samples(), other.samples())?,
            parameter: None,
        })
    }

    /// Multiplies by another signal sampled on the same grid.
    fn multiply<S: Sampled>(&self, other: &S) -> Result<TransformResult, TransformError> {
        Ok(TransformResult {
            grid: self.grid().clone(),
            samples: multiply(self.samples(), other.samples())?,
            parameter: None,
        })
    }
}

// Blanket implementation for all Sampled types
impl<T: Sampled> SampledExt for T {}
