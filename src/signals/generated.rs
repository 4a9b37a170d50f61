//! A synthesized signal paired with the grid it was sampled on.

use super::TimeGrid;
use crate::waveforms::SignalSpec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The output of evaluating a [`SignalSpec`] over a [`TimeGrid`].
///
/// Keeps the spec it came from so that transforms needing to resample the
/// signal (degenerate time scaling) can do so without extra context.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeneratedSignal {
    spec: SignalSpec,
    grid: TimeGrid,
    samples: Vec<f64>,
}

impl GeneratedSignal {
    pub(crate) fn new(spec: SignalSpec, grid: TimeGrid, samples: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), samples.len());
        Self {
            spec,
            grid,
            samples,
        }
    }

    /// The description this signal was generated from.
    pub fn spec(&self) -> &SignalSpec {
        &self.spec
    }

    /// The instants the signal was sampled on.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// One value per grid instant.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples, always equal to the grid length.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
