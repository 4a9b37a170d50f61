//! Sample grids over which signals are evaluated.

use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of samples in a continuous-mode grid.
pub const CONTINUOUS_SAMPLES: usize = 500;
/// Smallest sample count accepted in discrete mode.
pub const MIN_DISCRETE_SAMPLES: usize = 10;
/// Largest sample count accepted in discrete mode.
pub const MAX_DISCRETE_SAMPLES: usize = 200;
/// Sample count used when discrete mode is picked without a count.
pub const DEFAULT_DISCRETE_SAMPLES: usize = 50;

/// How a grid is meant to be displayed: as a smooth curve or as stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplingMode {
    /// Dense grid, drawn as a line
    #[default]
    Continuous,
    /// Sparse grid, drawn as discrete samples
    Discrete,
}

/// An ordered sequence of sample instants.
///
/// Grids built through the constructors are non-empty, finite and
/// non-decreasing. Grids produced by [`TimeGrid::map_axis`] keep the length and
/// mode of their source but may run backwards (time reversal does exactly that).
///
/// # Examples
///
/// ```
/// use wavelab::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimeGrid {
    times: Vec<f64>,
    mode: SamplingMode,
}

impl TimeGrid {
    /// Creates `n` evenly spaced instants from `start` to `end`, both included.
    ///
    /// A single-sample grid holds just `start`.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] when `n` is zero
    /// - [`GridError::NonFinite`] when an endpoint, or an instant between
    ///   them, is not finite
    /// - [`GridError::Unordered`] when `end` lies before `start`
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::Empty);
        }
        if !start.is_finite() {
            return Err(GridError::NonFinite(0));
        }
        if !end.is_finite() {
            return Err(GridError::NonFinite(n - 1));
        }

        let times = if n == 1 {
            vec![start]
        } else {
            if end < start {
                return Err(GridError::Unordered(1));
            }
            let step = (end - start) / (n - 1) as f64;
            let mut times: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // Pin both ends so rounding never leaves them off.
            times[0] = start;
            times[n - 1] = end;
            // A span wider than f64::MAX overflows the step.
            if let Some(i) = times.iter().position(|t| !t.is_finite()) {
                return Err(GridError::NonFinite(i));
            }
            times
        };

        log::trace!("built {n}-sample grid over [{start}, {end}]");
        Ok(Self {
            times,
            mode: SamplingMode::Continuous,
        })
    }

    /// The dense grid used for smooth rendering: 500 samples over `[0, 1]`.
    pub fn continuous() -> Self {
        let step = 1.0 / (CONTINUOUS_SAMPLES - 1) as f64;
        let mut times: Vec<f64> = (0..CONTINUOUS_SAMPLES).map(|i| i as f64 * step).collect();
        times[CONTINUOUS_SAMPLES - 1] = 1.0;
        Self {
            times,
            mode: SamplingMode::Continuous,
        }
    }

    /// A discrete grid of `samples` points over `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SampleCount`] unless `samples` lies in `10..=200`.
    pub fn discrete(samples: usize) -> Result<Self, GridError> {
        if !(MIN_DISCRETE_SAMPLES..=MAX_DISCRETE_SAMPLES).contains(&samples) {
            return Err(GridError::SampleCount {
                found: samples,
                min: MIN_DISCRETE_SAMPLES,
                max: MAX_DISCRETE_SAMPLES,
            });
        }
        let grid = Self::linspace(0.0, 1.0, samples)?;
        Ok(grid.with_mode(SamplingMode::Discrete))
    }

    /// Wraps caller-supplied instants.
    ///
    /// # Errors
    ///
    /// The instants must be non-empty, finite and non-decreasing.
    pub fn from_samples(times: Vec<f64>) -> Result<Self, GridError> {
        if times.is_empty() {
            return Err(GridError::Empty);
        }
        if let Some(i) = times.iter().position(|t| !t.is_finite()) {
            return Err(GridError::NonFinite(i));
        }
        if let Some(i) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(GridError::Unordered(i + 1));
        }
        Ok(Self {
            times,
            mode: SamplingMode::Continuous,
        })
    }

    /// The single-instant grid `[0]`.
    pub fn origin() -> Self {
        Self {
            times: vec![0.0],
            mode: SamplingMode::Continuous,
        }
    }

    /// Returns the same instants tagged with another display mode.
    pub fn with_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds a new axis by applying `f` to every instant.
    ///
    /// The result is not re-validated: a decreasing `f` yields a decreasing grid.
    pub fn map_axis(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            times: self.times.iter().map(|&t| f(t)).collect(),
            mode: self.mode,
        }
    }

    /// How the grid is meant to be drawn.
    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// Number of instants.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for grids built through the constructors.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The instants, in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Iterates over the instants.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.times.iter()
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

/// Grid configuration as chosen by the user.
///
/// # Examples
///
/// ```
/// use wavelab::{Sampling, SamplingMode};
///
/// let grid = Sampling::Discrete { samples: 20 }.grid().unwrap();
/// assert_eq!(grid.len(), 20);
/// assert_eq!(grid.mode(), SamplingMode::Discrete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sampling {
    #[default]
    Continuous,
    Discrete {
        samples: usize,
    },
}

impl Sampling {
    /// Discrete sampling with the default sample count.
    pub fn discrete() -> Self {
        Sampling::Discrete {
            samples: DEFAULT_DISCRETE_SAMPLES,
        }
    }

    /// Builds the grid this configuration describes.
    ///
    /// # Errors
    ///
    /// Fails when a discrete sample count is out of range.
    pub fn grid(&self) -> Result<TimeGrid, GridError> {
        match *self {
            Sampling::Continuous => Ok(TimeGrid::continuous()),
            Sampling::Discrete { samples } => TimeGrid::discrete(samples),
        }
    }

    pub fn mode(&self) -> SamplingMode {
        match self {
            Sampling::Continuous => SamplingMode::Continuous,
            Sampling::Discrete { .. } => SamplingMode::Discrete,
        }
    }
}
