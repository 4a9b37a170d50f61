//! Sine waveform.

use std::f64::consts::TAU;

use super::{WaveParams, Waveform};

/// `A·sin(2π·f·t + φ)`, with the phase given in degrees.
///
/// # Examples
///
/// ```
/// use wavelab::{Sine, Waveform};
///
/// let sine = Sine::new(2.0, 1.0, 90.0);
/// assert!((sine.value_at(0.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase offset in degrees
    pub phase: f64,
}

impl Sine {
    /// Creates a new sine wave.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak value
    /// * `frequency` - Frequency in Hz
    /// * `phase` - Phase offset in degrees
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Instantaneous angle in radians; shared with [`super::Square`].
    pub(crate) fn angle(frequency: f64, phase: f64, t: f64) -> f64 {
        TAU * frequency * t + phase.to_radians()
    }
}

impl From<WaveParams> for Sine {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude, params.frequency, params.phase)
    }
}

impl Waveform for Sine {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * Self::angle(self.frequency, self.phase, t).sin()
    }
}
