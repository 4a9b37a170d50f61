//! Square waveform.

use super::{Sine, WaveParams, Waveform};
use crate::expression::sign;

/// `A·sign(sin(2π·f·t + φ))`.
///
/// Takes the value 0 exactly where the underlying sine crosses zero, so the
/// wave starts at 0 for zero phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Square {
    /// Creates a new square wave; the phase is in degrees.
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

impl From<WaveParams> for Square {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude, params.frequency, params.phase)
    }
}

impl Waveform for Square {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * sign(Sine::angle(self.frequency, self.phase, t).sin())
    }
}
