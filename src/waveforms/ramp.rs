//! Ramp waveform.

use super::{WaveParams, Waveform};

/// `A·t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub amplitude: f64,
}

impl Ramp {
    /// Creates a new ramp with slope `amplitude`.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl From<WaveParams> for Ramp {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude)
    }
}

impl Waveform for Ramp {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * t
    }
}
