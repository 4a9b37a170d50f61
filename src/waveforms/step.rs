//! Unit step waveform.

use super::{WaveParams, Waveform};
use crate::expression::heaviside;

/// `A·u(t)`, where the step takes its full value at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub amplitude: f64,
}

impl Step {
    /// Creates a new step of height `amplitude`.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl From<WaveParams> for Step {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude)
    }
}

impl Waveform for Step {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * heaviside(t, 1.0)
    }
}
