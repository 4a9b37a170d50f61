//! Sawtooth waveform.

use super::{WaveParams, Waveform};

/// `A·2·(f·t − ⌊0.5 + f·t⌋)`: a ramp from −A to A repeating every `1/f`.
///
/// The ramp crosses zero at whole periods. Phase is not applied, matching the
/// classroom definition of the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sawtooth {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Sawtooth {
    /// Creates a new sawtooth wave rising from `-A` to `A` once per period.
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

impl From<WaveParams> for Sawtooth {
    fn from(params: WaveParams) -> Self {
        Self::new(params.amplitude, params.frequency)
    }
}

impl Waveform for Sawtooth {
    fn value_at(&self, t: f64) -> f64 {
        let cycles = self.frequency * t;
        self.amplitude * 2.0 * (cycles - (0.5 + cycles).floor())
    }
}
