//! Declarative signal descriptions and their dispatch to waveforms.

use std::fmt;
use std::str::FromStr;

use super::{Impulse, Ramp, Sawtooth, Sine, Square, Step, Waveform};
use crate::error::UnknownLabel;
use crate::expression;
use crate::{GeneratedSignal, TimeGrid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape parameters shared by every built-in signal.
///
/// Shapes use only what they need: Step, Impulse and Ramp read the amplitude
/// alone, Sawtooth ignores the phase.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct WaveParams {
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Phase offset in degrees
    pub phase: f64,
}

impl WaveParams {
    /// Creates a new parameter set; `phase` is in degrees.
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Unit frequency and zero phase with the given amplitude.
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            ..Self::default()
        }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
        }
    }
}

/// The selectable signal types, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalKind {
    Sine,
    Square,
    Sawtooth,
    Step,
    Impulse,
    Ramp,
    Custom,
}

impl SignalKind {
    /// Every kind, in menu order.
    pub const ALL: [SignalKind; 7] = [
        SignalKind::Sine,
        SignalKind::Square,
        SignalKind::Sawtooth,
        SignalKind::Step,
        SignalKind::Impulse,
        SignalKind::Ramp,
        SignalKind::Custom,
    ];

    /// Kinds offered for the second operand of a binary operation.
    pub const SECONDARY: [SignalKind; 6] = [
        SignalKind::Sine,
        SignalKind::Square,
        SignalKind::Sawtooth,
        SignalKind::Step,
        SignalKind::Impulse,
        SignalKind::Ramp,
    ];

    /// The name shown in the signal menu.
    pub fn label(self) -> &'static str {
        match self {
            SignalKind::Sine => "Sine",
            SignalKind::Square => "Square",
            SignalKind::Sawtooth => "Sawtooth",
            SignalKind::Step => "Step",
            SignalKind::Impulse => "Impulse",
            SignalKind::Ramp => "Ramp",
            SignalKind::Custom => "Custom User Signal",
        }
    }

    pub fn is_custom(self) -> bool {
        self == SignalKind::Custom
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SignalKind {
    type Err = UnknownLabel;

    /// Accepts the display label or the variant name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SignalKind::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(s) || format!("{kind:?}").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownLabel {
                what: "signal type",
                label: s.to_string(),
            })
    }
}

/// A complete description of a signal to synthesize.
///
/// # Examples
///
/// ```
/// use wavelab::{SignalSpec, TimeGrid, WaveParams};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// let ramp = SignalSpec::Ramp(WaveParams::with_amplitude(2.0));
/// assert_eq!(ramp.samples(&grid), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalSpec {
    Sine(WaveParams),
    Square(WaveParams),
    Sawtooth(WaveParams),
    Step(WaveParams),
    Impulse(WaveParams),
    Ramp(WaveParams),
    /// A user formula in `t`; see [`crate::expression`]
    Custom(String),
}

impl SignalSpec {
    /// Builds a spec from a menu selection.
    ///
    /// `custom_expression` is only read for [`SignalKind::Custom`], and
    /// `params` is ignored in that case.
    pub fn from_kind(kind: SignalKind, params: WaveParams, custom_expression: &str) -> Self {
        match kind {
            SignalKind::Sine => SignalSpec::Sine(params),
            SignalKind::Square => SignalSpec::Square(params),
            SignalKind::Sawtooth => SignalSpec::Sawtooth(params),
            SignalKind::Step => SignalSpec::Step(params),
            SignalKind::Impulse => SignalSpec::Impulse(params),
            SignalKind::Ramp => SignalSpec::Ramp(params),
            SignalKind::Custom => SignalSpec::Custom(custom_expression.to_string()),
        }
    }

    /// The menu entry this spec corresponds to.
    pub fn kind(&self) -> SignalKind {
        match self {
            SignalSpec::Sine(_) => SignalKind::Sine,
            SignalSpec::Square(_) => SignalKind::Square,
            SignalSpec::Sawtooth(_) => SignalKind::Sawtooth,
            SignalSpec::Step(_) => SignalKind::Step,
            SignalSpec::Impulse(_) => SignalKind::Impulse,
            SignalSpec::Ramp(_) => SignalKind::Ramp,
            SignalSpec::Custom(_) => SignalKind::Custom,
        }
    }

    /// Shape parameters, or `None` for a custom formula.
    pub fn params(&self) -> Option<&WaveParams> {
        match self {
            SignalSpec::Sine(p)
            | SignalSpec::Square(p)
            | SignalSpec::Sawtooth(p)
            | SignalSpec::Step(p)
            | SignalSpec::Impulse(p)
            | SignalSpec::Ramp(p) => Some(p),
            SignalSpec::Custom(_) => None,
        }
    }

    /// Evaluates the signal on every instant of `grid`.
    ///
    /// Always returns exactly `grid.len()` samples. A custom formula that
    /// fails to parse or evaluate yields zeros.
    pub fn samples(&self, grid: &TimeGrid) -> Vec<f64> {
        match self {
            SignalSpec::Sine(p) => Sine::from(*p).sample(grid),
            SignalSpec::Square(p) => Square::from(*p).sample(grid),
            SignalSpec::Sawtooth(p) => Sawtooth::from(*p).sample(grid),
            SignalSpec::Step(p) => Step::from(*p).sample(grid),
            SignalSpec::Impulse(p) => Impulse::from(*p).sample(grid),
            SignalSpec::Ramp(p) => Ramp::from(*p).sample(grid),
            SignalSpec::Custom(source) => expression::evaluate(source, grid),
        }
    }

    /// Evaluates the signal on `grid`, keeping the grid and spec alongside.
    pub fn generate(&self, grid: &TimeGrid) -> GeneratedSignal {
        GeneratedSignal::new(self.clone(), grid.clone(), self.samples(grid))
    }

    /// The signal's value on the single-instant grid `[0]`.
    pub fn value_at_origin(&self) -> f64 {
        self.samples(&TimeGrid::origin())
            .first()
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for SignalSpec {
    fn default() -> Self {
        SignalSpec::Sine(WaveParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    fn all_specs() -> Vec<SignalSpec> {
        SignalKind::ALL
            .into_iter()
            .map(|kind| SignalSpec::from_kind(kind, WaveParams::new(1.5, 3.0, 20.0), "t * t"))
            .collect()
    }

    #[test]
    fn test_output_length_matches_grid() {
        for grid in [
            TimeGrid::continuous(),
            TimeGrid::discrete(10).unwrap(),
            TimeGrid::origin(),
        ] {
            for spec in all_specs() {
                assert_eq!(spec.samples(&grid).len(), grid.len(), "{:?}", spec.kind());
            }
        }
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in SignalKind::ALL {
            let spec = SignalSpec::from_kind(kind, WaveParams::default(), "t");
            assert_eq!(spec.kind(), kind);
            assert_eq!(spec.params().is_none(), kind.is_custom());
        }
    }

    #[test]
    fn test_kind_labels_parse() {
        for kind in SignalKind::ALL {
            assert_eq!(kind.label().parse::<SignalKind>(), Ok(kind));
        }
        assert_eq!("sawtooth".parse::<SignalKind>(), Ok(SignalKind::Sawtooth));
        assert_eq!("custom".parse::<SignalKind>(), Ok(SignalKind::Custom));
        assert!("Triangle".parse::<SignalKind>().is_err());
        assert!(!SignalKind::SECONDARY.contains(&SignalKind::Custom));
    }

    #[test]
    fn test_sine_dispatch() {
        let grid = TimeGrid::discrete(25).unwrap();
        let samples = SignalSpec::Sine(WaveParams::default()).samples(&grid);
        for (&t, &y) in grid.iter().zip(&samples) {
            assert_abs_diff_eq!(y, (TAU * t).sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_custom_dispatch() {
        let grid = TimeGrid::linspace(0.0, 1.0, 3).unwrap();
        let spec = SignalSpec::Custom("t * t".to_string());
        assert_eq!(spec.samples(&grid), vec![0.0, 0.25, 1.0]);

        let broken = SignalSpec::Custom("t +".to_string());
        assert_eq!(broken.samples(&grid), vec![0.0; 3]);
    }

    #[test]
    fn test_value_at_origin() {
        assert_eq!(SignalSpec::Step(WaveParams::with_amplitude(2.0)).value_at_origin(), 2.0);
        assert_eq!(SignalSpec::Impulse(WaveParams::with_amplitude(3.0)).value_at_origin(), 3.0);
        assert_eq!(SignalSpec::Ramp(WaveParams::with_amplitude(3.0)).value_at_origin(), 0.0);
        assert_abs_diff_eq!(
            SignalSpec::Sine(WaveParams::new(2.0, 1.0, 30.0)).value_at_origin(),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(SignalSpec::Custom("cos(t) + 1".into()).value_at_origin(), 2.0);
    }

    #[test]
    fn test_generate_keeps_spec_and_grid() {
        let grid = TimeGrid::discrete(12).unwrap();
        let spec = SignalSpec::Square(WaveParams::new(1.0, 2.0, 0.0));
        let generated = spec.generate(&grid);
        assert_eq!(generated.spec(), &spec);
        assert_eq!(generated.grid(), &grid);
        assert_eq!(generated.samples(), spec.samples(&grid).as_slice());
    }
}
