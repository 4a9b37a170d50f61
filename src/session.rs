//! Session configuration and the end-to-end compute pipeline.
//!
//! A [`Session`] holds the only state that outlives a single recomputation:
//! the user's saved custom formula and the chosen sampling. Everything else
//! is rebuilt from scratch by [`Session::compute`] on every change.

use crate::error::GridError;
use crate::expression;
use crate::transforms::{self, OperationSpec, TransformResult};
use crate::{GeneratedSignal, Sampling, SignalSpec, TimeGrid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The formula a fresh session starts with.
pub const DEFAULT_EXPRESSION: &str = "sin(2*pi*5*t) * exp(-2*t)";

/// The bounds, step and starting value of a user-adjustable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    /// Creates a new range; `default` should lie within `min..=max`.
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// True when `value` lies within the bounds, both included.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Pulls `value` into range; NaN becomes the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Signal amplitude.
pub const AMPLITUDE: ParamRange = ParamRange::new(0.1, 5.0, 0.1, 1.0);
/// Signal frequency in Hz.
pub const FREQUENCY: ParamRange = ParamRange::new(0.1, 20.0, 0.5, 1.0);
/// Signal phase in degrees.
pub const PHASE: ParamRange = ParamRange::new(-180.0, 180.0, 10.0, 0.0);
/// Time-scaling factor `a`.
pub const TIME_SCALE: ParamRange = ParamRange::new(0.1, 5.0, 0.1, 1.0);
/// Amplitude-scaling factor `A`.
pub const AMPLITUDE_SCALE: ParamRange = ParamRange::new(0.1, 5.0, 0.1, 1.0);
/// Time shift `t₀`.
pub const TIME_SHIFT: ParamRange = ParamRange::new(-5.0, 5.0, 0.1, 0.0);
/// Discrete-mode sample count.
pub const DISCRETE_SAMPLES: ParamRange = ParamRange::new(
    crate::MIN_DISCRETE_SAMPLES as f64,
    crate::MAX_DISCRETE_SAMPLES as f64,
    1.0,
    crate::DEFAULT_DISCRETE_SAMPLES as f64,
);

/// Everything produced by one recomputation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Computation {
    pub primary: GeneratedSignal,
    /// Present only for the binary operations
    pub secondary: Option<GeneratedSignal>,
    pub result: TransformResult,
}

/// Per-user configuration carried between recomputations.
///
/// # Examples
///
/// ```
/// use wavelab::{OperationSpec, Sampling, Session};
///
/// let mut session = Session::default();
/// session.sampling = Sampling::Discrete { samples: 20 };
/// session.set_custom_expression("2 * t");
///
/// let out = session
///     .compute(&session.custom_signal(), &OperationSpec::AmplitudeScaling(3.0))
///     .unwrap();
/// assert_eq!(out.result.samples.len(), 20);
/// assert_eq!(out.result.samples[19], 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Session {
    pub custom_expression: String,
    pub sampling: Sampling,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            custom_expression: DEFAULT_EXPRESSION.to_string(),
            sampling: Sampling::default(),
        }
    }
}

impl Session {
    /// Creates a new session with the given formula and sampling.
    pub fn new(custom_expression: impl Into<String>, sampling: Sampling) -> Self {
        Self {
            custom_expression: custom_expression.into(),
            sampling,
        }
    }

    /// Replaces the saved formula. The text is stored as typed, valid or not.
    pub fn set_custom_expression(&mut self, expression: impl Into<String>) {
        self.custom_expression = expression.into();
    }

    /// A spec for the saved formula.
    pub fn custom_signal(&self) -> SignalSpec {
        SignalSpec::Custom(self.custom_expression.clone())
    }

    /// The grid for the current sampling configuration.
    ///
    /// # Errors
    ///
    /// Fails when a discrete sample count is out of range.
    pub fn grid(&self) -> Result<TimeGrid, GridError> {
        self.sampling.grid()
    }

    /// Evaluates the saved formula for live preview; invalid input gives zeros.
    pub fn preview(&self, grid: &TimeGrid) -> Vec<f64> {
        expression::evaluate(&self.custom_expression, grid)
    }

    /// Generates the input signal(s) on the session grid and applies `op`.
    ///
    /// The second operand of a binary operation is generated from the spec
    /// the operation carries, on the same grid as the first.
    ///
    /// # Errors
    ///
    /// Fails only when the sampling configuration is invalid.
    pub fn compute(
        &self,
        primary: &SignalSpec,
        op: &OperationSpec,
    ) -> Result<Computation, GridError> {
        let grid = self.grid()?;
        let primary = primary.generate(&grid);
        let secondary = op.secondary().map(|spec| spec.generate(&grid));
        let result = transforms::apply(op, &primary, secondary.as_ref());
        log::debug!(
            "computed {} on {} samples ({:?})",
            op.kind(),
            grid.len(),
            grid.mode()
        );
        Ok(Computation {
            primary,
            secondary,
            result,
        })
    }
}
