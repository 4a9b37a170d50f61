//! The transform engine: applies one operation to one or two signals.
//!
//! [`try_apply`] is strict and reports a missing or mismatched second signal.
//! [`apply`] never fails: when the strict path errors it passes the first
//! signal through unchanged, so there is always something to draw.

mod kind;

pub use kind::OperationKind;

use crate::combinators::SampledExt;
use crate::error::TransformError;
use crate::{GeneratedSignal, SignalSpec, TimeGrid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time-scaling factors at or below this are treated as infinite compression.
pub const MIN_TIME_SCALE: f64 = 1e-9;

/// An operation together with its parameter.
///
/// The binary operations carry the spec of their second operand so a caller
/// can generate it on the same grid as the first (see
/// [`crate::Session::compute`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationSpec {
    /// `x(at)`
    TimeScaling(f64),
    /// `A·x(t)`
    AmplitudeScaling(f64),
    /// `x(t - t₀)`
    TimeShifting(f64),
    /// `x(-t)`
    TimeReversal,
    SignalAddition(SignalSpec),
    SignalMultiplication(SignalSpec),
}

impl OperationSpec {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationSpec::TimeScaling(_) => OperationKind::TimeScaling,
            OperationSpec::AmplitudeScaling(_) => OperationKind::AmplitudeScaling,
            OperationSpec::TimeShifting(_) => OperationKind::TimeShifting,
            OperationSpec::TimeReversal => OperationKind::TimeReversal,
            OperationSpec::SignalAddition(_) => OperationKind::SignalAddition,
            OperationSpec::SignalMultiplication(_) => OperationKind::SignalMultiplication,
        }
    }

    /// The second operand's spec, for the binary operations.
    pub fn secondary(&self) -> Option<&SignalSpec> {
        match self {
            OperationSpec::SignalAddition(spec) | OperationSpec::SignalMultiplication(spec) => {
                Some(spec)
            }
            _ => None,
        }
    }

    /// The scalar parameter, for the operations that have one.
    pub fn parameter(&self) -> Option<f64> {
        match *self {
            OperationSpec::TimeScaling(v)
            | OperationSpec::AmplitudeScaling(v)
            | OperationSpec::TimeShifting(v) => Some(v),
            _ => None,
        }
    }
}

/// The processed signal: a (possibly remapped) axis, its samples, and the
/// operation's parameter for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TransformResult {
    pub grid: TimeGrid,
    pub samples: Vec<f64>,
    /// The scale factor, gain or shift used; `None` for parameterless operations
    pub parameter: Option<f64>,
}

impl TransformResult {
    /// The first signal, untouched.
    fn passthrough(signal: &GeneratedSignal) -> Self {
        Self {
            grid: signal.grid().clone(),
            samples: signal.samples().to_vec(),
            parameter: None,
        }
    }
}

/// Applies `op` to `primary` (and `secondary` for binary operations).
///
/// # Errors
///
/// - [`TransformError::MissingOperand`] when a binary operation has no second signal
/// - [`TransformError::LengthMismatch`] when the two signals differ in length
///
/// # Examples
///
/// ```
/// use wavelab::{OperationSpec, SignalSpec, TimeGrid, WaveParams, try_apply};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// let ramp = SignalSpec::Ramp(WaveParams::default()).generate(&grid);
///
/// let shifted = try_apply(&OperationSpec::TimeShifting(2.0), &ramp, None).unwrap();
/// assert_eq!(shifted.grid.as_slice(), &[2.0, 2.25, 2.5, 2.75, 3.0]);
/// assert_eq!(shifted.parameter, Some(2.0));
/// ```
pub fn try_apply(
    op: &OperationSpec,
    primary: &GeneratedSignal,
    secondary: Option<&GeneratedSignal>,
) -> Result<TransformResult, TransformError> {
    match *op {
        OperationSpec::TimeShifting(t0) => Ok(primary.shifted(t0)),
        OperationSpec::TimeScaling(a) if a > MIN_TIME_SCALE => Ok(primary.time_scaled(a)),
        OperationSpec::TimeScaling(a) => {
            // Infinite compression: every instant sees the value at t = 0.
            let value = primary.spec().value_at_origin();
            Ok(TransformResult {
                grid: primary.grid().clone(),
                samples: vec![value; primary.len()],
                parameter: Some(a),
            })
        }
        OperationSpec::TimeReversal => Ok(primary.reversed()),
        OperationSpec::AmplitudeScaling(factor) => Ok(primary.gain(factor)),
        OperationSpec::SignalAddition(_) => {
            let secondary = secondary.ok_or(TransformError::MissingOperand(op.kind()))?;
            primary.add(secondary)
        }
        OperationSpec::SignalMultiplication(_) => {
            let secondary = secondary.ok_or(TransformError::MissingOperand(op.kind()))?;
            primary.multiply(secondary)
        }
    }
}

/// Applies `op`, falling back to the first signal unchanged on error.
///
/// The fallback result has the first signal's grid and samples and no
/// display parameter. A warning is logged whenever it is used.
pub fn apply(
    op: &OperationSpec,
    primary: &GeneratedSignal,
    secondary: Option<&GeneratedSignal>,
) -> TransformResult {
    try_apply(op, primary, secondary).unwrap_or_else(|err| {
        log::warn!("{} not applied ({err}), passing first signal through", op.kind());
        TransformResult::passthrough(primary)
    })
}
