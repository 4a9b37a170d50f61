//! Operation names, notation and short theory notes for display.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownLabel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six operations, without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    TimeScaling,
    AmplitudeScaling,
    TimeShifting,
    TimeReversal,
    SignalAddition,
    SignalMultiplication,
}

impl OperationKind {
    /// Every operation, in menu order.
    pub const ALL: [OperationKind; 6] = [
        OperationKind::TimeScaling,
        OperationKind::AmplitudeScaling,
        OperationKind::TimeShifting,
        OperationKind::TimeReversal,
        OperationKind::SignalAddition,
        OperationKind::SignalMultiplication,
    ];

    /// The name shown in the operation menu.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::TimeScaling => "Time Scaling",
            OperationKind::AmplitudeScaling => "Amplitude Scaling",
            OperationKind::TimeShifting => "Time Shifting",
            OperationKind::TimeReversal => "Time Reversal",
            OperationKind::SignalAddition => "Signal Addition",
            OperationKind::SignalMultiplication => "Signal Multiplication",
        }
    }

    /// Symbolic form of the operation applied to `x(t)`.
    pub fn notation(self) -> &'static str {
        match self {
            OperationKind::TimeScaling => "x(at)",
            OperationKind::AmplitudeScaling => "A·x(t)",
            OperationKind::TimeShifting => "x(t - t₀)",
            OperationKind::TimeReversal => "x(-t)",
            OperationKind::SignalAddition => "x₁(t) + x₂(t)",
            OperationKind::SignalMultiplication => "x₁(t) · x₂(t)",
        }
    }

    /// A short explanation of what the operation does to a signal.
    pub fn theory(self) -> &'static str {
        match self {
            OperationKind::TimeScaling => {
                "Time scaling changes how fast a signal evolves. Given x(t), the scaled \
                 signal is x(at): for a > 1 it is compressed in time, for 0 < a < 1 it is \
                 stretched."
            }
            OperationKind::AmplitudeScaling => {
                "Amplitude scaling changes the height of a signal. Given x(t), the scaled \
                 signal is A·x(t), so every peak is multiplied by A."
            }
            OperationKind::TimeShifting => {
                "Time shifting delays or advances a signal. Given x(t), the shifted signal \
                 is x(t - t₀): for t₀ > 0 it moves right (delay), for t₀ < 0 it moves left \
                 (advance)."
            }
            OperationKind::TimeReversal => {
                "Time reversal flips a signal about t = 0. Given x(t), the reversed signal \
                 is x(-t)."
            }
            OperationKind::SignalAddition => {
                "Adding two signals produces their superposition: y(t) = x₁(t) + x₂(t)."
            }
            OperationKind::SignalMultiplication => {
                "Multiplying two signals modulates one by the other: y(t) = x₁(t) · x₂(t)."
            }
        }
    }

    /// True for the operations that combine two signals.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            OperationKind::SignalAddition | OperationKind::SignalMultiplication
        )
    }

    /// True for the operations that only move the time axis.
    pub fn is_axis_only(self) -> bool {
        matches!(
            self,
            OperationKind::TimeScaling | OperationKind::TimeShifting | OperationKind::TimeReversal
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OperationKind {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OperationKind::ALL
            .into_iter()
            .find(|kind| {
                kind.label().eq_ignore_ascii_case(s) || format!("{kind:?}").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownLabel {
                what: "operation",
                label: s.to_string(),
            })
    }
}
