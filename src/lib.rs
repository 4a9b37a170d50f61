//! WaveLab - Signal generation and transformation for teaching signals and systems
//!
//! This library synthesizes the canonical classroom signals over a sampled
//! time axis and applies the elementary operations to them: time scaling,
//! amplitude scaling, time shifting, time reversal, addition and
//! multiplication. User formulas are evaluated by a small sandboxed
//! expression language.

pub mod combinators;
pub mod error;
pub mod expression;
pub mod session;
pub mod signals;
pub mod transforms;
pub mod waveforms;

// Re-export commonly used types at the crate root
pub use combinators::{Sampled, SampledExt};
pub use error::{ExpressionError, GridError, TransformError, UnknownLabel};
pub use expression::{Expression, evaluate};
pub use session::{Computation, ParamRange, Session};
pub use signals::{
    CONTINUOUS_SAMPLES, DEFAULT_DISCRETE_SAMPLES, GeneratedSignal, MAX_DISCRETE_SAMPLES,
    MIN_DISCRETE_SAMPLES, Sampling, SamplingMode, TimeGrid,
};
pub use transforms::{
    MIN_TIME_SCALE, OperationKind, OperationSpec, TransformResult, apply, try_apply,
};
pub use waveforms::{
    Impulse, Ramp, Sawtooth, SignalKind, SignalSpec, Sine, Square, Step, WaveParams, Waveform,
};
