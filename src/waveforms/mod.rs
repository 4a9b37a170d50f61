//! Closed-form waveform generators.
//!
//! Each canonical shape is its own small type implementing [`Waveform`];
//! [`SignalSpec`] is the tagged description the rest of the engine passes
//! around and dispatches to the right shape (or to the formula evaluator).

mod impulse;
mod ramp;
mod sawtooth;
mod sine;
mod spec;
mod square;
mod step;
mod traits;

pub use impulse::Impulse;
pub use ramp::Ramp;
pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use spec::{SignalKind, SignalSpec, WaveParams};
pub use square::Square;
pub use step::Step;
pub use traits::Waveform;
