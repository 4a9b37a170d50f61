//! Time grids and generated signals.
//!
//! This module provides the value types every other part of the engine
//! passes around:
//! - `TimeGrid` for the sample instants a signal is evaluated on
//! - `Sampling` for the user-facing grid configuration
//! - `GeneratedSignal` for a grid paired with its amplitude samples

mod generated;
mod grid;

pub use generated::GeneratedSignal;
pub use grid::{
    CONTINUOUS_SAMPLES, DEFAULT_DISCRETE_SAMPLES, MAX_DISCRETE_SAMPLES, MIN_DISCRETE_SAMPLES,
    Sampling, SamplingMode, TimeGrid,
};
