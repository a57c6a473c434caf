//! Celestial object generation engine
//!
//! Consumes a parameter specification (one per request mode), samples
//! physical and orbital attributes from a caller-provided `ChaChaRng`, and
//! produces a batch of `CelestialObject` values. A separate ordering &
//! naming pass imposes the canonical presentation order and assigns final
//! names.
//!
//! The engine performs no range validation: callers supply pre-validated
//! `min <= max` bounds (the CLI layer owns validation), and an inverted
//! range silently degenerates toward its minimum.

pub mod generation;
pub mod naming;
pub mod params;
pub mod sampling;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod sampling_test;

pub use generation::{
    generate_comets, generate_generic_objects, generate_regular_moons, GenerationError,
};
pub use naming::{finalize_comets, finalize_generic, finalize_moons};
pub use params::{
    CometParams, CommonParams, GenericObjectParams, MoonSpec, RegularMoonParams, ValueRange,
};
