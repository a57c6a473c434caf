//! Uniform sampling primitives
//!
//! Every function takes the run's `ChaChaRng` explicitly so that a seeded
//! generator produces a fully deterministic batch. There is no process-wide
//! random state anywhere in the engine.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::params::ValueRange;

/// Full turn in degrees; upper bound for sampled orbital angles.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Uniform draw from `[min, max)`.
///
/// No bounds checking: an inverted range degenerates toward `min`, which
/// is the documented upstream-validation contract.
pub fn uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.random::<f64>()
}

/// Uniform draw from a [`ValueRange`].
pub fn uniform_range(rng: &mut ChaChaRng, range: ValueRange) -> f64 {
    uniform(rng, range.min, range.max)
}

/// Uniform orbital angle in `[0, 360)` degrees.
pub fn circular_angle(rng: &mut ChaChaRng) -> f64 {
    uniform(rng, 0.0, FULL_CIRCLE_DEG)
}

/// Ascending node for the given inclination.
///
/// A zero-inclination orbit has an undefined ascending node, forced to
/// zero by convention; otherwise the node is uniform in `[0, 360)`.
pub fn ascending_node(rng: &mut ChaChaRng, inclination: f64) -> f64 {
    if inclination > 0.0 {
        circular_angle(rng)
    } else {
        0.0
    }
}
