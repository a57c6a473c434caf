//! Keplerian orbital elements

use serde::{Deserialize, Serialize};

/// Default orbital epoch for generated scripts (J2000.0 as a Julian Date).
pub const J2000_EPOCH: f64 = 2451545.0;

/// The Keplerian elements that describe an orbit at a given epoch.
///
/// Angles are in degrees, the semi-major axis is in whatever distance unit
/// the enclosing request selected (AU or km), and the epoch is a Julian
/// Date.
///
/// Invariant: `ascending_node` is 0 whenever `inclination` is 0. A
/// zero-inclination orbit never crosses the reference plane, so its
/// ascending node is undefined by convention and is forced to zero rather
/// than sampled. The sampling layer upholds this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Reference time at which these elements are valid (Julian Date)
    pub epoch: f64,

    /// Half the longest diameter of the orbital ellipse
    pub semi_major_axis: f64,

    /// Shape parameter: 0 is circular, approaching 1 is highly elongated
    pub eccentricity: f64,

    /// Orbital tilt relative to the reference plane, in degrees
    pub inclination: f64,

    /// Longitude of the ascending node, in degrees
    pub ascending_node: f64,

    /// Angle from the ascending node to pericenter, in degrees
    pub arg_of_pericenter: f64,

    /// Mean anomaly at the epoch, in degrees
    pub mean_anomaly: f64,

    /// Orbital period in days, when known
    pub period: Option<f64>,
}
