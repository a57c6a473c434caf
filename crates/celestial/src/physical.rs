//! Physical properties of a celestial body

use serde::{Deserialize, Serialize};

/// Basic physical attributes of a generated body.
///
/// All fields default to zero, which the serializer reads as "not
/// specified, omit from output" -- with one exception: the two albedos are
/// measured quantities, so a Bond or geometric albedo of 0 is still a
/// legitimate value and is always printed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Mass in kilograms
    pub mass: f64,

    /// Mean radius in kilometers
    pub radius: f64,

    /// Bond albedo: fraction of incident light scattered in all directions
    pub albedo_bond: f64,

    /// Geometric albedo: brightness observed directly from above
    pub albedo_geom: f64,

    /// Sidereal rotation period in hours
    pub rotation_period: f64,

    /// Axial tilt in degrees
    pub obliquity: f64,
}

impl PhysicalProperties {
    /// Properties carrying only a radius, everything else unspecified.
    ///
    /// Comets are emitted this way; SpaceEngine derives the rest itself.
    pub fn radius_only(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }
}
