//! The central generated entity

use serde::{Deserialize, Serialize};

use crate::object_type::ObjectType;
use crate::orbital::OrbitalElements;
use crate::physical::PhysicalProperties;

/// A generated celestial body, ready for script serialization.
///
/// Objects move through a two-phase lifecycle: the generation engine emits
/// them with placeholder names, and the ordering & naming pass produces
/// final, fully-named values via the consuming [`renamed`](Self::renamed)
/// and [`reparented`](Self::reparented) helpers. Outside that pass nothing
/// mutates an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    /// What kind of body this is
    pub object_type: ObjectType,

    /// Display name, e.g. `"Io"` or `"Jupiter.D4"`
    pub name: String,

    /// Name of the body this object orbits
    pub parent_body: String,

    /// SpaceEngine classification (e.g. `"Terra"`), when one applies
    pub classification: Option<String>,

    /// Physical block contents; `None` for barycenters
    pub physical: Option<PhysicalProperties>,

    /// Orbit block contents
    pub orbit: Option<OrbitalElements>,

    /// Whether this object orbits a barycenter rather than the parent body
    /// named in the request (comet pair members)
    pub satellite: bool,
}

impl CelestialObject {
    /// Sort key for presentation ordering.
    ///
    /// Objects without an orbit sort first.
    pub fn semi_major_axis(&self) -> f64 {
        self.orbit.map_or(0.0, |o| o.semi_major_axis)
    }

    /// A copy of this object under its final name.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// A copy of this object bound to a new parent.
    ///
    /// Used when a comet pair member is rebound to its barycenter's final
    /// name during the naming pass.
    pub fn reparented(self, parent_body: impl Into<String>) -> Self {
        Self {
            parent_body: parent_body.into(),
            ..self
        }
    }
}
