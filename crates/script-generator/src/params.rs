//! Parameter specifications for generation requests
//!
//! One value object per request mode. Each is built once by the caller
//! (fully populated and pre-validated), stays immutable, and is consumed
//! exactly once by the generation engine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use celestial::{DistanceUnit, ObjectType};

/// An inclusive sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Settings shared by every generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonParams {
    /// Name of the body the generated objects orbit
    pub parent_body: String,

    /// Unit for semi-major axes in the output script
    pub distance_unit: DistanceUnit,

    /// Reference plane for the orbit blocks, passed through verbatim
    /// (e.g. `"Equator"`, `"Ecliptic"`)
    pub reference_plane: String,

    /// Destination script file
    pub output_file: PathBuf,
}

/// Caller-supplied literals for one regular moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonSpec {
    pub name: String,

    /// Radius in kilometers
    pub radius: f64,

    /// Orbital distance in the request's distance unit
    pub distance: f64,

    /// SpaceEngine class (e.g. `"Terra"`, `"Aquaria"`)
    pub classification: String,
}

/// Request for a batch of regular (major) moons.
///
/// Names, radii, distances, and classes are literal per-moon values; only
/// the orbital angles and albedo are sampled, from ranges shared across
/// the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularMoonParams {
    pub common: CommonParams,
    pub moons: Vec<MoonSpec>,
    pub eccentricity: ValueRange,
    pub inclination: ValueRange,
    pub bond_albedo: ValueRange,
}

/// Request for a batch of generic objects (dwarf moons or asteroids).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericObjectParams {
    pub common: CommonParams,
    pub object_type: ObjectType,
    pub axis: ValueRange,
    pub eccentricity: ValueRange,
    pub inclination: ValueRange,
    pub count: usize,

    /// First value of the name sequence (e.g. 4 yields `Parent.D4`,
    /// `Parent.D5`, ...)
    pub start_number: u32,
}

/// Request for a batch of comets in grouped mode.
///
/// Eccentricity, inclination, and radius bounds are comet-specific
/// constants (see `generation`); the caller only controls the axis range,
/// the base count, and where the name sequence starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CometParams {
    pub common: CommonParams,
    pub axis: ValueRange,
    pub count: usize,
    pub starting_from: u32,
}
