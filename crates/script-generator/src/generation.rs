//! Generation engine: one entry point per request mode
//!
//! Each function consumes a parameter specification and emits an unordered
//! batch of `CelestialObject` values. Run the matching `naming` pass over
//! the batch before serializing it; generic objects and comets come out of
//! here carrying placeholder names.

use rand_chacha::ChaChaRng;
use thiserror::Error;

use celestial::{CelestialObject, ObjectType, OrbitalElements, PhysicalProperties, J2000_EPOCH};

use crate::params::{CometParams, GenericObjectParams, RegularMoonParams, ValueRange};
use crate::sampling::{ascending_node, circular_angle, uniform_range, FULL_CIRCLE_DEG};

/// Name carried by objects until the naming pass assigns the real one.
pub const PLACEHOLDER_NAME: &str = "GeneratedObject";

// =============================================================================
// Fixed Generation Bounds
// =============================================================================

/// Geometric albedo sits this far above the sampled Bond albedo for
/// regular moons (empirical offset).
const MOON_ALBEDO_OFFSET: f64 = 0.04;

/// Radius bounds for generic objects (dwarf moons, asteroids), in km
const GENERIC_RADIUS: ValueRange = ValueRange::new(0.1, 60.0);

/// Bond albedo bounds for generic objects
const GENERIC_BOND_ALBEDO: ValueRange = ValueRange::new(0.07, 0.09);

/// Geometric albedo offset above Bond albedo for generic objects
const GENERIC_ALBEDO_OFFSET: f64 = 0.05;

/// Eccentricity bounds for comet orbits
const COMET_ECCENTRICITY: ValueRange = ValueRange::new(0.4, 0.95);

/// Inclination bounds for comet orbits, in degrees
const COMET_INCLINATION: ValueRange = ValueRange::new(0.0, 40.0);

/// Nucleus radius bounds for comets, in km
const COMET_RADIUS: ValueRange = ValueRange::new(0.1, 30.0);

/// Fraction of the requested comet count that forms barycenter groups
const COMET_GROUP_FRACTION: ValueRange = ValueRange::new(0.10, 0.20);

/// Pericenter-argument offset between the two members of a comet pair, in
/// degrees. Keeps the pair angularly separated, never coincident.
const PAIR_ARG_OFFSET: ValueRange = ValueRange::new(15.0, 25.0);

/// A precondition failure detected before any sampling happens.
///
/// Range problems are deliberately NOT represented here: bounds are
/// validated upstream, in the CLI layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("parent body name is required")]
    MissingParentBody,
}

// =============================================================================
// Regular Moons
// =============================================================================

/// Generate one moon per [`MoonSpec`](crate::params::MoonSpec).
///
/// Names, radii, distances, and classes are taken literally from the spec;
/// orbital angles and Bond albedo are sampled from the shared ranges.
pub fn generate_regular_moons(
    rng: &mut ChaChaRng,
    params: &RegularMoonParams,
) -> Result<Vec<CelestialObject>, GenerationError> {
    let parent = require_parent(&params.common.parent_body)?;

    let moons = params
        .moons
        .iter()
        .map(|spec| {
            let inclination = uniform_range(rng, params.inclination);
            let orbit = OrbitalElements {
                epoch: J2000_EPOCH,
                semi_major_axis: spec.distance,
                eccentricity: uniform_range(rng, params.eccentricity),
                inclination,
                ascending_node: ascending_node(rng, inclination),
                arg_of_pericenter: circular_angle(rng),
                mean_anomaly: circular_angle(rng),
                period: None,
            };

            let bond = uniform_range(rng, params.bond_albedo);
            let physical = PhysicalProperties {
                radius: spec.radius,
                albedo_bond: bond,
                albedo_geom: bond + MOON_ALBEDO_OFFSET,
                ..PhysicalProperties::default()
            };

            CelestialObject {
                object_type: ObjectType::Moon,
                name: spec.name.clone(),
                parent_body: parent.to_string(),
                classification: Some(spec.classification.clone()),
                physical: Some(physical),
                orbit: Some(orbit),
                satellite: false,
            }
        })
        .collect();

    Ok(moons)
}

// =============================================================================
// Generic Objects (Dwarf Moons, Asteroids)
// =============================================================================

/// Generate `count` placeholder-named objects with fully sampled orbits.
pub fn generate_generic_objects(
    rng: &mut ChaChaRng,
    params: &GenericObjectParams,
) -> Result<Vec<CelestialObject>, GenerationError> {
    let parent = require_parent(&params.common.parent_body)?;

    let objects = (0..params.count)
        .map(|_| {
            let inclination = uniform_range(rng, params.inclination);
            let orbit = OrbitalElements {
                epoch: J2000_EPOCH,
                semi_major_axis: uniform_range(rng, params.axis),
                eccentricity: uniform_range(rng, params.eccentricity),
                inclination,
                ascending_node: ascending_node(rng, inclination),
                arg_of_pericenter: circular_angle(rng),
                mean_anomaly: circular_angle(rng),
                period: None,
            };

            let bond = uniform_range(rng, GENERIC_BOND_ALBEDO);
            let physical = PhysicalProperties {
                radius: uniform_range(rng, GENERIC_RADIUS),
                albedo_bond: bond,
                albedo_geom: bond + GENERIC_ALBEDO_OFFSET,
                ..PhysicalProperties::default()
            };

            CelestialObject {
                object_type: params.object_type,
                name: PLACEHOLDER_NAME.to_string(),
                parent_body: parent.to_string(),
                classification: None,
                physical: Some(physical),
                orbit: Some(orbit),
                satellite: false,
            }
        })
        .collect();

    Ok(objects)
}

// =============================================================================
// Comets (Grouped Mode)
// =============================================================================

/// Generate a comet batch in grouped mode.
///
/// A grouping fraction `r` drawn from [0.10, 0.20) turns
/// `max(1, floor(count * r))` of the requested count into barycenter
/// groups; the remainder become single comets. Each group contributes one
/// barycenter and two member comets that share its orbit draw except for
/// the argument of pericenter, so the batch totals `count + 2 * groups`
/// objects.
pub fn generate_comets(
    rng: &mut ChaChaRng,
    params: &CometParams,
) -> Result<Vec<CelestialObject>, GenerationError> {
    let parent = require_parent(&params.common.parent_body)?;

    let fraction = uniform_range(rng, COMET_GROUP_FRACTION);
    let groups = ((params.count as f64 * fraction).floor() as usize).max(1);
    let singles = params.count.saturating_sub(groups);

    let mut objects = Vec::with_capacity(singles + 3 * groups);

    for _ in 0..groups {
        let orbit = comet_orbit(rng, params.axis);

        objects.push(CelestialObject {
            object_type: ObjectType::Barycenter,
            name: PLACEHOLDER_NAME.to_string(),
            parent_body: parent.to_string(),
            classification: None,
            physical: None,
            orbit: Some(orbit),
            satellite: false,
        });

        let base_arg = circular_angle(rng);
        let offset = uniform_range(rng, PAIR_ARG_OFFSET);
        objects.push(pair_member(rng, orbit, base_arg));
        objects.push(pair_member(rng, orbit, (base_arg + offset) % FULL_CIRCLE_DEG));
    }

    for _ in 0..singles {
        objects.push(CelestialObject {
            object_type: ObjectType::Comet,
            name: PLACEHOLDER_NAME.to_string(),
            parent_body: parent.to_string(),
            classification: Some(ObjectType::Asteroid.label().to_string()),
            physical: Some(PhysicalProperties::radius_only(uniform_range(
                rng,
                COMET_RADIUS,
            ))),
            orbit: Some(comet_orbit(rng, params.axis)),
            satellite: false,
        });
    }

    Ok(objects)
}

/// One member of a comet pair: the barycenter's orbit with its own
/// argument of pericenter and an independently sampled nucleus radius.
/// The naming pass rebinds its parent to the barycenter's final name.
fn pair_member(rng: &mut ChaChaRng, orbit: OrbitalElements, arg: f64) -> CelestialObject {
    CelestialObject {
        object_type: ObjectType::Comet,
        name: PLACEHOLDER_NAME.to_string(),
        parent_body: PLACEHOLDER_NAME.to_string(),
        classification: Some(ObjectType::Asteroid.label().to_string()),
        physical: Some(PhysicalProperties::radius_only(uniform_range(
            rng,
            COMET_RADIUS,
        ))),
        orbit: Some(OrbitalElements {
            arg_of_pericenter: arg,
            ..orbit
        }),
        satellite: true,
    }
}

fn comet_orbit(rng: &mut ChaChaRng, axis: ValueRange) -> OrbitalElements {
    let inclination = uniform_range(rng, COMET_INCLINATION);
    OrbitalElements {
        epoch: J2000_EPOCH,
        semi_major_axis: uniform_range(rng, axis),
        eccentricity: uniform_range(rng, COMET_ECCENTRICITY),
        inclination,
        ascending_node: ascending_node(rng, inclination),
        arg_of_pericenter: circular_angle(rng),
        mean_anomaly: circular_angle(rng),
        period: None,
    }
}

fn require_parent(parent_body: &str) -> Result<&str, GenerationError> {
    let trimmed = parent_body.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::MissingParentBody);
    }
    Ok(trimmed)
}
