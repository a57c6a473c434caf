//! Object-to-script text formatting
//!
//! A pure, stateless transform: the same object with the same unit and
//! reference plane always yields byte-identical text. Type-conditional
//! physical-block behavior lives in a small dispatch table mapping each
//! `ObjectType` to a block policy, keeping the main routine type-agnostic.

use celestial::{CelestialObject, DistanceUnit, ObjectType, PhysicalProperties};

/// Classification printed when an object has none of its own
/// (SpaceEngine convention for unclassified small bodies).
const DEFAULT_CLASS: &str = "Asteroid";

/// Physical-block formatter for one object type.
type PhysicalPolicy = fn(&mut String, &CelestialObject, &PhysicalProperties);

/// Dispatch table entry for the physical block.
///
/// `None` omits the block entirely: a barycenter is a massless reference
/// point and gets no `Class`, `Mass`, or `Radius` lines at all.
fn physical_policy(object_type: ObjectType) -> Option<PhysicalPolicy> {
    match object_type {
        ObjectType::Barycenter => None,
        ObjectType::Comet => Some(comet_block),
        ObjectType::Moon | ObjectType::DwarfMoon | ObjectType::Asteroid => Some(standard_block),
    }
}

/// Format one object as a SpaceEngine script block.
///
/// Missing substructures simply skip their section; an object with
/// neither physical properties nor an orbit still produces a valid
/// header-only block. This function never fails.
pub fn format_object(
    object: &CelestialObject,
    distance_unit: DistanceUnit,
    reference_plane: &str,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} \"{}\"\n{{\n",
        object.object_type.label(),
        object.name
    ));
    out.push_str(&format!("    ParentBody\t\t\"{}\"\n", object.parent_body));

    if let (Some(policy), Some(physical)) =
        (physical_policy(object.object_type), object.physical.as_ref())
    {
        policy(&mut out, object, physical);
    }

    append_orbit_block(&mut out, object, distance_unit, reference_plane);

    out.push_str("}\n");
    out
}

fn classification(object: &CelestialObject) -> &str {
    object
        .classification
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CLASS)
}

/// Comets print at most `Class` and `Radius`; SpaceEngine derives the rest
/// of a comet's physical model itself.
fn comet_block(out: &mut String, object: &CelestialObject, physical: &PhysicalProperties) {
    out.push_str(&format!("    Class\t\t\"{}\"\n", classification(object)));
    if physical.radius > 0.0 {
        out.push_str(&format!("    Radius\t\t{:.8}\n", physical.radius));
    }
}

/// Full physical block for moons, dwarf moons, and asteroids.
///
/// Zero means "unspecified, omit" for every field except the albedos:
/// those are measured quantities and are printed even at 0.
fn standard_block(out: &mut String, object: &CelestialObject, physical: &PhysicalProperties) {
    out.push_str(&format!("    Class\t\t\"{}\"\n", classification(object)));
    if physical.mass > 0.0 {
        out.push_str(&format!("    Mass\t\t{:.6e}\n", physical.mass));
    }
    if physical.radius > 0.0 {
        out.push_str(&format!("    Radius\t\t{:.8}\n", physical.radius));
    }
    out.push_str(&format!("    AlbedoBond\t{:.8}\n", physical.albedo_bond));
    out.push_str(&format!("    AlbedoGeom\t{:.8}\n", physical.albedo_geom));
    if physical.rotation_period > 0.0 {
        out.push_str(&format!(
            "    RotationPeriod\t{:.8}\n",
            physical.rotation_period
        ));
    }
    if physical.obliquity > 0.0 {
        out.push_str(&format!("    Obliquity\t{:.8}\n", physical.obliquity));
    }
}

fn append_orbit_block(
    out: &mut String,
    object: &CelestialObject,
    distance_unit: DistanceUnit,
    reference_plane: &str,
) {
    let Some(orbit) = object.orbit.as_ref() else {
        return;
    };

    let axis_key = match distance_unit {
        DistanceUnit::Km => "SemiMajorAxisKm",
        DistanceUnit::Au => "SemiMajorAxis",
    };

    out.push_str("    Orbit\n    {\n");
    out.push_str(&format!("        Epoch\t\t{:.8}\n", orbit.epoch));
    out.push_str(&format!("        RefPlane\t\"{}\"\n", reference_plane));
    out.push_str(&format!(
        "        {}\t{:.8}\n",
        axis_key, orbit.semi_major_axis
    ));
    out.push_str(&format!(
        "        Eccentricity\t{:.16}\n",
        orbit.eccentricity
    ));
    out.push_str(&format!("        Inclination\t{:.8}\n", orbit.inclination));
    out.push_str(&format!(
        "        AscendingNode\t{:.8}\n",
        orbit.ascending_node
    ));
    out.push_str(&format!(
        "        ArgOfPericen\t{:.8}\n",
        orbit.arg_of_pericenter
    ));
    out.push_str(&format!("        MeanAnomaly\t{:.8}\n", orbit.mean_anomaly));
    if let Some(period) = orbit.period.filter(|p| *p > 0.0) {
        out.push_str(&format!("        Period\t\t{:.8}\n", period));
    }
    out.push_str("    }\n");
}
