//! Interactive generation workflow
//!
//! One handler per request mode. Each handler gathers input, validates
//! ranges, builds the parameter specification, runs the engine and the
//! naming pass, and writes the script. A failed request reports its error
//! and returns to the menu.

use anyhow::{Context, Result};
use rand_chacha::ChaChaRng;
use tracing::error;

use celestial::{DistanceUnit, ObjectType};
use script_format::write_script;
use script_generator::{
    finalize_comets, finalize_generic, finalize_moons, generate_comets, generate_generic_objects,
    generate_regular_moons, CometParams, CommonParams, GenericObjectParams, MoonSpec,
    RegularMoonParams,
};

use crate::prompts;
use crate::validate;

const MENU: [&str; 5] = ["Dwarf Moon", "Asteroid", "Regular Moon", "Comets", "Exit"];

const DISTANCE_UNITS: [&str; 2] = ["au", "km"];

const REFERENCE_PLANES: [&str; 6] = [
    "Static",
    "Fixed",
    "Equator",
    "Ecliptic",
    "Laplace",
    "Extrasolar",
];

const MOON_CLASSES: [&str; 4] = ["Ferria", "Carbonia", "Terra", "Aquaria"];

pub fn run(rng: &mut ChaChaRng) -> Result<()> {
    println!("Use this tool to generate moons, asteroids, or comets for SpaceEngine.");

    loop {
        let choice = prompts::select("What would you like to generate?", &MENU)?;
        if choice == MENU.len() - 1 {
            println!("Exiting...");
            return Ok(());
        }

        let result = match choice {
            0 => handle_generic(rng, ObjectType::DwarfMoon),
            1 => handle_generic(rng, ObjectType::Asteroid),
            2 => handle_moons(rng),
            _ => handle_comets(rng),
        };

        if let Err(e) = result {
            error!("request failed: {e:#}");
            eprintln!("Error: {e:#}");
        }
    }
}

/// Inputs shared by every request mode. The output file name is derived
/// from the parent body and the request kind (e.g. `Jupiter_Moons.sc`).
fn prompt_common(kind: &str) -> Result<CommonParams> {
    let parent_body = prompts::input_text("Parent body name")?;
    let unit = DISTANCE_UNITS[prompts::select("Distance unit", &DISTANCE_UNITS)?];
    let plane = REFERENCE_PLANES[prompts::select("Reference plane", &REFERENCE_PLANES)?];

    let output_file = format!("{}_{}.sc", parent_body, kind).into();
    Ok(CommonParams {
        parent_body,
        distance_unit: DistanceUnit::parse(unit),
        reference_plane: plane.to_string(),
        output_file,
    })
}

fn handle_generic(rng: &mut ChaChaRng, object_type: ObjectType) -> Result<()> {
    let common = prompt_common(object_type.label())?;

    let axis = prompts::input_range("semi-major axis")?;
    validate::validate_range(axis, "semi-major axis")?;
    let eccentricity = prompts::input_range("eccentricity (0-1)")?;
    validate::validate_eccentricity(eccentricity)?;
    let inclination = prompts::input_range("inclination (deg)")?;
    validate::validate_range(inclination, "inclination")?;

    let count = prompts::input_usize("Number of objects")?;
    let start_number = prompts::input_u32("Starting sequence number")?;

    let params = GenericObjectParams {
        common,
        object_type,
        axis,
        eccentricity,
        inclination,
        count,
        start_number,
    };

    let objects = generate_generic_objects(rng, &params)?;
    let objects = finalize_generic(
        objects,
        &params.common.parent_body,
        params.object_type,
        params.start_number,
    );

    write_script(
        &objects,
        params.common.distance_unit,
        &params.common.reference_plane,
        &params.common.output_file,
    )
    .context("writing script file")?;
    report(objects.len(), &params.common);
    Ok(())
}

fn handle_moons(rng: &mut ChaChaRng) -> Result<()> {
    let common = prompt_common("Moons")?;
    let count = prompts::input_usize("Number of regular moons")?;

    let mut moons = Vec::with_capacity(count);
    for i in 0..count {
        println!("\n--- Moon {} ---", i + 1);
        moons.push(MoonSpec {
            name: prompts::input_text("Moon name")?,
            radius: prompts::input_f64("Radius (km)")?,
            distance: prompts::input_f64(&format!(
                "Orbital distance ({})",
                common.distance_unit
            ))?,
            classification: MOON_CLASSES[prompts::select("Class", &MOON_CLASSES)?].to_string(),
        });
    }

    let eccentricity = prompts::input_range("eccentricity (0-1)")?;
    validate::validate_eccentricity(eccentricity)?;
    let inclination = prompts::input_range("inclination (deg)")?;
    validate::validate_range(inclination, "inclination")?;
    let bond_albedo = prompts::input_range("Bond albedo (0-1)")?;
    validate::validate_range(bond_albedo, "Bond albedo")?;

    let params = RegularMoonParams {
        common,
        moons,
        eccentricity,
        inclination,
        bond_albedo,
    };

    let objects = finalize_moons(generate_regular_moons(rng, &params)?);

    write_script(
        &objects,
        params.common.distance_unit,
        &params.common.reference_plane,
        &params.common.output_file,
    )
    .context("writing script file")?;
    report(objects.len(), &params.common);
    Ok(())
}

fn handle_comets(rng: &mut ChaChaRng) -> Result<()> {
    let common = prompt_common("Comets")?;

    let axis = prompts::input_range("semi-major axis")?;
    validate::validate_range(axis, "semi-major axis")?;
    let count = prompts::input_usize("Number of comets")?;
    let starting_from = prompts::input_u32("Starting sequence number")?;

    let params = CometParams {
        common,
        axis,
        count,
        starting_from,
    };

    let objects = generate_comets(rng, &params)?;
    let objects = finalize_comets(objects, &params.common.parent_body, params.starting_from);

    write_script(
        &objects,
        params.common.distance_unit,
        &params.common.reference_plane,
        &params.common.output_file,
    )
    .context("writing script file")?;
    report(objects.len(), &params.common);
    Ok(())
}

fn report(count: usize, common: &CommonParams) {
    println!(
        "Script generation complete. Wrote {} objects to {}",
        count,
        common.output_file.display()
    );
}
