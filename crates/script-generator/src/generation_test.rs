use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use celestial::{DistanceUnit, ObjectType, J2000_EPOCH};

use crate::generation::{
    generate_comets, generate_generic_objects, generate_regular_moons, GenerationError,
    PLACEHOLDER_NAME,
};
use crate::params::{
    CometParams, CommonParams, GenericObjectParams, MoonSpec, RegularMoonParams, ValueRange,
};

fn common(parent: &str) -> CommonParams {
    CommonParams {
        parent_body: parent.to_string(),
        distance_unit: DistanceUnit::Km,
        reference_plane: "Equator".to_string(),
        output_file: "out.sc".into(),
    }
}

fn moon_params(parent: &str) -> RegularMoonParams {
    RegularMoonParams {
        common: common(parent),
        moons: vec![
            MoonSpec {
                name: "Io".to_string(),
                radius: 1821.6,
                distance: 421800.0,
                classification: "Terra".to_string(),
            },
            MoonSpec {
                name: "Europa".to_string(),
                radius: 1560.8,
                distance: 671100.0,
                classification: "Aquaria".to_string(),
            },
        ],
        eccentricity: ValueRange::new(0.0, 0.01),
        inclination: ValueRange::new(0.5, 2.0),
        bond_albedo: ValueRange::new(0.3, 0.4),
    }
}

#[test]
fn moons_keep_caller_supplied_literals() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let moons = generate_regular_moons(&mut rng, &moon_params("Jupiter")).unwrap();

    assert_eq!(moons.len(), 2);
    assert_eq!(moons[0].name, "Io");
    assert_eq!(moons[1].name, "Europa");
    for moon in &moons {
        assert_eq!(moon.object_type, ObjectType::Moon);
        assert_eq!(moon.parent_body, "Jupiter");
        assert!(!moon.satellite);
    }
    assert_eq!(moons[0].classification.as_deref(), Some("Terra"));
    assert_eq!(moons[0].physical.unwrap().radius, 1821.6);
    assert_eq!(moons[0].orbit.unwrap().semi_major_axis, 421800.0);
}

#[test]
fn moon_samples_respect_caller_ranges() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let params = moon_params("Jupiter");

    for _ in 0..100 {
        for moon in generate_regular_moons(&mut rng, &params).unwrap() {
            let orbit = moon.orbit.unwrap();
            assert_eq!(orbit.epoch, J2000_EPOCH);
            assert!((0.0..=0.01).contains(&orbit.eccentricity));
            assert!((0.5..=2.0).contains(&orbit.inclination));
            assert!((0.0..360.0).contains(&orbit.ascending_node));
            assert!((0.0..360.0).contains(&orbit.arg_of_pericenter));
            assert!((0.0..360.0).contains(&orbit.mean_anomaly));

            let physical = moon.physical.unwrap();
            assert!((0.3..=0.4).contains(&physical.albedo_bond));
            let offset = physical.albedo_geom - physical.albedo_bond;
            assert!((offset - 0.04).abs() < 1e-12);
        }
    }
}

#[test]
fn flat_moon_orbits_have_zero_ascending_node() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut params = moon_params("Jupiter");
    params.inclination = ValueRange::new(0.0, 0.0);

    for moon in generate_regular_moons(&mut rng, &params).unwrap() {
        let orbit = moon.orbit.unwrap();
        assert_eq!(orbit.inclination, 0.0);
        assert_eq!(orbit.ascending_node, 0.0);
    }
}

#[test]
fn generic_objects_are_placeholder_named_and_in_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let params = GenericObjectParams {
        common: common("Io"),
        object_type: ObjectType::Asteroid,
        axis: ValueRange::new(1000.0, 9000.0),
        eccentricity: ValueRange::new(0.0, 0.3),
        inclination: ValueRange::new(0.1, 25.0),
        count: 200,
        start_number: 1,
    };

    let objects = generate_generic_objects(&mut rng, &params).unwrap();
    assert_eq!(objects.len(), 200);

    for object in &objects {
        assert_eq!(object.object_type, ObjectType::Asteroid);
        assert_eq!(object.name, PLACEHOLDER_NAME);
        assert_eq!(object.parent_body, "Io");

        let orbit = object.orbit.unwrap();
        assert!((1000.0..=9000.0).contains(&orbit.semi_major_axis));
        assert!((0.0..=0.3).contains(&orbit.eccentricity));
        assert!((0.1..=25.0).contains(&orbit.inclination));
        assert!((0.0..360.0).contains(&orbit.ascending_node));

        let physical = object.physical.unwrap();
        assert!((0.1..=60.0).contains(&physical.radius));
        assert!((0.07..=0.09).contains(&physical.albedo_bond));
        let offset = physical.albedo_geom - physical.albedo_bond;
        assert!((offset - 0.05).abs() < 1e-12);
    }
}

#[test]
fn comet_batch_size_follows_the_grouping_rule() {
    // With count = 100 the grouping fraction in [0.10, 0.20) yields 10-19
    // groups, so the batch totals 100 + 2 * groups objects.
    for seed in 0..20 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let params = CometParams {
            common: common("Sol"),
            axis: ValueRange::new(20.0, 50.0),
            count: 100,
            starting_from: 1,
        };

        let objects = generate_comets(&mut rng, &params).unwrap();
        let barycenters = objects
            .iter()
            .filter(|o| o.object_type == ObjectType::Barycenter)
            .count();
        let pair_members = objects.iter().filter(|o| o.satellite).count();

        assert!(
            (10..=19).contains(&barycenters),
            "expected 10-19 groups, got {}",
            barycenters
        );
        assert_eq!(pair_members, 2 * barycenters);
        assert_eq!(objects.len(), 100 + 2 * barycenters);
    }
}

#[test]
fn comet_pairs_share_their_barycenter_orbit() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let params = CometParams {
        common: common("Sol"),
        axis: ValueRange::new(20.0, 50.0),
        count: 40,
        starting_from: 1,
    };

    let objects = generate_comets(&mut rng, &params).unwrap();
    let mut i = 0;
    while i < objects.len() {
        if objects[i].object_type != ObjectType::Barycenter {
            i += 1;
            continue;
        }

        let bary = objects[i].orbit.unwrap();
        let a = objects[i + 1].orbit.unwrap();
        let b = objects[i + 2].orbit.unwrap();
        assert!(objects[i + 1].satellite && objects[i + 2].satellite);

        for member in [a, b] {
            assert_eq!(member.semi_major_axis, bary.semi_major_axis);
            assert_eq!(member.eccentricity, bary.eccentricity);
            assert_eq!(member.inclination, bary.inclination);
            assert_eq!(member.ascending_node, bary.ascending_node);
            assert_eq!(member.mean_anomaly, bary.mean_anomaly);
        }

        // Pericenter arguments differ by 15-25 degrees (mod 360)
        let separation = (b.arg_of_pericenter - a.arg_of_pericenter).rem_euclid(360.0);
        assert!(
            (15.0..25.0).contains(&separation),
            "pair separation {} out of range",
            separation
        );

        i += 3;
    }
}

#[test]
fn comets_carry_only_a_radius() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let params = CometParams {
        common: common("Sol"),
        axis: ValueRange::new(20.0, 50.0),
        count: 30,
        starting_from: 1,
    };

    for object in generate_comets(&mut rng, &params).unwrap() {
        match object.object_type {
            ObjectType::Barycenter => assert!(object.physical.is_none()),
            ObjectType::Comet => {
                assert_eq!(object.classification.as_deref(), Some("Asteroid"));
                let physical = object.physical.unwrap();
                assert!((0.1..=30.0).contains(&physical.radius));
                assert_eq!(physical.mass, 0.0);
                assert_eq!(physical.albedo_bond, 0.0);
                assert_eq!(physical.rotation_period, 0.0);
            }
            other => panic!("unexpected object type {:?} in comet batch", other),
        }
    }
}

#[test]
fn blank_parent_body_is_rejected_before_sampling() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let moons = generate_regular_moons(&mut rng, &moon_params("  "));
    assert_eq!(moons.unwrap_err(), GenerationError::MissingParentBody);

    let comets = generate_comets(
        &mut rng,
        &CometParams {
            common: common(""),
            axis: ValueRange::new(1.0, 2.0),
            count: 10,
            starting_from: 1,
        },
    );
    assert_eq!(comets.unwrap_err(), GenerationError::MissingParentBody);
}
