use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::params::ValueRange;
use crate::sampling::{ascending_node, circular_angle, uniform, uniform_range};

#[test]
fn uniform_stays_within_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..1000 {
        let value = uniform(&mut rng, 2.5, 7.5);
        assert!(value >= 2.5, "value {} should be >= 2.5", value);
        assert!(value < 7.5, "value {} should be < 7.5", value);
    }
}

#[test]
fn uniform_covers_the_interval() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples: Vec<f64> = (0..1000).map(|_| uniform(&mut rng, 0.0, 1.0)).collect();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!(
        (mean - 0.5).abs() < 0.05,
        "mean {} should be close to 0.5",
        mean
    );
}

#[test]
fn degenerate_range_always_returns_min() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..100 {
        assert_eq!(uniform_range(&mut rng, ValueRange::new(3.0, 3.0)), 3.0);
    }
}

#[test]
fn circular_angle_spans_a_full_turn() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..1000 {
        let angle = circular_angle(&mut rng);
        assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
    }
}

#[test]
fn zero_inclination_forces_zero_node() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..100 {
        assert_eq!(ascending_node(&mut rng, 0.0), 0.0);
    }
}

#[test]
fn inclined_orbits_sample_the_node() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut nonzero = 0;
    for _ in 0..100 {
        let node = ascending_node(&mut rng, 15.0);
        assert!((0.0..360.0).contains(&node), "node {} out of range", node);
        if node > 0.0 {
            nonzero += 1;
        }
    }
    assert!(nonzero > 90, "sampled nodes should almost never be zero");
}
