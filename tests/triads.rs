//! Scenario tests for common triads and seventh chords.

use intonate::tuner::{tune, Tuning};

/// Every pairwise ratio must end up at least as close to its just-intonation target as the
/// equal-tempered starting ratio was.
fn assert_each_pair_improved(tuning: &Tuning) {
    for index in 0..tuning.pairs.len() {
        let desired = tuning.desired_ratios[index];
        let optimized = tuning.optimized_ratios[index];
        let initial = tuning.initial_ratios[index];
        assert!(
            optimized.distance_to(desired) <= initial.distance_to(desired),
            "pair {:?}: desired {desired}, optimized {optimized}, initial {initial}",
            tuning.pairs[index],
        );
    }
}

/// Euclidean distance between the initial ratios and the targets, i.e. the objective value
/// at the starting point.
fn initial_cost(tuning: &Tuning) -> f64 {
    tuning
        .initial_ratios
        .iter()
        .zip(&tuning.desired_ratios)
        .map(|(initial, desired)| (initial.as_float() - desired.as_float()).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[test]
fn c_major() {
    let tuning = tune(&["c", "e", "g"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn c_major_7() {
    let tuning = tune(&["c", "e", "g", "b"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn d_minor() {
    let tuning = tune(&["d", "f", "a"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn e_minor() {
    let tuning = tune(&["e", "g", "b"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn f_major() {
    let tuning = tune(&["f", "a", "c"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn g_major() {
    let tuning = tune(&["g", "b", "d"]).unwrap();
    assert_each_pair_improved(&tuning);
}

#[test]
fn a_minor() {
    let tuning = tune(&["a", "c", "e"]).unwrap();
    assert_each_pair_improved(&tuning);
}

// The diminished triad and the minor seventh chord carry a syntonic comma: their desired
// ratios cannot all be met at once, so the optimizer settles on a compromise. The overall
// distance to the targets must still shrink.

#[test]
fn b_diminished() {
    let tuning = tune(&["b", "d", "f"]).unwrap();
    assert!(tuning.cost < initial_cost(&tuning));
}

#[test]
fn d_minor_7() {
    let tuning = tune(&["d", "f", "a", "c"]).unwrap();
    assert!(tuning.cost < initial_cost(&tuning));
}

#[test]
fn c_major_desired_ratios() {
    let tuning = tune(&["c", "e", "g"]).unwrap();
    let desired: Vec<f64> = tuning.desired_ratios.iter().map(|r| r.as_float()).collect();
    // Pairs: (c, c), (c, e), (c, g), (e, e), (e, g), (g, g).
    assert_eq!(desired, [1.0, 1.25, 1.5, 1.0, 1.2, 1.0]);
}
