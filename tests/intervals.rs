//! Systematic interval sweeps over the supported note domain.

use intonate::tuner::{tune, Tuning, MIN_FREQUENCY_HZ};

const SINGLE_ACCIDENTAL_SPELLINGS: [&str; 21] = [
    "a", "a#", "ab", "b", "b#", "bb", "c", "c#", "cb", "d", "d#", "db", "e", "e#", "eb", "f",
    "f#", "fb", "g", "g#", "gb",
];

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

fn assert_two_note_tuning_improves(first: &str, second: &str) {
    let tuning = tune(&[first, second]).unwrap_or_else(|e| panic!("[{first}, {second}]: {e}"));
    assert_each_pair_improved(&tuning);
    for pitch in &tuning.optimized {
        assert!(pitch.as_hz() >= MIN_FREQUENCY_HZ, "[{first}, {second}]");
        assert!(pitch.as_hz().is_finite(), "[{first}, {second}]");
    }
}

#[test]
fn every_interval_from_c() {
    // Unison through augmented octave, including every enharmonic neighbor.
    let companions = [
        "c", "c#", "dbb", "db", "d", "d#", "ebb", "eb", "e", "e#", "fb", "f", "f#", "gb", "g",
        "g#", "abb", "ab", "a", "a#", "bbb", "bb", "b", "b#", "cb",
    ];
    for companion in companions {
        assert_two_note_tuning_improves("c", companion);
    }
}

#[test]
fn every_interval_from_d() {
    let companions = [
        "d", "d#", "ebb", "eb", "e", "e#", "fb", "f", "f#", "f##", "gb", "g", "g#", "ab", "a",
        "a#", "bbb", "bb", "b", "b#", "cb", "c", "c#", "c##", "db",
    ];
    for companion in companions {
        assert_two_note_tuning_improves("d", companion);
    }
}

#[test]
fn every_pair_of_single_accidental_spellings() {
    for first in SINGLE_ACCIDENTAL_SPELLINGS {
        for second in SINGLE_ACCIDENTAL_SPELLINGS {
            assert_two_note_tuning_improves(first, second);
        }
    }
}

#[test]
fn tuning_is_reproducible() {
    let first = tune(&["c", "e", "g"]).unwrap();
    let second = tune(&["c", "e", "g"]).unwrap();
    assert_eq!(first.pairs, second.pairs);
    assert_eq!(first.desired_ratios, second.desired_ratios);
    assert_eq!(first.initial, second.initial);
    assert_eq!(first.optimized, second.optimized);
}
