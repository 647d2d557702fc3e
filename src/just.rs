//! Versioned just-intonation ratio tables.

use crate::interval::Interval;
use crate::interval::Quality;
use crate::ratio::Ratio;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Selects which interval-ratio table variant is in effect.
///
/// Published ratio tables for this repertoire diverge in which of the rarer labels they
/// include. Pinning the variant behind an enum keeps the mapping versioned instead of
/// letting table copies drift apart silently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TuningSystem {
    /// The canonical 5-limit table, total over every label the interval naming scheme can
    /// produce. Double and triple augmentations/diminutions extend the single-step entries
    /// by the chromatic step 25/24.
    #[default]
    FiveLimit,
    /// The historical table restricted to the labels of the diatonic-plus-single-accidental
    /// repertoire. Rarer labels (d6, A6, d7, A7 and all double/triple qualities) have no
    /// entry and fail with [`MissingRatioError`].
    Diatonic,
}

impl TuningSystem {
    /// Returns the exact just-intonation ratio of the given interval label.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intonate::interval::Interval;
    /// # use intonate::just::TuningSystem;
    /// # use intonate::note::NoteName;
    /// let c: NoteName = "c".parse().unwrap();
    /// let g: NoteName = "g".parse().unwrap();
    /// let fifth = Interval::between(c, g).unwrap();
    /// assert_eq!(TuningSystem::FiveLimit.ratio(fifth).unwrap().as_float(), 1.5);
    /// ```
    pub fn ratio(self, interval: Interval) -> Result<Ratio, MissingRatioError> {
        let fraction = match self {
            TuningSystem::FiveLimit => five_limit(interval),
            TuningSystem::Diatonic => diatonic(interval),
        };
        fraction
            .map(|(numer, denom)| Ratio::from_fraction(numer, denom))
            .ok_or(MissingRatioError { interval })
    }
}

/// The canonical table. Single-step entries are the classical 5-limit ratios; each further
/// augmentation multiplies by 25/24, each further diminution by 24/25. The lone asymmetry
/// is the classical tritone pair A4 = 45/32 vs d5 = 25/18.
fn five_limit(interval: Interval) -> Option<(u32, u32)> {
    use Quality::*;

    Some(match (interval.quality(), interval.degree()) {
        (TripleDiminished, 1) => (13824, 15625),
        (DoubleDiminished, 1) => (576, 625),
        (Diminished, 1) => (24, 25),
        (Perfect, 1) => (1, 1),
        (Augmented, 1) => (25, 24),
        (DoubleAugmented, 1) => (625, 576),
        (TripleAugmented, 1) => (15625, 13824),

        (TripleDiminished, 2) => (73728, 78125),
        (DoubleDiminished, 2) => (3072, 3125),
        (Diminished, 2) => (128, 125),
        (Minor, 2) => (16, 15),
        (Major, 2) => (9, 8),
        (Augmented, 2) => (75, 64),
        (DoubleAugmented, 2) => (625, 512),
        (TripleAugmented, 2) => (15625, 12288),

        (TripleDiminished, 3) => (82944, 78125),
        (DoubleDiminished, 3) => (3456, 3125),
        (Diminished, 3) => (144, 125),
        (Minor, 3) => (6, 5),
        (Major, 3) => (5, 4),
        (Augmented, 3) => (125, 96),
        (DoubleAugmented, 3) => (3125, 2304),
        (TripleAugmented, 3) => (78125, 55296),

        (TripleDiminished, 4) => (18432, 15625),
        (DoubleDiminished, 4) => (768, 625),
        (Diminished, 4) => (32, 25),
        (Perfect, 4) => (4, 3),
        (Augmented, 4) => (45, 32),
        (DoubleAugmented, 4) => (375, 256),
        (TripleAugmented, 4) => (3125, 2048),

        (TripleDiminished, 5) => (32, 25),
        (DoubleDiminished, 5) => (4, 3),
        (Diminished, 5) => (25, 18),
        (Perfect, 5) => (3, 2),
        (Augmented, 5) => (25, 16),
        (DoubleAugmented, 5) => (625, 384),
        (TripleAugmented, 5) => (15625, 9216),

        (TripleDiminished, 6) => (110592, 78125),
        (DoubleDiminished, 6) => (4608, 3125),
        (Diminished, 6) => (192, 125),
        (Minor, 6) => (8, 5),
        (Major, 6) => (5, 3),
        (Augmented, 6) => (125, 72),
        (DoubleAugmented, 6) => (3125, 1728),
        (TripleAugmented, 6) => (78125, 41472),

        (TripleDiminished, 7) => (24576, 15625),
        (DoubleDiminished, 7) => (1024, 625),
        (Diminished, 7) => (128, 75),
        (Minor, 7) => (16, 9),
        (Major, 7) => (15, 8),
        (Augmented, 7) => (125, 64),
        (DoubleAugmented, 7) => (3125, 1536),
        (TripleAugmented, 7) => (78125, 36864),

        (TripleDiminished, 8) => (27648, 15625),
        (DoubleDiminished, 8) => (1152, 625),
        (Diminished, 8) => (48, 25),
        (Perfect, 8) => (2, 1),
        (Augmented, 8) => (25, 12),
        (DoubleAugmented, 8) => (625, 288),
        (TripleAugmented, 8) => (15625, 6912),

        _ => return None,
    })
}

/// The historical table: P1, A1, d2, m2, M2, A2, d3, m3, M3, A3, d4, P4, A4, d5,
/// P5, A5, m6, M6, m7, M7, d8 and P8 only. Values agree with the canonical table on the
/// labels both define.
fn diatonic(interval: Interval) -> Option<(u32, u32)> {
    use Quality::*;

    let published = match (interval.quality(), interval.degree()) {
        (Perfect, _) => true,
        (Augmented, 1..=5) => true,
        (Minor | Major, _) => true,
        (Diminished, 2..=5 | 8) => true,
        _ => false,
    };
    if published {
        five_limit(interval)
    } else {
        None
    }
}

/// The interval label has no entry in the selected table variant.
///
/// With [`TuningSystem::FiveLimit`] this is unreachable for any label the interval naming
/// scheme produces; triggering it indicates an inconsistently constructed table variant,
/// not bad user input.
#[derive(Copy, Clone, Debug)]
pub struct MissingRatioError {
    pub interval: Interval,
}

impl Display for MissingRatioError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "no ratio is defined for interval {}", self.interval)
    }
}
