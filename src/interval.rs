//! Canonical naming of the harmonic distance between two note spellings.

use crate::note::NoteName;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The quality part of an interval label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quality {
    TripleDiminished,
    DoubleDiminished,
    Diminished,
    Minor,
    Perfect,
    Major,
    Augmented,
    DoubleAugmented,
    TripleAugmented,
}

impl Quality {
    fn symbol(self) -> &'static str {
        match self {
            Quality::TripleDiminished => "ddd",
            Quality::DoubleDiminished => "dd",
            Quality::Diminished => "d",
            Quality::Minor => "m",
            Quality::Perfect => "P",
            Quality::Major => "M",
            Quality::Augmented => "A",
            Quality::DoubleAugmented => "AA",
            Quality::TripleAugmented => "AAA",
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// An interval label of the form `<quality><degree>`, e.g. `P5`, `m3` or `AA1`.
///
/// Labels are derived from ordered pairs of note spellings via [`Interval::between`]. The
/// degree follows the letter distance, the quality follows the semitone distance, so
/// enharmonically equal pairs can carry different labels (`c`&ndash;`d#` is `A2`,
/// `c`&ndash;`eb` is `m3`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    quality: Quality,
    degree: u8,
}

/// Semitones of the perfect/major interval per degree (index 0 unused).
const BASE_SEMITONES: [i32; 9] = [0, 0, 2, 4, 5, 7, 9, 11, 12];

impl Interval {
    pub const UNISON: Interval = Interval {
        quality: Quality::Perfect,
        degree: 1,
    };

    /// Creates an interval label.
    ///
    /// # Panics
    ///
    /// Panics if the degree is outside `1..=8` or the quality does not apply to the degree
    /// (degrees 1, 4, 5 and 8 are perfect, degrees 2, 3, 6 and 7 are major/minor).
    pub fn new(quality: Quality, degree: u8) -> Self {
        assert!(
            (1..=8).contains(&degree),
            "Interval degree must be in 1..=8 but was {}",
            degree
        );
        let perfect_degree = matches!(degree, 1 | 4 | 5 | 8);
        let perfect_quality = !matches!(quality, Quality::Minor | Quality::Major);
        assert!(
            if perfect_degree { perfect_quality } else { quality != Quality::Perfect },
            "Quality {} does not apply to degree {}",
            quality,
            degree
        );
        Self { quality, degree }
    }

    /// Returns the interval label from the first note *up to* the second, octave-reduced.
    ///
    /// The lookup direction is exactly the order in which the pair is supplied; no
    /// normalization is attempted. Pairs whose spelling distance exceeds a triple
    /// augmentation/diminution carry no label and fail.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intonate::interval::Interval;
    /// # use intonate::note::NoteName;
    /// let note = |s: &str| s.parse::<NoteName>().unwrap();
    /// assert_eq!(Interval::between(note("c"), note("e")).unwrap().to_string(), "M3");
    /// assert_eq!(Interval::between(note("c"), note("g")).unwrap().to_string(), "P5");
    /// assert_eq!(Interval::between(note("b"), note("c")).unwrap().to_string(), "m2");
    /// assert_eq!(Interval::between(note("c"), note("cb")).unwrap().to_string(), "d8");
    /// assert!(Interval::between(note("gbb"), note("g##")).is_err());
    /// ```
    pub fn between(from: NoteName, to: NoteName) -> Result<Interval, UnknownIntervalError> {
        let steps = (7 + to.letter_index() - from.letter_index()) % 7;
        let semitones = i32::from((12 + to.pitch_class() - from.pitch_class()) % 12);

        // A zero letter distance is a unison for small semitone distances and an
        // octave-reduced octave otherwise (c-cb is a diminished octave, not a negative
        // unison).
        let degree = match steps {
            0 if semitones <= 6 => 1,
            0 => 8,
            _ => steps + 1,
        };

        let mut offset = semitones - BASE_SEMITONES[usize::from(degree)];
        if offset > 6 {
            offset -= 12;
        } else if offset < -6 {
            offset += 12;
        }

        let quality = match (matches!(degree, 1 | 4 | 5 | 8), offset) {
            (true, -3) | (false, -4) => Some(Quality::TripleDiminished),
            (true, -2) | (false, -3) => Some(Quality::DoubleDiminished),
            (true, -1) | (false, -2) => Some(Quality::Diminished),
            (false, -1) => Some(Quality::Minor),
            (true, 0) => Some(Quality::Perfect),
            (false, 0) => Some(Quality::Major),
            (_, 1) => Some(Quality::Augmented),
            (_, 2) => Some(Quality::DoubleAugmented),
            (_, 3) => Some(Quality::TripleAugmented),
            _ => None,
        };

        quality
            .map(|quality| Interval { quality, degree })
            .ok_or(UnknownIntervalError { from, to })
    }

    pub fn quality(self) -> Quality {
        self.quality
    }

    pub fn degree(self) -> u8 {
        self.degree
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.quality, self.degree))
    }
}

/// The given pair of note spellings carries no supported interval label.
#[derive(Copy, Clone, Debug)]
pub struct UnknownIntervalError {
    pub from: NoteName,
    pub to: NoteName,
}

impl Display for UnknownIntervalError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "no interval is defined from {} to {}", self.from, self.to)
    }
}
