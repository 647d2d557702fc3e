//! The supported note-name domain and its nominal equal-tempered frequencies.

use crate::pitch::Pitch;
use crate::pitch::A4_PITCH;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// A validated note spelling, e.g. `c`, `f#`, `bbb` or `g##`.
///
/// Spellings are opaque keys into a fixed table: a token is valid iff it is one of the 35
/// supported spellings (letters `a..g` with up to two sharps or flats). Parsing is
/// case-insensitive; the canonical form is lowercase.
///
/// Enharmonically equivalent spellings are distinct values with distinct interval semantics,
/// e.g. `c`&ndash;`d#` is an augmented second while `c`&ndash;`eb` is a minor third.
///
/// # Examples
///
/// ```
/// # use intonate::note::NoteName;
/// let note: NoteName = "Eb".parse().unwrap();
/// assert_eq!(note.as_str(), "eb");
/// assert!("h".parse::<NoteName>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteName {
    index: u8,
}

struct NoteEntry {
    name: &'static str,
    /// Alphabetical letter index (a=0 .. g=6).
    letter: u8,
    /// Semitones above c, reduced mod 12.
    pitch_class: u8,
    /// Fixed equal-tempered reference frequency.
    hz: f64,
}

const A4_HZ: f64 = A4_PITCH.as_hz();

// Sorted lexicographically by spelling. The frequency column holds fixed 12-EDO values
// anchored at A4_PITCH; the table spans the single octave ab..g# and wraps spellings
// whose pitch falls outside it (abb, bbb, g##).
static NOTES: [NoteEntry; 35] = [
    NoteEntry { name: "a", letter: 0, pitch_class: 9, hz: A4_HZ },
    NoteEntry { name: "a#", letter: 0, pitch_class: 10, hz: 466.16 },
    NoteEntry { name: "a##", letter: 0, pitch_class: 11, hz: 493.88 },
    NoteEntry { name: "ab", letter: 0, pitch_class: 8, hz: 415.30 },
    NoteEntry { name: "abb", letter: 0, pitch_class: 7, hz: 783.99 },
    NoteEntry { name: "b", letter: 1, pitch_class: 11, hz: 493.88 },
    NoteEntry { name: "b#", letter: 1, pitch_class: 0, hz: 523.25 },
    NoteEntry { name: "b##", letter: 1, pitch_class: 1, hz: 554.37 },
    NoteEntry { name: "bb", letter: 1, pitch_class: 10, hz: 466.16 },
    NoteEntry { name: "bbb", letter: 1, pitch_class: 9, hz: A4_HZ },
    NoteEntry { name: "c", letter: 2, pitch_class: 0, hz: 523.25 },
    NoteEntry { name: "c#", letter: 2, pitch_class: 1, hz: 554.37 },
    NoteEntry { name: "c##", letter: 2, pitch_class: 2, hz: 587.33 },
    NoteEntry { name: "cb", letter: 2, pitch_class: 11, hz: 493.88 },
    NoteEntry { name: "cbb", letter: 2, pitch_class: 10, hz: 466.16 },
    NoteEntry { name: "d", letter: 3, pitch_class: 2, hz: 587.33 },
    NoteEntry { name: "d#", letter: 3, pitch_class: 3, hz: 622.25 },
    NoteEntry { name: "d##", letter: 3, pitch_class: 4, hz: 659.25 },
    NoteEntry { name: "db", letter: 3, pitch_class: 1, hz: 554.37 },
    NoteEntry { name: "dbb", letter: 3, pitch_class: 0, hz: 523.25 },
    NoteEntry { name: "e", letter: 4, pitch_class: 4, hz: 659.25 },
    NoteEntry { name: "e#", letter: 4, pitch_class: 5, hz: 698.46 },
    NoteEntry { name: "e##", letter: 4, pitch_class: 6, hz: 739.99 },
    NoteEntry { name: "eb", letter: 4, pitch_class: 3, hz: 622.25 },
    NoteEntry { name: "ebb", letter: 4, pitch_class: 2, hz: 587.33 },
    NoteEntry { name: "f", letter: 5, pitch_class: 5, hz: 698.46 },
    NoteEntry { name: "f#", letter: 5, pitch_class: 6, hz: 739.99 },
    NoteEntry { name: "f##", letter: 5, pitch_class: 7, hz: 783.99 },
    NoteEntry { name: "fb", letter: 5, pitch_class: 4, hz: 659.25 },
    NoteEntry { name: "fbb", letter: 5, pitch_class: 3, hz: 622.25 },
    NoteEntry { name: "g", letter: 6, pitch_class: 7, hz: 783.99 },
    NoteEntry { name: "g#", letter: 6, pitch_class: 8, hz: 830.61 },
    NoteEntry { name: "g##", letter: 6, pitch_class: 9, hz: A4_HZ },
    NoteEntry { name: "gb", letter: 6, pitch_class: 6, hz: 739.99 },
    NoteEntry { name: "gbb", letter: 6, pitch_class: 5, hz: 698.46 },
];

impl NoteName {
    /// Returns all supported spellings in canonical (lexicographic) order.
    pub fn all() -> impl Iterator<Item = NoteName> {
        (0..NOTES.len()).map(|index| NoteName { index: index as u8 })
    }

    pub fn as_str(self) -> &'static str {
        self.entry().name
    }

    /// Returns the fixed equal-tempered reference frequency of this spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use intonate::note::NoteName;
    /// let a: NoteName = "a".parse().unwrap();
    /// assert_approx_eq!(a.nominal_pitch().as_hz(), 440.0);
    /// ```
    pub fn nominal_pitch(self) -> Pitch {
        Pitch::from_hz(self.entry().hz)
    }

    pub(crate) fn letter_index(self) -> u8 {
        self.entry().letter
    }

    pub(crate) fn pitch_class(self) -> u8 {
        self.entry().pitch_class
    }

    fn entry(self) -> &'static NoteEntry {
        &NOTES[usize::from(self.index)]
    }
}

impl FromStr for NoteName {
    type Err = InvalidNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.to_ascii_lowercase();
        NOTES
            .iter()
            .position(|entry| entry.name == canonical)
            .map(|index| NoteName { index: index as u8 })
            .ok_or_else(|| InvalidNoteError {
                tokens: vec![s.to_owned()],
            })
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One or more input tokens are not in the supported note-name domain.
#[derive(Clone, Debug)]
pub struct InvalidNoteError {
    /// The offending tokens, in input order.
    pub tokens: Vec<String>,
}

impl Display for InvalidNoteError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "invalid note name(s): {}", self.tokens.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn domain_has_35_spellings() {
        assert_eq!(NoteName::all().count(), 35);
    }

    #[test]
    fn table_is_sorted_by_spelling() {
        let names: Vec<_> = NoteName::all().map(NoteName::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        for (token, expected) in [("C", "c"), ("Bb", "bb"), ("F##", "f##"), ("gB", "gb")] {
            assert_eq!(token.parse::<NoteName>().unwrap().as_str(), expected);
        }
    }

    #[test]
    fn unsupported_tokens_are_rejected() {
        for token in ["h", "c###", "cbbb", "#", "", "c b"] {
            assert!(token.parse::<NoteName>().is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn nominal_frequencies_are_anchored_at_a440() {
        for (name, hz) in [
            ("c", 523.25),
            ("e", 659.25),
            ("g", 783.99),
            ("ab", 415.30),
            ("g#", 830.61),
            ("bbb", 440.0),
        ] {
            let note: NoteName = name.parse().unwrap();
            assert_approx_eq!(note.nominal_pitch().as_hz(), hz);
        }
    }

    #[test]
    fn a_sounds_at_concert_pitch() {
        let a: NoteName = "a".parse().unwrap();
        assert_eq!(a.nominal_pitch(), A4_PITCH);
    }

    #[test]
    fn enharmonic_spellings_share_a_frequency() {
        let pairs = [("c#", "db"), ("d#", "eb"), ("f#", "gb"), ("a##", "b")];
        for (sharp, flat) in pairs {
            let sharp: NoteName = sharp.parse().unwrap();
            let flat: NoteName = flat.parse().unwrap();
            assert_eq!(sharp.nominal_pitch(), flat.nominal_pitch());
        }
    }
}
