//! Retunes a group of concurrently sounding notes so their pairwise frequency ratios
//! approach just intonation.
//!
//! Only the supplied notes are constrained; nothing outside the group is retuned, hence
//! the optimization happens "in place". The equal-tempered nominal frequencies serve as
//! the starting point, and the desired ratios are inferred from the interval spelled
//! between each pair of notes.

use crate::interval::Interval;
use crate::interval::UnknownIntervalError;
use crate::just::MissingRatioError;
use crate::just::TuningSystem;
use crate::note::InvalidNoteError;
use crate::note::NoteName;
use crate::optimize::Bound;
use crate::optimize::MinimizeError;
use crate::optimize::Minimizer;
use crate::optimize::NelderMeadMinimizer;
use crate::pairs;
use crate::pairs::NonPositiveFrequency;
use crate::pitch::Pitch;
use crate::ratio::Ratio;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Frequencies are never pushed below this bound during optimization.
pub const MIN_FREQUENCY_HZ: f64 = 1.0;

/// The result of retuning a note group.
///
/// All ratio sequences are index-aligned with [`Tuning::pairs`]; the frequency vectors are
/// index-aligned with [`Tuning::notes`].
#[derive(Clone, Debug)]
pub struct Tuning {
    /// The validated input notes in the order the ratios refer to (sorted by spelling).
    pub notes: Vec<NoteName>,
    /// The index pairs the ratio sequences are built over.
    pub pairs: Vec<(usize, usize)>,
    /// Frequencies after optimization.
    pub optimized: Vec<Pitch>,
    /// Equal-tempered starting frequencies.
    pub initial: Vec<Pitch>,
    /// Pairwise ratios of the optimized frequencies.
    pub optimized_ratios: Vec<Ratio>,
    /// Just-intonation target ratios. Always >= 1, matching the `max/min` convention the
    /// pairwise ratios are extracted with; sub-unity table entries enter reciprocally.
    pub desired_ratios: Vec<Ratio>,
    /// Pairwise ratios of the starting frequencies.
    pub initial_ratios: Vec<Ratio>,
    /// Final objective value (Euclidean distance between optimized and desired ratios).
    pub cost: f64,
    /// Whether the minimizer reported convergence. Best-effort results are returned either
    /// way; inspect [`Tuning::cost`] to judge quality.
    pub converged: bool,
}

/// Retunes the given notes using the canonical ratio table and the bundled minimizer.
///
/// # Examples
///
/// ```
/// # use intonate::tuner::tune;
/// let tuning = tune(&["c", "e", "g"]).unwrap();
///
/// // Pairs are (c, c), (c, e), (c, g), (e, e), (e, g), (g, g).
/// assert_eq!(tuning.desired_ratios[1].as_float(), 1.25); // major third
/// assert_eq!(tuning.desired_ratios[2].as_float(), 1.5); // perfect fifth
/// assert_eq!(tuning.desired_ratios[4].as_float(), 1.2); // minor third
///
/// let fifth = tuning.desired_ratios[2];
/// let optimized = tuning.optimized_ratios[2].distance_to(fifth);
/// let initial = tuning.initial_ratios[2].distance_to(fifth);
/// assert!(optimized <= initial);
/// ```
pub fn tune(notes: &[&str]) -> Result<Tuning, TuneError> {
    tune_with(notes, TuningSystem::default(), &NelderMeadMinimizer::default())
}

/// Retunes the given notes with an explicit table variant and minimizer.
pub fn tune_with(
    notes: &[&str],
    system: TuningSystem,
    minimizer: &dyn Minimizer,
) -> Result<Tuning, TuneError> {
    let notes = validated(notes)?;
    let pair_sequence = pairs::index_pairs(notes.len());

    let desired: Vec<f64> = pair_sequence
        .iter()
        .map(|&(i, j)| {
            let interval = Interval::between(notes[i], notes[j])?;
            let ratio = system.ratio(interval)?.as_float();
            // The extractor never yields a ratio below 1, so the handful of sub-unity
            // targets (doubly/triply diminished seconds) flip to their reciprocal.
            Ok(if ratio < 1.0 { ratio.recip() } else { ratio })
        })
        .collect::<Result<_, TuneError>>()?;

    let initial: Vec<f64> = notes
        .iter()
        .map(|note| note.nominal_pitch().as_hz())
        .collect();
    let initial_ratios = pairs::pairwise_ratios(&initial)?;

    let objective = |candidate: &[f64]| {
        pairs::ratios_between(candidate, &pair_sequence)
            .iter()
            .zip(&desired)
            .map(|(ratio, target)| (ratio - target).powi(2))
            .sum::<f64>()
            .sqrt()
    };

    let bounds = vec![Bound::at_least(MIN_FREQUENCY_HZ); initial.len()];
    let minimum = minimizer.minimize(&objective, &initial, &bounds)?;
    let optimized_ratios = pairs::pairwise_ratios(&minimum.solution)?;

    Ok(Tuning {
        optimized: minimum.solution.iter().map(|&hz| Pitch::from_hz(hz)).collect(),
        initial: initial.iter().map(|&hz| Pitch::from_hz(hz)).collect(),
        optimized_ratios: optimized_ratios.iter().map(|&r| Ratio::from_float(r)).collect(),
        desired_ratios: desired.iter().map(|&r| Ratio::from_float(r)).collect(),
        initial_ratios: initial_ratios.iter().map(|&r| Ratio::from_float(r)).collect(),
        cost: minimum.cost,
        converged: minimum.converged,
        pairs: pair_sequence,
        notes,
    })
}

/// Canonicalizes and validates all tokens, reporting every offending token at once, then
/// sorts the notes by spelling (the order the pair semantics are defined over).
fn validated(notes: &[&str]) -> Result<Vec<NoteName>, TuneError> {
    if notes.is_empty() {
        return Err(TuneError::NoNotes);
    }

    let mut valid = Vec::with_capacity(notes.len());
    let mut invalid = Vec::new();
    for &token in notes {
        match token.parse::<NoteName>() {
            Ok(note) => valid.push(note),
            Err(_) => invalid.push(token.to_owned()),
        }
    }
    if !invalid.is_empty() {
        return Err(TuneError::InvalidNotes(InvalidNoteError { tokens: invalid }));
    }

    valid.sort_unstable();
    Ok(valid)
}

/// Retuning failed.
#[derive(Clone, Debug)]
pub enum TuneError {
    /// The input note list was empty.
    NoNotes,
    /// One or more input tokens are outside the supported note-name domain.
    InvalidNotes(InvalidNoteError),
    /// A note pair carries no interval label. Unreachable for inputs the interval naming
    /// scheme covers; indicates a table-consistency violation otherwise.
    UnknownInterval(UnknownIntervalError),
    /// An interval label has no ratio in the selected table variant.
    MissingRatio(MissingRatioError),
    /// A non-positive frequency was encountered during ratio extraction.
    NonPositiveFrequency(NonPositiveFrequency),
    /// The minimizer aborted abnormally.
    Minimizer(MinimizeError),
}

impl From<InvalidNoteError> for TuneError {
    fn from(v: InvalidNoteError) -> Self {
        TuneError::InvalidNotes(v)
    }
}

impl From<UnknownIntervalError> for TuneError {
    fn from(v: UnknownIntervalError) -> Self {
        TuneError::UnknownInterval(v)
    }
}

impl From<MissingRatioError> for TuneError {
    fn from(v: MissingRatioError) -> Self {
        TuneError::MissingRatio(v)
    }
}

impl From<NonPositiveFrequency> for TuneError {
    fn from(v: NonPositiveFrequency) -> Self {
        TuneError::NonPositiveFrequency(v)
    }
}

impl From<MinimizeError> for TuneError {
    fn from(v: MinimizeError) -> Self {
        TuneError::Minimizer(v)
    }
}

impl Display for TuneError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TuneError::NoNotes => write!(f, "at least one note is required"),
            TuneError::InvalidNotes(e) => e.fmt(f),
            TuneError::UnknownInterval(e) => e.fmt(f),
            TuneError::MissingRatio(e) => e.fmt(f),
            TuneError::NonPositiveFrequency(e) => e.fmt(f),
            TuneError::Minimizer(e) => e.fmt(f),
        }
    }
}
