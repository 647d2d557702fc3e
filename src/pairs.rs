//! Deterministic pairwise combinations and ratio extraction.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Returns the index pairs `(i, j)` with `i <= j` over a sequence of the given length, in
/// row-major order.
///
/// Pairing is by position, never by value, so duplicate entries in the paired sequence each
/// keep their own slot. Desired-ratio and extracted-ratio sequences are index-aligned as
/// long as both are driven by this generator.
///
/// # Examples
///
/// ```
/// # use intonate::pairs::index_pairs;
/// assert_eq!(index_pairs(3), [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
/// assert!(index_pairs(0).is_empty());
/// ```
pub fn index_pairs(len: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(len * (len + 1) / 2);
    for i in 0..len {
        for j in i..len {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Returns `max(f_i, f_j) / min(f_i, f_j)` for every pair of [`index_pairs`] over the given
/// frequencies.
///
/// All returned ratios are >= 1; self-pairs yield exactly 1.
///
/// # Examples
///
/// ```
/// # use intonate::pairs::pairwise_ratios;
/// let ratios = pairwise_ratios(&[440.0, 660.0]).unwrap();
/// assert_eq!(ratios, [1.0, 1.5, 1.0]);
/// assert!(pairwise_ratios(&[440.0, 0.0]).is_err());
/// ```
pub fn pairwise_ratios(frequencies: &[f64]) -> Result<Vec<f64>, NonPositiveFrequency> {
    for (index, &hz) in frequencies.iter().enumerate() {
        if !(hz.is_finite() && hz > 0.0) {
            return Err(NonPositiveFrequency { index, hz });
        }
    }
    Ok(ratios_between(frequencies, &index_pairs(frequencies.len())))
}

/// Ratio extraction without the positivity check, for callers that already guarantee
/// strictly positive inputs (e.g. bound-projected optimizer candidates).
pub(crate) fn ratios_between(frequencies: &[f64], pairs: &[(usize, usize)]) -> Vec<f64> {
    pairs
        .iter()
        .map(|&(i, j)| {
            let (a, b) = (frequencies[i], frequencies[j]);
            if a >= b {
                a / b
            } else {
                b / a
            }
        })
        .collect()
}

/// A frequency was zero, negative or non-finite, so no ratio can be formed with it.
#[derive(Copy, Clone, Debug)]
pub struct NonPositiveFrequency {
    /// Position of the offending frequency in the input vector.
    pub index: usize,
    pub hz: f64,
}

impl Display for NonPositiveFrequency {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "frequency at index {} is not positive: {}", self.index, self.hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_count_is_triangular() {
        for len in 0..6 {
            assert_eq!(index_pairs(len).len(), len * (len + 1) / 2);
        }
    }

    #[test]
    fn pair_order_is_reproducible() {
        assert_eq!(index_pairs(4), index_pairs(4));
    }

    #[test]
    fn duplicate_values_keep_their_own_pair_slots() {
        let ratios = pairwise_ratios(&[440.0, 440.0]).unwrap();
        assert_eq!(ratios, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn ratios_are_direction_agnostic() {
        let ascending = pairwise_ratios(&[440.0, 660.0]).unwrap();
        let descending = pairwise_ratios(&[660.0, 440.0]).unwrap();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn non_positive_frequencies_are_rejected() {
        for bad in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let result = pairwise_ratios(&[440.0, bad]);
            assert!(result.is_err(), "accepted {bad}");
            assert_eq!(result.unwrap_err().index, 1);
        }
    }
}
