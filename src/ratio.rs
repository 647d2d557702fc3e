//! Linear and logarithmic views on frequency ratios.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Struct representing the relative distance between two pitches.
///
/// Mathematically, this distance is the factor between the two pitches in linear frequency
/// space. Logarithmic accessors (`cents`) are provided for display and comparison purposes.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use intonate::ratio::Ratio;
/// assert_approx_eq!(Ratio::from_float(1.5).as_cents(), 701.955);
/// assert_approx_eq!(Ratio::from_fraction(3, 2).as_float(), 1.5);
/// ```
///
/// # Panics
///
/// Panics if the linear value is not a finite positive number.
///
/// ```should_panic
/// # use intonate::ratio::Ratio;
/// Ratio::from_float(0.0); // Should be positive
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio {
    float_value: f64,
}

impl Ratio {
    pub fn from_float(float_value: f64) -> Self {
        assert!(
            float_value.is_finite() && float_value > 0.0,
            "Ratio must be finite and positive but was {}",
            float_value
        );
        Self { float_value }
    }

    /// Creates a [`Ratio`] from an exact rational literal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use intonate::ratio::Ratio;
    /// assert_eq!(Ratio::from_fraction(5, 4).as_float(), 1.25);
    /// ```
    pub fn from_fraction(numer: u32, denom: u32) -> Self {
        Self::from_float(f64::from(numer) / f64::from(denom))
    }

    pub fn as_float(self) -> f64 {
        self.float_value
    }

    pub fn as_cents(self) -> f64 {
        1200.0 * self.float_value.log2()
    }

    /// Absolute linear deviation from `reference`, used to compare how close two ratios are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use intonate::ratio::Ratio;
    /// let fifth = Ratio::from_fraction(3, 2);
    /// assert_approx_eq!(Ratio::from_float(1.498).distance_to(fifth), 0.002);
    /// ```
    pub fn distance_to(self, reference: Ratio) -> f64 {
        (self.as_float() - reference.as_float()).abs()
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::from_float(1.0)
    }
}

impl Display for Ratio {
    /// ```
    /// # use intonate::ratio::Ratio;
    /// assert_eq!(format!("{}", Ratio::from_float(1.5)), "1.5000");
    /// assert_eq!(format!("{:.2}", Ratio::from_float(1.0 / 1.5)), "0.67");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{:.precision$}",
            self.as_float(),
            precision = f.precision().unwrap_or(4)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn octave_is_1200_cents() {
        assert_approx_eq!(Ratio::from_fraction(2, 1).as_cents(), 1200.0);
    }

    #[test]
    fn fraction_roundtrip_is_exact_for_dyadic_values() {
        assert_eq!(Ratio::from_fraction(3, 2).as_float(), 1.5);
        assert_eq!(Ratio::from_fraction(45, 32).as_float(), 45.0 / 32.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Ratio::from_float(1.25);
        let b = Ratio::from_float(1.2);
        assert_approx_eq!(a.distance_to(b), b.distance_to(a));
    }
}
