//! Absolute frequencies measured in Hz.

use crate::ratio::Ratio;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Mul;

/// The concert pitch all nominal frequencies are anchored at.
pub const A4_PITCH: Pitch = Pitch { hz: 440.0 };

/// Struct representing an absolute frequency.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use intonate::pitch::Pitch;
/// # use intonate::ratio::Ratio;
/// let fifth_above_a4 = Pitch::from_hz(440.0) * Ratio::from_fraction(3, 2);
/// assert_approx_eq!(fifth_above_a4.as_hz(), 660.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Pitch {
    hz: f64,
}

impl Pitch {
    pub const fn from_hz(hz: f64) -> Pitch {
        Pitch { hz }
    }

    pub const fn as_hz(self) -> f64 {
        self.hz
    }
}

impl Mul<Ratio> for Pitch {
    type Output = Pitch;

    fn mul(self, rhs: Ratio) -> Self::Output {
        Pitch::from_hz(self.as_hz() * rhs.as_float())
    }
}

impl Display for Pitch {
    /// ```
    /// # use intonate::pitch::Pitch;
    /// assert_eq!(Pitch::from_hz(440.0).to_string(), "440.000 Hz");
    /// assert_eq!(format!("{:.1}", Pitch::from_hz(523.251)), "523.3 Hz");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:.precision$} Hz", self.hz, precision = f.precision().unwrap_or(3))
    }
}
