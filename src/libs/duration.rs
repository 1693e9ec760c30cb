//! Signed duration value used by the calculator.
//!
//! [`Duration`] wraps a `chrono::Duration` kept at whole-second resolution and
//! exposes the hours/minutes/seconds decomposition the display works with.
//! All arithmetic is exact integer arithmetic on seconds, so repeated
//! additions and subtractions never accumulate rounding error.
//!
//! ## Decomposition
//!
//! The decomposition is always taken from the magnitude; the sign lives
//! separately:
//!
//! ```text
//! as_seconds() == signum() * (hours() * 3600 + minutes() * 60 + seconds())
//! ```
//!
//! `hours()` is the total number of whole hours (it is not wrapped at 24),
//! `minutes()` and `seconds()` are always in `0..60`.
//!
//! ## Saturation
//!
//! Values never overflow. Construction and arithmetic clamp the magnitude to
//! the largest number of seconds a `chrono::Duration` can carry.
//!
//! ## Examples
//!
//! ```rust
//! use hmcalc::libs::duration::Duration;
//!
//! let shift = Duration::from_hms(8, 30, 0);
//! let lunch = Duration::from_hms(0, 45, 0);
//! let worked = shift - lunch;
//!
//! assert_eq!(worked.hours(), 7);
//! assert_eq!(worked.minutes(), 45);
//! assert_eq!((-worked).as_seconds(), -27_900);
//! ```

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Largest magnitude in seconds that fits into a `chrono::Duration`.
pub const MAX_SECONDS: i64 = i64::MAX / 1_000;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;

/// A signed quantity of elapsed time with whole-second resolution.
///
/// Instances are plain values: every operation returns a new `Duration`
/// and nothing is shared between copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(chrono::Duration);

impl Duration {
    /// The empty duration.
    pub fn zero() -> Self {
        Duration(chrono::Duration::zero())
    }

    /// Builds a duration from a signed number of seconds, saturating at
    /// [`MAX_SECONDS`] in either direction.
    pub fn from_seconds(seconds: i64) -> Self {
        let clamped = seconds.clamp(-MAX_SECONDS, MAX_SECONDS);
        Duration(chrono::Duration::try_seconds(clamped).unwrap_or_else(chrono::Duration::zero))
    }

    /// Composes `hours * 3600 + minutes * 60 + seconds`.
    ///
    /// The components are not range-checked: `from_hms(0, 90, 0)` is an hour
    /// and a half.
    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        let total = hours
            .saturating_mul(SECONDS_PER_HOUR)
            .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(seconds);
        Self::from_seconds(total)
    }

    /// Total signed length in seconds.
    pub fn as_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Whole hours of the magnitude, unbounded.
    pub fn hours(&self) -> i64 {
        self.magnitude() / SECONDS_PER_HOUR
    }

    /// Minutes of the magnitude after removing whole hours.
    pub fn minutes(&self) -> i64 {
        (self.magnitude() % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Seconds of the magnitude after removing whole minutes.
    pub fn seconds(&self) -> i64 {
        self.magnitude() % SECONDS_PER_MINUTE
    }

    /// `-1`, `0` or `1` depending on the sign.
    pub fn signum(&self) -> i64 {
        self.as_seconds().signum()
    }

    pub fn is_negative(&self) -> bool {
        self.as_seconds() < 0
    }

    pub fn is_zero(&self) -> bool {
        self.as_seconds() == 0
    }

    /// Same length with the sign dropped.
    pub fn abs(&self) -> Self {
        Self::from_seconds(self.magnitude())
    }

    /// Drops the seconds component, keeping the sign, hours and minutes.
    ///
    /// This truncates toward zero: `-01:10:59` becomes `-01:10:00`.
    pub fn truncate_to_minutes(&self) -> Self {
        let magnitude = self.magnitude() - self.seconds();
        Self::from_seconds(self.signum() * magnitude)
    }

    /// The underlying chrono value.
    pub fn as_chrono(&self) -> chrono::Duration {
        self.0
    }

    fn magnitude(&self) -> i64 {
        self.as_seconds().abs()
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<chrono::Duration> for Duration {
    /// Converts from chrono, discarding any sub-second part.
    fn from(value: chrono::Duration) -> Self {
        Self::from_seconds(value.num_seconds())
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.as_seconds().saturating_add(rhs.as_seconds()))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.as_seconds().saturating_sub(rhs.as_seconds()))
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_seconds(-self.as_seconds())
    }
}

impl fmt::Display for Duration {
    /// Renders the full `[-]HH:MM:SS` form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{:02}:{:02}:{:02}",
            if self.is_negative() { "-" } else { "" },
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
