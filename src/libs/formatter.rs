//! Duration formatting for the calculator display.
//!
//! This module turns computed [`Duration`] values back into the text the
//! calculator display shows, and holds the pre-formatted row type used when
//! a key sequence is traced step by step.
//!
//! ## Format Specifications
//!
//! ### Hours and minutes
//! - `[-]HH:MM`
//! - Hours are zero-padded to at least 2 digits and never capped
//! - Seconds are not shown
//!
//! ### Hours, minutes and seconds
//! - `[-]HH:MM:SS`
//! - Every field is zero-padded to at least 2 digits
//!
//! ### Sign
//! The sign is only ever rendered as a single leading `-`. The fields
//! themselves are taken from the magnitude and are never negative.
//!
//! ### Examples
//! - 9 hours 20 minutes → "09:20"
//! - 124 hours 10 minutes → "124:10"
//! - minus 45 minutes → "-00:45"
//! - 1 hour 1 minute 1 second (seconds format) → "01:01:01"
//!
//! ## Examples
//!
//! ```rust
//! use hmcalc::libs::duration::Duration;
//! use hmcalc::libs::formatter::format_duration;
//! use hmcalc::libs::time_value::TimeFormat;
//!
//! let duration = Duration::from_hms(2, 30, 15);
//! assert_eq!(format_duration(&duration, TimeFormat::HoursAndMinutes), "02:30");
//! assert_eq!(format_duration(&duration, TimeFormat::HoursMinutesAndSeconds), "02:30:15");
//! assert_eq!(format_duration(&-duration, TimeFormat::HoursAndMinutes), "-02:30");
//! ```

use super::duration::Duration;
use super::time_value::TimeFormat;
use serde::{Deserialize, Serialize};

/// One traced key press, pre-formatted for display.
///
/// All fields are strings so rows can go straight into a console table or
/// a JSON document without any further formatting.
///
/// ## Field Descriptions
///
/// - `step`: 1-based position of the key in the sequence
/// - `key`: the key as typed (`7`, `:`, `+`, ...)
/// - `display`: the live display after the key was handled
/// - `calculation`: the committed operands and operators after the key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedKeyPress {
    /// Position of the key in the sequence, starting at 1.
    pub step: usize,

    /// The key as it appears on the keypad.
    pub key: String,

    /// Display text after the key was handled. May be empty.
    pub display: String,

    /// Space-joined committed calculation, e.g. `"05:50 + 03:30 +"`.
    pub calculation: String,
}

/// Formats a duration as `[-]HH:MM` or `[-]HH:MM:SS`.
///
/// ## Formatting Rules
///
/// - **Hours**: total hours, at least 2 digits
/// - **Minutes**: always 2 digits
/// - **Seconds**: 2 digits, only for `HoursMinutesAndSeconds`
/// - **Negative**: a leading `-` in front of the magnitude
///
/// # Examples
///
/// ```rust
/// use hmcalc::libs::duration::Duration;
/// use hmcalc::libs::formatter::format_duration;
/// use hmcalc::libs::time_value::TimeFormat;
///
/// assert_eq!(format_duration(&Duration::from_hms(8, 0, 0), TimeFormat::HoursAndMinutes), "08:00");
/// assert_eq!(format_duration(&Duration::zero(), TimeFormat::HoursMinutesAndSeconds), "00:00:00");
/// assert_eq!(format_duration(&Duration::from_hms(124, 10, 0), TimeFormat::HoursAndMinutes), "124:10");
/// ```
pub fn format_duration(duration: &Duration, time_format: TimeFormat) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };

    match time_format {
        TimeFormat::HoursAndMinutes => format!("{}{:02}:{:02}", sign, duration.hours(), duration.minutes()),
        TimeFormat::HoursMinutesAndSeconds => format!(
            "{}{:02}:{:02}:{:02}",
            sign,
            duration.hours(),
            duration.minutes(),
            duration.seconds()
        ),
    }
}
