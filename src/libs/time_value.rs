//! Time formats and the display-text parser.
//!
//! A [`TimeValue`] is a [`Duration`] tagged with the [`TimeFormat`] it was
//! read under. Reading display text is total: any string produces a value,
//! and segments that are empty or not numeric count as zero.
//!
//! ## Grammar
//!
//! | Text        | `HoursAndMinutes` | `HoursMinutesAndSeconds` |
//! |-------------|-------------------|--------------------------|
//! | `N`         | N minutes         | N seconds                |
//! | `A:B`       | A hours B minutes | A minutes B seconds      |
//! | `A:B:C`     | A hours B minutes | A hours B min C seconds  |
//!
//! A single leading `-` negates the whole value. Segments are not
//! range-checked, so `"24:60:60"` in seconds mode is 25 hours and 1 minute.

use super::duration::Duration;
use super::formatter::format_duration;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many colon-separated fields the display carries.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `H:MM`
    #[default]
    #[value(name = "hm")]
    HoursAndMinutes,
    /// `H:MM:SS`
    #[value(name = "hms")]
    HoursMinutesAndSeconds,
}

impl TimeFormat {
    /// Number of colon-separated segments a complete value has.
    pub fn segments(self) -> usize {
        match self {
            TimeFormat::HoursAndMinutes => 2,
            TimeFormat::HoursMinutesAndSeconds => 3,
        }
    }

    /// The other format.
    pub fn toggled(self) -> Self {
        match self {
            TimeFormat::HoursAndMinutes => TimeFormat::HoursMinutesAndSeconds,
            TimeFormat::HoursMinutesAndSeconds => TimeFormat::HoursAndMinutes,
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeFormat::HoursAndMinutes => write!(f, "HH:MM"),
            TimeFormat::HoursMinutesAndSeconds => write!(f, "HH:MM:SS"),
        }
    }
}

/// A duration together with the format it is interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    pub value: Duration,
    time_format: TimeFormat,
}

impl TimeValue {
    /// Wraps an already computed duration.
    pub fn new(value: Duration, time_format: TimeFormat) -> Self {
        Self { value, time_format }
    }

    /// Reads display text under `time_format`. Never fails.
    pub fn parse(text: &str, time_format: TimeFormat) -> Self {
        Self {
            value: parse_duration(text, time_format),
            time_format,
        }
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// Re-tags the value with another format.
    ///
    /// Narrowing to `HoursAndMinutes` drops the seconds component
    /// (truncation, not rounding). Widening keeps the duration as it is.
    pub fn change_time_format(&mut self, time_format: TimeFormat) {
        self.time_format = time_format;

        if time_format == TimeFormat::HoursAndMinutes {
            self.value = self.value.truncate_to_minutes();
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_duration(&self.value, self.time_format))
    }
}

fn parse_duration(text: &str, time_format: TimeFormat) -> Duration {
    if text.is_empty() {
        return Duration::zero();
    }

    // The sign is taken off before any segment is looked at
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (hours, minutes, seconds) = if body.contains(':') {
        let parts: Vec<&str> = body.split(':').collect();

        match time_format {
            TimeFormat::HoursAndMinutes => (segment(parts.first()), segment(parts.get(1)), 0),
            TimeFormat::HoursMinutesAndSeconds => match parts.len() {
                2 => (0, segment(parts.first()), segment(parts.get(1))),
                3 => (segment(parts.first()), segment(parts.get(1)), segment(parts.get(2))),
                _ => (0, 0, 0),
            },
        }
    } else {
        match time_format {
            TimeFormat::HoursAndMinutes => (0, parse_number(body), 0),
            TimeFormat::HoursMinutesAndSeconds => (0, 0, parse_number(body)),
        }
    };

    let magnitude = Duration::from_hms(hours, minutes, seconds);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn segment(part: Option<&&str>) -> i64 {
    part.map_or(0, |text| parse_number(text))
}

/// Reads the leading run of ASCII digits, ignoring leading whitespace.
/// Anything without a leading digit reads as zero; huge runs saturate.
fn parse_number(text: &str) -> i64 {
    text.trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_reads_leading_digits() {
        assert_eq!(parse_number("42"), 42);
        assert_eq!(parse_number("07"), 7);
        assert_eq!(parse_number(" 15x"), 15);
        assert_eq!(parse_number("x15"), 0);
        assert_eq!(parse_number(""), 0);
    }

    #[test]
    fn test_parse_number_saturates() {
        assert_eq!(parse_number("99999999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_seconds_mode_rejects_four_segments() {
        assert!(parse_duration("1:2:3:4", TimeFormat::HoursMinutesAndSeconds).is_zero());
    }

    #[test]
    fn test_minutes_mode_ignores_extra_segments() {
        let value = parse_duration("1:02:03", TimeFormat::HoursAndMinutes);
        assert_eq!(value, Duration::from_hms(1, 2, 0));
    }
}
