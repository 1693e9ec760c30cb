#[cfg(test)]
mod tests {
    use hmcalc::libs::duration::Duration;
    use hmcalc::libs::formatter::format_duration;
    use hmcalc::libs::time_value::{TimeFormat, TimeValue};

    fn hours_minutes(text: &str) -> Duration {
        TimeValue::parse(text, TimeFormat::HoursAndMinutes).value
    }

    fn with_seconds(text: &str) -> Duration {
        TimeValue::parse(text, TimeFormat::HoursMinutesAndSeconds).value
    }

    #[test]
    fn test_blank_display_is_zero() {
        assert!(hours_minutes("").is_zero());
        assert!(with_seconds("").is_zero());
    }

    #[test]
    fn test_hours_and_minutes_parsing() {
        assert_eq!(hours_minutes("01"), Duration::from_hms(0, 1, 0));
        assert_eq!(hours_minutes("1"), Duration::from_hms(0, 1, 0));
        assert_eq!(hours_minutes("01:01"), Duration::from_hms(1, 1, 0));
        assert_eq!(hours_minutes("60"), Duration::from_hms(1, 0, 0));
        assert_eq!(hours_minutes("24:00"), Duration::from_hms(24, 0, 0));
        assert_eq!(hours_minutes("24:10"), Duration::from_hms(24, 10, 0));
        assert_eq!(hours_minutes("124:10"), Duration::from_hms(124, 10, 0));
    }

    #[test]
    fn test_hours_minutes_and_seconds_parsing() {
        assert_eq!(with_seconds("01"), Duration::from_hms(0, 0, 1));
        assert_eq!(with_seconds("1"), Duration::from_hms(0, 0, 1));
        assert_eq!(with_seconds("01:01"), Duration::from_hms(0, 1, 1));
        assert_eq!(with_seconds("60:00"), Duration::from_hms(1, 0, 0));
        assert_eq!(with_seconds("120:10"), Duration::from_hms(2, 0, 10));
        assert_eq!(with_seconds("24:60:60"), Duration::from_hms(25, 1, 0));
        assert_eq!(with_seconds("20:04:34"), Duration::from_hms(20, 4, 34));
    }

    #[test]
    fn test_trailing_separator_reads_as_empty_segment() {
        assert_eq!(hours_minutes("5:"), Duration::from_hms(5, 0, 0));
        assert_eq!(with_seconds("5:"), Duration::from_hms(0, 5, 0));
        assert_eq!(with_seconds("1:05:"), Duration::from_hms(1, 5, 0));
    }

    #[test]
    fn test_leading_minus_negates() {
        assert_eq!(hours_minutes("-01:30"), -Duration::from_hms(1, 30, 0));
        assert_eq!(with_seconds("-45"), -Duration::from_hms(0, 0, 45));
        assert!(hours_minutes("-").is_zero());
    }

    #[test]
    fn test_parsing_is_total() {
        for text in ["::", ":", "-:", "1::2", "--5", "-:-:-", "99999999999999999999:99", "1:2:3:4:5", "abc", "0:0:0"] {
            let _ = hours_minutes(text);
            let _ = with_seconds(text);
        }
        assert!(hours_minutes("::").is_zero());
        assert!(hours_minutes("--5").is_zero());
    }

    #[test]
    fn test_canonical_strings_round_trip() {
        for text in ["00:00", "07:05", "23:59", "124:10"] {
            let value = TimeValue::parse(text, TimeFormat::HoursAndMinutes);
            assert_eq!(format_duration(&value.value, TimeFormat::HoursAndMinutes), text);
            assert_eq!(value.to_string(), text);
        }
        for text in ["00:00:00", "12:34:56", "100:00:01", "-01:02:03"] {
            let value = TimeValue::parse(text, TimeFormat::HoursMinutesAndSeconds);
            assert_eq!(format_duration(&value.value, TimeFormat::HoursMinutesAndSeconds), text);
        }
    }

    #[test]
    fn test_change_time_format_to_seconds_keeps_value() {
        let mut value = TimeValue::parse("20:50", TimeFormat::HoursAndMinutes);
        value.change_time_format(TimeFormat::HoursMinutesAndSeconds);
        assert_eq!(value.value, Duration::from_hms(20, 50, 0));
        assert_eq!(value.time_format(), TimeFormat::HoursMinutesAndSeconds);
    }

    #[test]
    fn test_change_time_format_to_minutes_keeps_hours_and_minutes() {
        let mut value = TimeValue::parse("20:50:00", TimeFormat::HoursMinutesAndSeconds);
        value.change_time_format(TimeFormat::HoursAndMinutes);
        assert_eq!(value.value, Duration::from_hms(20, 50, 0));
    }

    #[test]
    fn test_change_time_format_to_minutes_truncates_seconds() {
        let mut value = TimeValue::parse("20:50:59", TimeFormat::HoursMinutesAndSeconds);
        value.change_time_format(TimeFormat::HoursAndMinutes);
        assert_eq!(value.value, Duration::from_hms(20, 50, 0));
        assert_eq!(value.time_format(), TimeFormat::HoursAndMinutes);

        // Widening again does not bring the seconds back
        value.change_time_format(TimeFormat::HoursMinutesAndSeconds);
        assert_eq!(value.value, Duration::from_hms(20, 50, 0));
    }

    #[test]
    fn test_new_value_renders_in_its_format() {
        let duration = Duration::from_hms(2, 5, 9);
        assert_eq!(TimeValue::new(duration, TimeFormat::HoursAndMinutes).to_string(), "02:05");
        assert_eq!(TimeValue::new(duration, TimeFormat::HoursMinutesAndSeconds).to_string(), "02:05:09");
    }

    #[test]
    fn test_time_format_helpers() {
        assert_eq!(TimeFormat::HoursAndMinutes.segments(), 2);
        assert_eq!(TimeFormat::HoursMinutesAndSeconds.segments(), 3);
        assert_eq!(TimeFormat::HoursAndMinutes.toggled(), TimeFormat::HoursMinutesAndSeconds);
        assert_eq!(TimeFormat::HoursMinutesAndSeconds.toggled(), TimeFormat::HoursAndMinutes);
        assert_eq!(TimeFormat::default(), TimeFormat::HoursAndMinutes);
    }
}
