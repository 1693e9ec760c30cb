#[cfg(test)]
mod tests {
    use hmcalc::libs::duration::{Duration, MAX_SECONDS};

    #[test]
    fn test_zero() {
        let zero = Duration::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero.signum(), 0);
        assert_eq!(Duration::default(), zero);
    }

    #[test]
    fn test_from_hms_does_not_clamp_components() {
        let duration = Duration::from_hms(24, 60, 60);
        assert_eq!(duration.hours(), 25);
        assert_eq!(duration.minutes(), 1);
        assert_eq!(duration.seconds(), 0);
    }

    #[test]
    fn test_decomposition_matches_seconds() {
        for seconds in [0, 1, 59, 60, 3_599, 3_600, 90_061, -1, -3_725, -446_400] {
            let duration = Duration::from_seconds(seconds);
            let recomposed = duration.signum() * (duration.hours() * 3600 + duration.minutes() * 60 + duration.seconds());
            assert_eq!(recomposed, seconds);
            assert!(duration.minutes() < 60);
            assert!(duration.seconds() < 60);
        }
    }

    #[test]
    fn test_hours_are_not_wrapped_at_a_day() {
        assert_eq!(Duration::from_hms(124, 10, 0).hours(), 124);
    }

    #[test]
    fn test_add_subtract_negate() {
        let a = Duration::from_hms(10, 15, 0);
        let b = Duration::from_hms(0, 45, 30);

        assert_eq!(a + b, Duration::from_hms(11, 0, 30));
        assert_eq!(a - b, Duration::from_hms(9, 29, 30));
        assert_eq!(b - a, -(a - b));
        assert_eq!((-a).as_seconds(), -36_900);
    }

    #[test]
    fn test_repeated_arithmetic_is_exact() {
        let step = Duration::from_seconds(1);
        let mut total = Duration::zero();
        for _ in 0..3_600 {
            total = total + step;
        }
        assert_eq!(total, Duration::from_hms(1, 0, 0));

        for _ in 0..3_601 {
            total = total - step;
        }
        assert_eq!(total.as_seconds(), -1);
    }

    #[test]
    fn test_truncate_to_minutes() {
        assert_eq!(Duration::from_hms(20, 50, 59).truncate_to_minutes(), Duration::from_hms(20, 50, 0));
        assert_eq!((-Duration::from_hms(1, 10, 59)).truncate_to_minutes(), -Duration::from_hms(1, 10, 0));
    }

    #[test]
    fn test_abs() {
        assert_eq!((-Duration::from_hms(0, 5, 0)).abs(), Duration::from_hms(0, 5, 0));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Duration::from_seconds(MAX_SECONDS);
        assert_eq!((max + max).as_seconds(), MAX_SECONDS);
        assert_eq!((-max - max).as_seconds(), -MAX_SECONDS);
    }

    #[test]
    fn test_from_chrono_drops_subseconds() {
        let chrono = chrono::Duration::milliseconds(61_900);
        let duration = Duration::from(chrono);
        assert_eq!(duration.as_seconds(), 61);
        assert_eq!(duration.as_chrono(), chrono::Duration::seconds(61));
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::from_hms(1, 2, 3).to_string(), "01:02:03");
        assert_eq!((-Duration::from_hms(0, 0, 9)).to_string(), "-00:00:09");
    }
}
