//! Formatting helpers for report labels and intervals.

use std::time::Duration;

use chrono::Weekday;

/// Monday-first weekday order used for weekday histograms and windows.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday").
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Labels an hour window, e.g. `"14:00 to 16:00"`.
#[must_use]
pub fn hour_range_label(start: usize, end: usize) -> String {
    format!("{start}:00 to {end}:00")
}

/// Labels a weekday window by Monday-based indices.
///
/// The end index is clamped to Sunday instead of wrapping into the next week.
#[must_use]
pub fn weekday_range_label(start: usize, end: usize) -> String {
    let first = WEEKDAYS[start.min(6)];
    let last = WEEKDAYS[end.min(6)];
    format!("{} to {}", weekday_name(first), weekday_name(last))
}

/// Rounds to two decimal places, sending exact halves to the even digit.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Formats an interval given in minutes, e.g. `"42.50 min (42m 30s)"`.
#[must_use]
pub fn format_interval(minutes: f64) -> String {
    let secs = (minutes * 60.0).max(0.0);
    let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
    format!("{minutes:.2} min ({})", format_duration(duration))
}

/// Formats a duration as a human-readable string (e.g. "5s", "1m 05s", "1h 01m 05s").
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 {
        format!(
            "{}h {:02}m {:02}s",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    } else if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_labels() {
        assert_eq!(hour_range_label(0, 2), "0:00 to 2:00");
        assert_eq!(hour_range_label(21, 23), "21:00 to 23:00");
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(weekday_range_label(0, 2), "Monday to Wednesday");
        assert_eq!(weekday_range_label(4, 6), "Friday to Sunday");
    }

    #[test]
    fn weekday_label_clamps_at_sunday() {
        assert_eq!(weekday_range_label(5, 7), "Saturday to Sunday");
        assert_eq!(weekday_range_label(6, 8), "Sunday to Sunday");
    }

    #[test]
    fn weekday_names_follow_order() {
        let names: Vec<_> = WEEKDAYS.iter().map(|d| weekday_name(*d)).collect();
        assert_eq!(names[0], "Monday");
        assert_eq!(names[6], "Sunday");
    }

    #[test]
    fn round2_values() {
        assert!((round2(1.234_56) - 1.23).abs() < f64::EPSILON);
        assert!((round2(2.0 / 3.0) - 0.67).abs() < f64::EPSILON);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round2_halves_go_to_even() {
        assert!((round2(0.125) - 0.12).abs() < f64::EPSILON);
        assert!((round2(0.375) - 0.38).abs() < f64::EPSILON);
        assert!((round2(-0.125) + 0.12).abs() < f64::EPSILON);
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_secs(5)), "5s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 05s");
        assert_eq!(format_duration(Duration::from_secs(3665)), "1h 01m 05s");
    }

    #[test]
    fn format_interval_values() {
        assert_eq!(format_interval(0.0), "0.00 min (0s)");
        assert_eq!(format_interval(42.5), "42.50 min (42m 30s)");
        assert_eq!(format_interval(90.0), "90.00 min (1h 30m 00s)");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn format_interval_never_panics(minutes in -1.0e6f64..1.0e9) {
                let _ = format_interval(minutes);
            }

            #[test]
            fn weekday_label_never_panics(start in 0usize..20, end in 0usize..20) {
                let _ = weekday_range_label(start, end);
            }
        }
    }
}
