//! Studio-wide closed windows that no class may occupy.

use crate::interval::TimeInterval;

/// A daily window during which no class may be scheduled, regardless of day.
#[derive(Debug, Clone)]
pub struct AvailabilityRule {
    /// Window start as an hour of day.
    pub start_hour: f64,
    /// Window end as an hour of day (exclusive, same half-open convention
    /// as [`TimeInterval`]).
    pub end_hour: f64,
    /// Rejection message shown when a candidate hits the window.
    pub message: &'static str,
}

/// Fixed studio policy. Early morning and the midday break are closed.
pub const CLOSED_WINDOWS: &[AvailabilityRule] = &[
    AvailabilityRule {
        start_hour: 7.0,
        end_hour: 8.0,
        message: "The 07:00-08:00 slot is not available.",
    },
    AvailabilityRule {
        start_hour: 12.0,
        end_hour: 15.0,
        message: "The 12:00-15:00 slot is not available.",
    },
];

/// First closed window the interval's hour-of-day range intersects, if any.
///
/// Applies the half-open overlap test to hours of day rather than absolute
/// instants, so the windows repeat daily. First match wins; callers report
/// a single rule, not all of them.
pub fn violated_rule(interval: &TimeInterval) -> Option<&'static AvailabilityRule> {
    CLOSED_WINDOWS.iter().find(|rule| {
        interval.start_hour() < rule.end_hour && interval.end_hour() > rule.start_hour
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn interval(day: u32, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval::new(
            Utc.with_ymd_and_hms(2025, 9, day, start_h, start_m, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 9, day, end_h, end_m, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn morning_window_is_closed() {
        let rule = violated_rule(&interval(1, 7, 30, 8, 15)).expect("should match");
        assert_eq!(rule.start_hour, 7.0);
    }

    #[test]
    fn midday_window_is_closed() {
        let rule = violated_rule(&interval(1, 13, 0, 14, 0)).expect("should match");
        assert_eq!(rule.start_hour, 12.0);
    }

    #[test]
    fn windows_apply_on_every_day() {
        assert!(violated_rule(&interval(3, 12, 30, 13, 30)).is_some());
        assert!(violated_rule(&interval(5, 7, 0, 7, 45)).is_some());
    }

    #[test]
    fn class_ending_at_window_start_is_allowed() {
        assert!(violated_rule(&interval(1, 11, 0, 12, 0)).is_none());
    }

    #[test]
    fn class_starting_at_window_end_is_allowed() {
        assert!(violated_rule(&interval(1, 15, 0, 16, 0)).is_none());
        assert!(violated_rule(&interval(1, 8, 0, 9, 0)).is_none());
    }

    #[test]
    fn class_spanning_a_window_is_rejected() {
        assert!(violated_rule(&interval(1, 11, 0, 16, 0)).is_some());
    }

    #[test]
    fn evening_class_is_allowed() {
        assert!(violated_rule(&interval(1, 18, 0, 19, 30)).is_none());
    }
}
