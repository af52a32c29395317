//! Half-open time intervals for class sessions.

use chrono::Timelike;

use crate::types::Timestamp;

/// Error returned when an interval's start is not strictly before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("interval start must be before its end")]
pub struct InvalidInterval;

/// A half-open time range `[start, end)`.
///
/// Construction enforces `start < end`; nothing downstream re-checks it.
/// A committed session's interval is never mutated in place, only replaced
/// wholesale on edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl TimeInterval {
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, InvalidInterval> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval)
        }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// True when the two ranges share any instant. Touching endpoints
    /// (`a.end == b.start`) do not count as overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Start of the interval as a fractional hour of day (9.5 for 09:30).
    pub fn start_hour(&self) -> f64 {
        fractional_hour(self.start)
    }

    /// End of the interval as a fractional hour of day.
    pub fn end_hour(&self) -> f64 {
        fractional_hour(self.end)
    }
}

fn fractional_hour(at: Timestamp) -> f64 {
    f64::from(at.hour()) + f64::from(at.minute()) / 60.0 + f64::from(at.second()) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 9, 1, hour, min, 0).unwrap()
    }

    fn interval(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval::new(at(start_h, start_m), at(end_h, end_m)).unwrap()
    }

    #[test]
    fn construction_rejects_reversed_endpoints() {
        assert_eq!(
            TimeInterval::new(at(10, 0), at(9, 0)).unwrap_err(),
            InvalidInterval
        );
    }

    #[test]
    fn construction_rejects_zero_length() {
        assert!(TimeInterval::new(at(9, 0), at(9, 0)).is_err());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = interval(9, 0, 10, 0);
        let b = interval(9, 30, 10, 30);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn interval_overlaps_itself() {
        let a = interval(9, 0, 10, 0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn containment_is_overlap() {
        let outer = interval(9, 0, 12, 0);
        let inner = interval(10, 0, 11, 0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let a = interval(9, 0, 10, 0);
        let b = interval(10, 0, 11, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let a = interval(9, 0, 10, 0);
        let b = interval(16, 0, 17, 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn fractional_hours() {
        let a = interval(9, 30, 10, 45);
        assert!((a.start_hour() - 9.5).abs() < 1e-9);
        assert!((a.end_hour() - 10.75).abs() < 1e-9);
    }
}
