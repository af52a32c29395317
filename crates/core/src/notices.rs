//! Advisory notices derived from the full schedule.
//!
//! The set is recomputed wholesale from the latest store snapshot on every
//! read; at tens to low hundreds of sessions a full pass is cheaper than
//! keeping an incremental index correct. Notices themselves are ephemeral,
//! only their dismissal ids are persisted.

use std::collections::HashSet;

use serde::Serialize;

use crate::interval::TimeInterval;
use crate::types::DbId;

/// Sessions with an enrolled count at or below this (and above zero) get a
/// low-enrollment warning.
pub const LOW_ENROLLMENT_THRESHOLD: usize = 3;

/// How urgent a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// An advisory notice surfaced on the console.
///
/// The id is deterministic, derived from the triggering entities, so the
/// same condition always produces the same id across recomputations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

/// The slice of a stored session that notice derivation reads.
#[derive(Debug, Clone)]
pub struct ScheduledClass {
    pub id: DbId,
    pub discipline_name: String,
    pub interval: TimeInterval,
    pub enrolled_count: usize,
}

/// Deterministic id for a conflicting pair; identical for `(a, b)` and
/// `(b, a)` so a re-sort cannot mint a second notice for the same conflict.
fn conflict_id(a: DbId, b: DbId) -> String {
    format!("conflict-{}-{}", a.min(b), a.max(b))
}

fn low_enrollment_id(session: DbId) -> String {
    format!("low-enrollment-{session}")
}

/// Derive the full advisory set from a schedule snapshot.
///
/// Two independent passes: every unordered pair of overlapping sessions
/// yields an error-severity conflict notice, then every thinly attended
/// session yields a warning. The sort by start time is for deterministic
/// output order only, not correctness.
pub fn derive_notices(classes: &[ScheduledClass]) -> Vec<Notice> {
    let mut ordered: Vec<&ScheduledClass> = classes.iter().collect();
    ordered.sort_by_key(|class| class.interval.start());

    let mut notices = Vec::new();

    for (i, a) in ordered.iter().enumerate() {
        for b in &ordered[i + 1..] {
            if a.interval.overlaps(&b.interval) {
                notices.push(Notice {
                    id: conflict_id(a.id, b.id),
                    message: format!(
                        "Schedule conflict: {} overlaps with {}.",
                        a.discipline_name, b.discipline_name
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    for class in &ordered {
        if class.enrolled_count > 0 && class.enrolled_count <= LOW_ENROLLMENT_THRESHOLD {
            notices.push(Notice {
                id: low_enrollment_id(class.id),
                message: format!(
                    "{} on {} has only {} enrolled student{}.",
                    class.discipline_name,
                    class.interval.start().format("%A"),
                    class.enrolled_count,
                    if class.enrolled_count == 1 { "" } else { "s" },
                ),
                severity: Severity::Warning,
            });
        }
    }

    notices
}

/// Derive notices and drop those already dismissed.
///
/// This is the only feed the presentation layer sees; raw notices never
/// bypass the filter.
pub fn active_notices(classes: &[ScheduledClass], dismissed: &HashSet<String>) -> Vec<Notice> {
    derive_notices(classes)
        .into_iter()
        .filter(|notice| !dismissed.contains(&notice.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    // 2025-09-01 is a Monday.
    fn class(id: DbId, name: &str, start_h: u32, start_m: u32, end_h: u32, enrolled: usize) -> ScheduledClass {
        ScheduledClass {
            id,
            discipline_name: name.to_string(),
            interval: TimeInterval::new(
                Utc.with_ymd_and_hms(2025, 9, 1, start_h, start_m, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 9, 1, end_h, 0, 0).unwrap(),
            )
            .unwrap(),
            enrolled_count: enrolled,
        }
    }

    #[test]
    fn overlapping_pair_yields_one_conflict() {
        let classes = [
            class(1, "Ballet", 9, 0, 10, 5),
            class(2, "Contemporary", 9, 30, 11, 5),
        ];
        let notices = derive_notices(&classes);
        let conflicts: Vec<_> = notices
            .iter()
            .filter(|n| n.severity == Severity::Error)
            .collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id, "conflict-1-2");
        assert!(conflicts[0].message.contains("Ballet"));
        assert!(conflicts[0].message.contains("Contemporary"));
    }

    #[test]
    fn conflict_id_is_stable_under_input_order() {
        let a = class(1, "Ballet", 9, 0, 10, 5);
        let b = class(2, "Contemporary", 9, 30, 11, 5);
        let forward = derive_notices(&[a.clone(), b.clone()]);
        let reversed = derive_notices(&[b, a]);
        assert_eq!(forward, reversed);
        assert_eq!(forward[0].id, "conflict-1-2");
    }

    #[test]
    fn back_to_back_sessions_do_not_conflict() {
        let classes = [
            class(1, "Ballet", 9, 0, 10, 5),
            class(2, "Jazz", 10, 0, 11, 5),
        ];
        assert!(derive_notices(&classes)
            .iter()
            .all(|n| n.severity != Severity::Error));
    }

    #[test]
    fn three_way_overlap_yields_three_pairs() {
        let classes = [
            class(1, "Ballet", 9, 0, 11, 5),
            class(2, "Jazz", 9, 30, 11, 5),
            class(3, "Hip Hop", 10, 0, 11, 5),
        ];
        let conflicts = derive_notices(&classes)
            .into_iter()
            .filter(|n| n.severity == Severity::Error)
            .count();
        assert_eq!(conflicts, 3);
    }

    #[test]
    fn thin_roster_yields_a_warning_naming_discipline_and_weekday() {
        let classes = [class(1, "Ballet", 9, 0, 10, 2)];
        let notices = derive_notices(&classes);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Warning);
        assert_eq!(notices[0].id, "low-enrollment-1");
        assert!(notices[0].message.contains("Ballet"));
        assert!(notices[0].message.contains("Monday"));
        assert!(notices[0].message.contains("2 enrolled students"));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let at_threshold = [class(1, "Ballet", 9, 0, 10, 3)];
        assert_eq!(derive_notices(&at_threshold).len(), 1);

        let above_threshold = [class(1, "Ballet", 9, 0, 10, 4)];
        assert!(derive_notices(&above_threshold).is_empty());
    }

    #[test]
    fn empty_roster_is_not_flagged() {
        let classes = [class(1, "Ballet", 9, 0, 10, 0)];
        assert!(derive_notices(&classes).is_empty());
    }

    #[test]
    fn dismissed_ids_are_filtered_out() {
        let classes = [
            class(1, "Ballet", 9, 0, 10, 5),
            class(2, "Contemporary", 9, 30, 11, 5),
        ];
        let mut dismissed = HashSet::new();
        dismissed.insert("conflict-1-2".to_string());
        assert!(active_notices(&classes, &dismissed).is_empty());
    }

    #[test]
    fn dismissal_does_not_suppress_other_notices() {
        let classes = [
            class(1, "Ballet", 9, 0, 10, 5),
            class(2, "Contemporary", 9, 30, 11, 5),
            class(3, "Jazz", 16, 0, 17, 1),
        ];
        let mut dismissed = HashSet::new();
        dismissed.insert("conflict-1-2".to_string());
        let remaining = active_notices(&classes, &dismissed);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "low-enrollment-3");
    }

    #[test]
    fn a_materially_different_conflict_gets_a_different_id() {
        // Dismissing the 1-2 conflict must not hide a later 1-3 conflict.
        let mut dismissed = HashSet::new();
        dismissed.insert("conflict-1-2".to_string());
        let classes = [
            class(1, "Ballet", 9, 0, 10, 5),
            class(3, "Jazz", 9, 30, 11, 5),
        ];
        let remaining = active_notices(&classes, &dismissed);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "conflict-1-3");
    }

    #[test]
    fn stale_dismissals_are_harmless() {
        let mut dismissed = HashSet::new();
        dismissed.insert("conflict-98-99".to_string());
        let classes = [class(1, "Ballet", 9, 0, 10, 2)];
        assert_eq!(active_notices(&classes, &dismissed).len(), 1);
    }
}
