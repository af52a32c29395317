//! Placement validation for candidate class sessions.
//!
//! The edit workflow submits a [`SessionDraft`]; [`check_placement`] either
//! rejects it with the first applicable [`PlacementError`] or returns a
//! [`PlacedSession`] with concrete fields that the caller commits to the
//! store. A rejected draft never reaches the store.

use crate::availability;
use crate::interval::{InvalidInterval, TimeInterval};
use crate::types::{DbId, Timestamp};

/// Why a candidate session cannot be placed on the schedule.
///
/// All variants are validation failures surfaced to the user as a rejection
/// of the pending edit; none are retried and none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A required field (discipline, start, end, or capacity) is missing.
    #[error("discipline, start time, end time and capacity are all required")]
    IncompleteSession,

    /// The end instant is not strictly after the start instant.
    #[error("the end time must be after the start time")]
    InvalidInterval,

    /// The candidate sits inside a studio closed window.
    #[error("{0}")]
    UnavailableWindow(String),

    /// The candidate overlaps an existing session.
    #[error("the session overlaps existing session {other}")]
    ScheduleOverlap { other: DbId },
}

impl From<InvalidInterval> for PlacementError {
    fn from(_: InvalidInterval) -> Self {
        PlacementError::InvalidInterval
    }
}

/// Identity and time range of an existing session, the only facts the
/// overlap check needs.
#[derive(Debug, Clone)]
pub struct BookedSlot {
    pub id: DbId,
    pub interval: TimeInterval,
}

/// A candidate class edit as submitted by the client.
///
/// Schedule-relevant fields are optional because the edit form can arrive
/// half-filled; presence is the first placement check.
#[derive(Debug, Clone, Default)]
pub struct SessionDraft {
    /// `Some` when editing an existing session, `None` on create.
    pub id: Option<DbId>,
    pub discipline_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub capacity: Option<i32>,
    pub student_ids: Vec<DbId>,
}

/// A draft that passed every placement check. Fields are concrete and safe
/// to persist; the store assigns the id on create and keeps it on edit.
#[derive(Debug, Clone)]
pub struct PlacedSession {
    pub discipline_id: DbId,
    pub teacher_id: Option<DbId>,
    pub interval: TimeInterval,
    pub capacity: i32,
    pub student_ids: Vec<DbId>,
}

/// Validate a candidate against studio policy and the current schedule.
///
/// Checks run in order and stop at the first failure: required fields,
/// interval validity, closed windows, then pairwise overlap against every
/// slot in `existing` whose id differs from the draft's (editing a session
/// never conflicts with its own prior version). The ordering is a UX
/// choice: the cheapest, most actionable rejection is reported first.
pub fn check_placement(
    draft: &SessionDraft,
    existing: &[BookedSlot],
) -> Result<PlacedSession, PlacementError> {
    let (Some(discipline_id), Some(start), Some(end), Some(capacity)) =
        (draft.discipline_id, draft.start, draft.end, draft.capacity)
    else {
        return Err(PlacementError::IncompleteSession);
    };

    let interval = TimeInterval::new(start, end)?;

    if let Some(rule) = availability::violated_rule(&interval) {
        return Err(PlacementError::UnavailableWindow(rule.message.to_string()));
    }

    for slot in existing {
        if Some(slot.id) == draft.id {
            continue;
        }
        if interval.overlaps(&slot.interval) {
            return Err(PlacementError::ScheduleOverlap { other: slot.id });
        }
    }

    Ok(PlacedSession {
        discipline_id,
        teacher_id: draft.teacher_id,
        interval,
        capacity,
        student_ids: draft.student_ids.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 9, 1, hour, min, 0).unwrap()
    }

    fn draft(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> SessionDraft {
        SessionDraft {
            id: None,
            discipline_id: Some(1),
            teacher_id: None,
            start: Some(at(start_h, start_m)),
            end: Some(at(end_h, end_m)),
            capacity: Some(10),
            student_ids: Vec::new(),
        }
    }

    fn slot(id: DbId, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> BookedSlot {
        BookedSlot {
            id,
            interval: TimeInterval::new(at(start_h, start_m), at(end_h, end_m)).unwrap(),
        }
    }

    #[test]
    fn missing_discipline_is_incomplete() {
        let mut candidate = draft(9, 0, 10, 0);
        candidate.discipline_id = None;
        assert_eq!(
            check_placement(&candidate, &[]).unwrap_err(),
            PlacementError::IncompleteSession
        );
    }

    #[test]
    fn missing_end_is_incomplete() {
        let mut candidate = draft(9, 0, 10, 0);
        candidate.end = None;
        assert_eq!(
            check_placement(&candidate, &[]).unwrap_err(),
            PlacementError::IncompleteSession
        );
    }

    #[test]
    fn missing_capacity_is_incomplete() {
        let mut candidate = draft(9, 0, 10, 0);
        candidate.capacity = None;
        assert_eq!(
            check_placement(&candidate, &[]).unwrap_err(),
            PlacementError::IncompleteSession
        );
    }

    #[test]
    fn reversed_times_are_invalid() {
        assert_eq!(
            check_placement(&draft(10, 0, 9, 0), &[]).unwrap_err(),
            PlacementError::InvalidInterval
        );
    }

    #[test]
    fn presence_is_checked_before_interval_validity() {
        let mut candidate = draft(10, 0, 9, 0);
        candidate.discipline_id = None;
        assert_eq!(
            check_placement(&candidate, &[]).unwrap_err(),
            PlacementError::IncompleteSession
        );
    }

    #[test]
    fn early_morning_window_is_rejected() {
        let err = check_placement(&draft(7, 30, 8, 15), &[]).unwrap_err();
        assert!(matches!(err, PlacementError::UnavailableWindow(_)));
    }

    #[test]
    fn midday_window_is_rejected() {
        let err = check_placement(&draft(12, 30, 13, 30), &[]).unwrap_err();
        assert!(matches!(err, PlacementError::UnavailableWindow(_)));
    }

    #[test]
    fn closed_window_wins_over_overlap() {
        // The availability check runs before the pairwise scan.
        let existing = [slot(7, 13, 0, 14, 0)];
        let err = check_placement(&draft(13, 0, 14, 0), &existing).unwrap_err();
        assert!(matches!(err, PlacementError::UnavailableWindow(_)));
    }

    #[test]
    fn overlap_with_existing_session_is_rejected() {
        let existing = [slot(7, 9, 30, 10, 30)];
        assert_eq!(
            check_placement(&draft(9, 0, 10, 0), &existing).unwrap_err(),
            PlacementError::ScheduleOverlap { other: 7 }
        );
    }

    #[test]
    fn some_overlap_is_reported_when_several_exist() {
        let existing = [slot(7, 9, 0, 10, 0), slot(8, 9, 30, 10, 30)];
        let err = check_placement(&draft(9, 15, 10, 15), &existing).unwrap_err();
        assert!(matches!(err, PlacementError::ScheduleOverlap { .. }));
    }

    #[test]
    fn edit_does_not_conflict_with_its_own_prior_version() {
        let mut candidate = draft(9, 0, 10, 0);
        candidate.id = Some(7);
        let existing = [slot(7, 9, 0, 10, 0)];
        assert!(check_placement(&candidate, &existing).is_ok());
    }

    #[test]
    fn back_to_back_sessions_are_accepted() {
        let existing = [slot(7, 9, 0, 10, 0)];
        assert!(check_placement(&draft(10, 0, 11, 0), &existing).is_ok());
    }

    #[test]
    fn accepted_draft_keeps_its_fields() {
        let mut candidate = draft(9, 0, 10, 0);
        candidate.teacher_id = Some(3);
        candidate.student_ids = vec![11, 12];
        let placed = check_placement(&candidate, &[]).unwrap();
        assert_eq!(placed.discipline_id, 1);
        assert_eq!(placed.teacher_id, Some(3));
        assert_eq!(placed.capacity, 10);
        assert_eq!(placed.student_ids, vec![11, 12]);
        assert_eq!(placed.interval.start(), at(9, 0));
    }
}
