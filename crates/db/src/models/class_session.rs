//! Class session entity model and DTOs.
//!
//! Sessions are only ever written through the placement-checked edit
//! workflow, so there is a single upsert DTO whose schedule-relevant
//! fields are all optional: presence is the first placement check, not a
//! deserialization concern.

use barre_core::placement::SessionDraft;
use barre_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `class_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassSession {
    pub id: DbId,
    pub discipline_id: DbId,
    pub teacher_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub capacity: i32,
    /// Enrolled student ids; unique, order irrelevant.
    pub student_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the class create/edit workflow.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpsertClassSession {
    pub discipline_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub student_ids: Vec<DbId>,
}

impl UpsertClassSession {
    /// View the payload as a placement draft. `id` is the session being
    /// edited, or `None` on create. Duplicate roster entries are dropped
    /// here so the stored roster is always a set.
    pub fn to_draft(&self, id: Option<DbId>) -> SessionDraft {
        let mut student_ids = self.student_ids.clone();
        let mut seen = std::collections::HashSet::new();
        student_ids.retain(|student| seen.insert(*student));

        SessionDraft {
            id,
            discipline_id: self.discipline_id,
            teacher_id: self.teacher_id,
            start: self.start_time,
            end: self.end_time,
            capacity: self.capacity,
            student_ids,
        }
    }
}

/// A session row joined with display names, the weekly grid's data source.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleEntry {
    pub id: DbId,
    pub discipline_id: DbId,
    pub discipline_name: String,
    pub teacher_id: Option<DbId>,
    pub teacher_name: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub capacity: i32,
    pub student_ids: Vec<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_draft_deduplicates_the_roster() {
        let input = UpsertClassSession {
            student_ids: vec![1, 2, 1, 3, 2],
            ..Default::default()
        };
        let draft = input.to_draft(None);
        assert_eq!(draft.student_ids, vec![1, 2, 3]);
    }

    #[test]
    fn to_draft_carries_the_edited_id() {
        let input = UpsertClassSession::default();
        assert_eq!(input.to_draft(Some(7)).id, Some(7));
        assert_eq!(input.to_draft(None).id, None);
    }
}
