//! Calendar markers derived from task due dates.
//!
//! The calendar view shows one colored dot per distinct status among the
//! tasks due that day. Derivation is a pure function of the task list and
//! is recomputed whenever the list changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::status::Status;
use crate::task::Task;

/// A status dot attached to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub status: Status,
    pub color: &'static str,
}

/// Dot color for a status, from the app theme.
pub fn marker_color(status: Status) -> &'static str {
    match status {
        Status::Pending => "#FF4B4B",
        Status::InProgress => "#FFB946",
        Status::Done => "#4CAF50",
    }
}

/// Parse a due date to the canonical day.
///
/// Accepts ISO `YYYY-MM-DD` and the legacy `D/M/YYYY` form written by
/// earlier releases. Anything else, including the empty string, is `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}

/// Derive the date → markers mapping for the whole task list.
///
/// Within a date, markers appear in first-occurrence order and are
/// deduplicated by status, not by task. Tasks without a parseable due date
/// are excluded entirely.
pub fn derive_markers(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<Marker>> {
    let mut markers: BTreeMap<NaiveDate, Vec<Marker>> = BTreeMap::new();
    for task in tasks {
        let Some(day) = task.due_day() else {
            continue;
        };
        let day_markers = markers.entry(day).or_default();
        if day_markers.iter().all(|marker| marker.status != task.status) {
            day_markers.push(Marker {
                status: task.status,
                color: marker_color(task.status),
            });
        }
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn due_task(id: &str, due: &str, status: Status) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: "details".to_string(),
            priority: Priority::Medium,
            status,
            creation_date: "2025-06-01".to_string(),
            due_date: due.to_string(),
        }
    }

    #[test]
    fn parses_iso_and_legacy_forms() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_due_date("2025-06-01"), Some(day));
        assert_eq!(parse_due_date("01/06/2025"), Some(day));
        assert_eq!(parse_due_date("1/6/2025"), Some(day));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("   "), None);
        assert_eq!(parse_due_date("not-a-date"), None);
        assert_eq!(parse_due_date("2025-13-40"), None);
    }

    #[test]
    fn same_status_same_day_yields_one_marker() {
        let tasks = vec![
            due_task("1", "01/06/2025", Status::Pending),
            due_task("2", "01/06/2025", Status::Pending),
        ];
        let markers = derive_markers(&tasks);
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(markers[&day].len(), 1);
        assert_eq!(markers[&day][0].status, Status::Pending);
    }

    #[test]
    fn distinct_statuses_same_day_yield_distinct_markers() {
        let tasks = vec![
            due_task("1", "01/06/2025", Status::Pending),
            due_task("2", "01/06/2025", Status::Done),
        ];
        let markers = derive_markers(&tasks);
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let statuses: Vec<Status> = markers[&day].iter().map(|m| m.status).collect();
        assert_eq!(statuses, vec![Status::Pending, Status::Done]);
    }

    #[test]
    fn markers_keep_first_occurrence_order() {
        let tasks = vec![
            due_task("1", "2025-06-01", Status::Done),
            due_task("2", "2025-06-01", Status::Pending),
            due_task("3", "2025-06-01", Status::Done),
        ];
        let markers = derive_markers(&tasks);
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let statuses: Vec<Status> = markers[&day].iter().map(|m| m.status).collect();
        assert_eq!(statuses, vec![Status::Done, Status::Pending]);
    }

    #[test]
    fn unparseable_due_dates_are_excluded() {
        let tasks = vec![
            due_task("1", "not-a-date", Status::Pending),
            due_task("2", "", Status::Done),
        ];
        assert!(derive_markers(&tasks).is_empty());
    }
}
