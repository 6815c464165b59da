//! Store-mutating actions triggered from the board.
//!
//! Every action funnels through the library stores, so persistence happens
//! on each change. Outcomes carry the message shown in the status line.

use chrono::Local;

use crate::form::TaskForm;
use crate::status::Direction;
use crate::storage::SlotStore;
use crate::task::TaskStore;

#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub changed: bool,
    pub message: String,
}

impl ActionOutcome {
    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: message.into(),
        }
    }

    fn changed(message: impl Into<String>) -> Self {
        Self {
            changed: true,
            message: message.into(),
        }
    }
}

/// Commit a validated form, creating or replacing a task.
///
/// The collection is untouched when validation fails; the first field error
/// comes back for the editor to display.
pub fn submit_form<S: SlotStore>(
    store: &mut TaskStore<S>,
    form: &TaskForm,
) -> Result<ActionOutcome, String> {
    let today = Local::now().date_naive();
    let task = form
        .build(today)
        .map_err(|errors| errors[0].message.to_string())?;
    let message = if form.is_edit() {
        format!("updated '{}'", task.title)
    } else {
        format!("created '{}'", task.title)
    };
    store.upsert(task);
    Ok(ActionOutcome::changed(message))
}

/// Delete a task by id.
pub fn delete_task<S: SlotStore>(store: &mut TaskStore<S>, id: &str) -> ActionOutcome {
    let Some(task) = store.get(id) else {
        return ActionOutcome::unchanged("nothing to delete");
    };
    let title = task.title.clone();
    store.remove(id);
    ActionOutcome::changed(format!("deleted '{title}'"))
}

/// Move a task one category in the given direction.
pub fn move_task<S: SlotStore>(
    store: &mut TaskStore<S>,
    id: &str,
    direction: Direction,
) -> ActionOutcome {
    if store.move_task(id, direction) {
        let label = store
            .get(id)
            .map(|task| task.status.label())
            .unwrap_or_default();
        ActionOutcome::changed(format!("moved to {label}"))
    } else {
        match direction {
            Direction::Forward => ActionOutcome::unchanged("already in the last category"),
            Direction::Backward => ActionOutcome::unchanged("already in the first category"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use crate::storage::MemorySlots;

    fn store_with_task() -> TaskStore<MemorySlots> {
        let mut store = TaskStore::new(MemorySlots::new());
        let mut form = TaskForm::new();
        form.title = "ship it".to_string();
        form.description = "eventually".to_string();
        let outcome = submit_form(&mut store, &form).expect("valid form");
        assert!(outcome.changed);
        store
    }

    #[test]
    fn invalid_form_leaves_collection_unchanged() {
        let mut store = store_with_task();
        let mut form = TaskForm::new();
        form.title = "has title".to_string();

        let err = submit_form(&mut store, &form).unwrap_err();
        assert_eq!(err, "description is required");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn move_walks_the_sequence_and_clamps() {
        let mut store = store_with_task();
        let id = store.tasks()[0].id.clone();

        assert!(move_task(&mut store, &id, Direction::Forward).changed);
        assert!(move_task(&mut store, &id, Direction::Forward).changed);
        assert_eq!(store.get(&id).unwrap().status, Status::Done);

        let clamped = move_task(&mut store, &id, Direction::Forward);
        assert!(!clamped.changed);
        assert_eq!(store.get(&id).unwrap().status, Status::Done);
    }

    #[test]
    fn delete_unknown_id_reports_no_change() {
        let mut store = store_with_task();
        assert!(!delete_task(&mut store, "missing").changed);
        assert_eq!(store.len(), 1);
    }
}
