//! Task records and the board's task store.
//!
//! The store owns the canonical in-memory list for the session and mirrors
//! it into the `tasks` slot after every mutation. The mirror is best-effort:
//! a failed write leaves the previous snapshot stale and the in-memory list
//! stays authoritative, so store mutations never return errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ulid::Ulid;

use crate::calendar;
use crate::status::{Direction, Status};
use crate::storage::{SlotStore, TASKS_SLOT};

/// Urgency of a task, shown as the card's color edge.
///
/// Wire names are lowercase; the `alias` entries accept the values found in
/// snapshots written by earlier releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "baja")]
    Low,
    #[default]
    #[serde(alias = "media")]
    Medium,
    #[serde(alias = "alta")]
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A single task record.
///
/// Dates are ISO `YYYY-MM-DD` strings on the wire. `due_date` stays a string
/// on the record so that legacy or malformed values survive a load; derived
/// views parse it through [`Task::due_day`] and skip what they cannot read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(rename = "creationDate")]
    pub creation_date: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
}

impl Task {
    /// Generate a fresh time-ordered task id.
    pub fn new_id() -> String {
        Ulid::new().to_string()
    }

    /// Due date parsed to a canonical day, `None` when absent or malformed.
    pub fn due_day(&self) -> Option<NaiveDate> {
        calendar::parse_due_date(&self.due_date)
    }

    /// Copy of this task moved one category in the given direction.
    ///
    /// At the sequence bounds the copy is returned unchanged; the receiver
    /// is never mutated.
    pub fn moved(&self, direction: Direction) -> Task {
        let mut task = self.clone();
        if let Some(status) = self.status.step(direction) {
            task.status = status;
        }
        task
    }
}

/// The authoritative in-memory task collection plus its persistence mirror.
#[derive(Debug)]
pub struct TaskStore<S: SlotStore> {
    slots: S,
    tasks: Vec<Task>,
}

impl<S: SlotStore> TaskStore<S> {
    /// Create an empty store over the given slot collaborator.
    pub fn new(slots: S) -> Self {
        Self {
            slots,
            tasks: Vec::new(),
        }
    }

    /// Read the persisted snapshot and replace the in-memory list wholesale.
    ///
    /// A read or parse failure leaves the list empty; the error is logged
    /// and swallowed so a corrupt snapshot degrades to a fresh board.
    pub fn load(&mut self) {
        self.tasks = match self.slots.get(TASKS_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!("malformed task snapshot, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read task snapshot, starting empty: {err}");
                Vec::new()
            }
        };
        debug!(count = self.tasks.len(), "loaded tasks");
    }

    /// Serialize the full list and overwrite the persisted snapshot.
    ///
    /// Called automatically after every mutation. A write failure is logged
    /// and swallowed; the previous snapshot stays stale until the next
    /// successful write.
    pub fn save_all(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize tasks: {err}");
                return;
            }
        };
        if let Err(err) = self.slots.put(TASKS_SLOT, &raw) {
            warn!("failed to persist tasks: {err}");
        }
    }

    /// Replace the task with the same id in place, or append a new one.
    pub fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        self.save_all();
    }

    /// Delete the matching task. No-op (and no write) when absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.save_all();
        }
    }

    /// Move the matching task one category in the given direction.
    ///
    /// Returns `true` when the status actually changed. Unknown ids and
    /// moves clamped at the sequence bounds are no-ops without a write.
    pub fn move_task(&mut self, id: &str, direction: Direction) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        let Some(status) = task.status.step(direction) else {
            return false;
        };
        task.status = status;
        self.save_all();
        true
    }

    /// The persistence collaborator backing this store.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// The full list, in board order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks currently in the given category, preserving list order.
    pub fn by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Count of tasks in the given category.
    pub fn count_by_status(&self, status: Status) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
