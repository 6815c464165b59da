//! Staged create/edit input for tasks.
//!
//! The form holds what the user typed, reports field-level validation
//! errors, and only builds a task record once the input is valid. Status is
//! deliberately absent: only category moves change it.

use chrono::NaiveDate;

use crate::status::Status;
use crate::task::{Priority, Task};

/// Fields the form validates, used by the UI to highlight the offender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// A single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Staged input for creating or editing a task.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
    original: Option<Task>,
}

impl TaskForm {
    /// Empty form for a new task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing task.
    pub fn edit(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date.clone(),
            original: Some(task.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    /// Validate required fields: title and description, non-empty after
    /// trimming.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Title,
                message: "title is required",
            });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Description,
                message: "description is required",
            });
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Build the task record for this input.
    ///
    /// On create: fresh id, `creation_date = today`, status `Pending`. On
    /// edit: id, creation date and status are preserved from the original.
    /// Either way a blank due date defaults to `today`.
    pub fn build(&self, today: NaiveDate) -> Result<Task, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let today = today.format("%Y-%m-%d").to_string();
        let due_date = if self.due_date.trim().is_empty() {
            today.clone()
        } else {
            self.due_date.trim().to_string()
        };

        let task = match &self.original {
            Some(original) => Task {
                id: original.id.clone(),
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                priority: self.priority,
                status: original.status,
                creation_date: original.creation_date.clone(),
                due_date,
            },
            None => Task {
                id: Task::new_id(),
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                priority: self.priority,
                status: Status::Pending,
                creation_date: today.clone(),
                due_date,
            },
        };
        Ok(task)
    }
}
