//! Inline editors for the task form and the profile form.
//!
//! The editor stages raw text per field and converts to the library form
//! types on submit. Required fields block the confirm step, so an invalid
//! form can never reach the store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calendar;
use crate::form::TaskForm;
use crate::profile::UserProfile;
use crate::task::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    NewTask,
    EditTask,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFieldId {
    Title,
    Description,
    Priority,
    DueDate,
    Name,
    Email,
    Role,
    Avatar,
}

#[derive(Debug, Clone)]
pub struct EditorField {
    pub id: EditorFieldId,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

impl EditorField {
    fn new(id: EditorFieldId, label: &'static str, value: String, required: bool) -> Self {
        Self {
            id,
            label,
            value,
            required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    Submit,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    kind: EditorKind,
    fields: Vec<EditorField>,
    active: usize,
    confirming: bool,
    error: Option<String>,
    original: Option<Task>,
}

impl EditorState {
    pub fn new_task() -> Self {
        Self {
            kind: EditorKind::NewTask,
            fields: task_fields(None),
            active: 0,
            confirming: false,
            error: None,
            original: None,
        }
    }

    pub fn edit_task(task: &Task) -> Self {
        Self {
            kind: EditorKind::EditTask,
            fields: task_fields(Some(task)),
            active: 0,
            confirming: false,
            error: None,
            original: Some(task.clone()),
        }
    }

    pub fn edit_profile(profile: &UserProfile) -> Self {
        Self {
            kind: EditorKind::Profile,
            fields: vec![
                EditorField::new(EditorFieldId::Name, "Name", profile.name.clone(), false),
                EditorField::new(EditorFieldId::Email, "Email", profile.email.clone(), false),
                EditorField::new(EditorFieldId::Role, "Role", profile.role.clone(), false),
                EditorField::new(
                    EditorFieldId::Avatar,
                    "Avatar",
                    profile.avatar.clone().unwrap_or_default(),
                    false,
                ),
            ],
            active: 0,
            confirming: false,
            error: None,
            original: None,
        }
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn confirming(&self) -> bool {
        self.confirming
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.confirming = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if self.confirming {
            return self.handle_confirm_key(key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            if let Some(field) = self.fields.get_mut(self.active) {
                field.value.clear();
            }
            self.error = None;
            return EditorAction::None;
        }

        match key.code {
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab | KeyCode::Down => self.move_active(1),
            KeyCode::BackTab | KeyCode::Up => self.move_active(-1),
            KeyCode::Enter => {
                if self.active + 1 >= self.fields.len() {
                    return self.attempt_confirm();
                }
                self.move_active(1);
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.value.pop();
                }
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return EditorAction::None;
                }
                if !ch.is_control() {
                    if let Some(field) = self.fields.get_mut(self.active) {
                        field.value.push(ch);
                    }
                }
            }
            _ => {}
        }

        self.error = None;
        EditorAction::None
    }

    /// The staged task input; call only for task editors.
    pub fn task_form(&self) -> TaskForm {
        let mut form = match &self.original {
            Some(task) => TaskForm::edit(task),
            None => TaskForm::new(),
        };
        form.title = self.field_value(EditorFieldId::Title).to_string();
        form.description = self.field_value(EditorFieldId::Description).to_string();
        if let Some(priority) = parse_priority(self.field_value(EditorFieldId::Priority)) {
            form.priority = priority;
        }
        form.due_date = self.field_value(EditorFieldId::DueDate).trim().to_string();
        form
    }

    /// The staged profile, overlaid on the current record.
    pub fn profile(&self, base: &UserProfile) -> UserProfile {
        let avatar = self.field_value(EditorFieldId::Avatar).trim().to_string();
        UserProfile {
            name: self.field_value(EditorFieldId::Name).trim().to_string(),
            email: self.field_value(EditorFieldId::Email).trim().to_string(),
            role: self.field_value(EditorFieldId::Role).trim().to_string(),
            avatar: if avatar.is_empty() {
                base.avatar.clone()
            } else {
                Some(avatar)
            },
        }
    }

    fn attempt_confirm(&mut self) -> EditorAction {
        match self.validate() {
            Ok(()) => {
                self.confirming = true;
                EditorAction::None
            }
            Err(err) => {
                self.error = Some(err);
                self.confirming = false;
                EditorAction::None
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Esc => EditorAction::Cancel,
            KeyCode::Char('y') | KeyCode::Enter => EditorAction::Submit,
            KeyCode::Char('n') | KeyCode::Backspace => {
                self.confirming = false;
                self.error = None;
                EditorAction::None
            }
            _ => EditorAction::None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        for field in &self.fields {
            if field.required && field.value.trim().is_empty() {
                return Err(format!("{} is required", field.label.to_lowercase()));
            }
        }
        if self.kind != EditorKind::Profile {
            let priority = self.field_value(EditorFieldId::Priority);
            if !priority.trim().is_empty() && parse_priority(priority).is_none() {
                return Err("priority must be low, medium or high".to_string());
            }
            let due = self.field_value(EditorFieldId::DueDate);
            if !due.trim().is_empty() && calendar::parse_due_date(due).is_none() {
                return Err("due date must be YYYY-MM-DD".to_string());
            }
        }
        Ok(())
    }

    fn field_value(&self, id: EditorFieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    fn move_active(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        if len == 0 {
            self.active = 0;
            return;
        }
        self.active = (self.active as isize + delta).rem_euclid(len) as usize;
    }
}

fn task_fields(task: Option<&Task>) -> Vec<EditorField> {
    let priority = task.map(|t| t.priority).unwrap_or_default();
    vec![
        EditorField::new(
            EditorFieldId::Title,
            "Title",
            task.map(|t| t.title.clone()).unwrap_or_default(),
            true,
        ),
        EditorField::new(
            EditorFieldId::Description,
            "Description",
            task.map(|t| t.description.clone()).unwrap_or_default(),
            true,
        ),
        EditorField::new(
            EditorFieldId::Priority,
            "Priority",
            priority_name(priority).to_string(),
            false,
        ),
        EditorField::new(
            EditorFieldId::DueDate,
            "Due date",
            task.map(|t| t.due_date.clone()).unwrap_or_default(),
            false,
        ),
    ]
}

fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(raw: &str) -> Option<Priority> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" | "l" => Some(Priority::Low),
        "medium" | "m" | "" => Some(Priority::Medium),
        "high" | "h" => Some(Priority::High),
        _ => None,
    }
}
