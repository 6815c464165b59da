#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use devlist::status::Status;
use devlist::storage::Storage;
use devlist::task::{Priority, Task};

/// File-backed storage rooted in a temp dir that lives as long as the value.
pub struct TempStorage {
    dir: TempDir,
}

impl TempStorage {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn storage(&self) -> Storage {
        Storage::new(self.dir.path().to_path_buf())
    }

    pub fn slot_contents(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(key)).ok()
    }

    pub fn write_slot(&self, key: &str, contents: &str) {
        std::fs::write(self.dir.path().join(key), contents).expect("write slot");
    }
}

pub fn task(id: &str, title: &str, status: Status, due: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} details"),
        priority: Priority::Medium,
        status,
        creation_date: "2025-06-01".to_string(),
        due_date: due.to_string(),
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
