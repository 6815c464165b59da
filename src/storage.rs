//! Slot-backed persistence for devlist
//!
//! All persisted state lives in opaque string-keyed slots. The board owns
//! three of them:
//!
//! ```text
//! <data dir>/
//!   tasks          # JSON array of task records
//!   user           # JSON profile object
//!   userAvatar     # bare URI string
//! ```
//!
//! Stores never talk to the filesystem directly; they go through the
//! [`SlotStore`] trait so they can be tested against an in-memory double.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Slot holding the serialized task collection
pub const TASKS_SLOT: &str = "tasks";

/// Slot holding the serialized user profile
pub const USER_SLOT: &str = "user";

/// Slot holding the avatar image URI
pub const AVATAR_SLOT: &str = "userAvatar";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DEVLIST_DATA_DIR";

/// The injected persistence collaborator.
///
/// Readers treat a missing slot and an empty store the same way; writers
/// overwrite the whole slot. There is no partial update.
pub trait SlotStore {
    /// Read the current value of a slot, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot with a new value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed slot store, one file per slot under the data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage rooted at an explicit directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the platform data directory, honoring `DEVLIST_DATA_DIR`.
    pub fn open_default() -> Result<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        let dirs = ProjectDirs::from("", "", "devlist").ok_or(Error::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Path to the directory holding the slot files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the file backing a slot
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }

    /// Write data atomically using temp file + rename.
    ///
    /// Readers never see a partial slot; the file is either the previous
    /// value or the new one.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

impl SlotStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.write_atomic(&self.slot_path(key), value.as_bytes())
    }
}

/// In-memory slot store for tests and previews.
///
/// `fail_io(true)` makes every subsequent read and write error, simulating a
/// device whose local storage has gone away mid-session.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without going through `put`.
    pub fn seed(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Toggle simulated I/O failure for all subsequent operations.
    pub fn fail_io(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Raw view of a slot, bypassing the failure switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn io_error() -> Error {
        Error::Io(io::Error::other("simulated storage failure"))
    }
}

impl SlotStore for MemorySlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing.get() {
            return Err(Self::io_error());
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.get() {
            return Err(Self::io_error());
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_slot_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        assert!(storage.get(TASKS_SLOT).unwrap().is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nested/data"));

        storage.put(USER_SLOT, "{\"name\":\"Ada\"}").unwrap();
        assert_eq!(
            storage.get(USER_SLOT).unwrap().as_deref(),
            Some("{\"name\":\"Ada\"}")
        );
    }

    #[test]
    fn put_overwrites_whole_slot() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        storage.put(AVATAR_SLOT, "file:///a.png").unwrap();
        storage.put(AVATAR_SLOT, "file:///b.png").unwrap();

        assert_eq!(
            storage.get(AVATAR_SLOT).unwrap().as_deref(),
            Some("file:///b.png")
        );
        // No leftover temp file from the atomic write
        assert!(!storage.slot_path(AVATAR_SLOT).with_extension("tmp").exists());
    }

    #[test]
    fn memory_slots_simulate_failure() {
        let slots = MemorySlots::new();
        slots.put("tasks", "[]").unwrap();

        slots.fail_io(true);
        assert!(slots.get("tasks").is_err());
        assert!(slots.put("tasks", "[1]").is_err());

        slots.fail_io(false);
        assert_eq!(slots.get("tasks").unwrap().as_deref(), Some("[]"));
    }
}
