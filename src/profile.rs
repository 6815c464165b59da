//! User profile record and its persistence mirror.
//!
//! The profile lives in two slots: `user` holds the JSON record and
//! `userAvatar` holds the bare image URI. The standalone avatar slot wins
//! over the embedded field on load, matching how earlier releases stored
//! the picked image.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{SlotStore, AVATAR_SLOT, USER_SLOT};

fn default_role() -> String {
    "developer".to_string()
}

/// The single user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: default_role(),
            avatar: None,
        }
    }
}

/// Persistence mirror for the profile, same shape as the task store.
#[derive(Debug)]
pub struct ProfileStore<S: SlotStore> {
    slots: S,
    profile: UserProfile,
}

impl<S: SlotStore> ProfileStore<S> {
    pub fn new(slots: S) -> Self {
        Self {
            slots,
            profile: UserProfile::default(),
        }
    }

    /// Load the persisted profile, overlaying the standalone avatar slot.
    ///
    /// Read or parse failures fall back to the default profile; there is no
    /// error surface beyond the log.
    pub fn load(&mut self) {
        self.profile = match self.slots.get(USER_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(err) => {
                    warn!("malformed profile snapshot, using defaults: {err}");
                    UserProfile::default()
                }
            },
            Ok(None) => UserProfile::default(),
            Err(err) => {
                warn!("failed to read profile, using defaults: {err}");
                UserProfile::default()
            }
        };
        match self.slots.get(AVATAR_SLOT) {
            Ok(Some(uri)) if !uri.trim().is_empty() => self.profile.avatar = Some(uri),
            Ok(_) => {}
            Err(err) => warn!("failed to read avatar slot: {err}"),
        }
    }

    /// Overwrite both slots with the current profile. Failures are logged
    /// and swallowed.
    pub fn save(&self) {
        match serde_json::to_string(&self.profile) {
            Ok(raw) => {
                if let Err(err) = self.slots.put(USER_SLOT, &raw) {
                    warn!("failed to persist profile: {err}");
                }
            }
            Err(err) => warn!("failed to serialize profile: {err}"),
        }
        if let Some(avatar) = &self.profile.avatar {
            if let Err(err) = self.slots.put(AVATAR_SLOT, avatar) {
                warn!("failed to persist avatar: {err}");
            }
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the record and persist immediately.
    pub fn update(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.save();
    }

    /// Point the avatar at a newly cached image and persist immediately.
    pub fn set_avatar(&mut self, uri: String) {
        self.profile.avatar = Some(uri);
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlots;

    #[test]
    fn defaults_apply_when_nothing_is_persisted() {
        let mut store = ProfileStore::new(MemorySlots::new());
        store.load();
        assert_eq!(store.profile().role, "developer");
        assert!(store.profile().avatar.is_none());
    }

    #[test]
    fn avatar_slot_overlays_embedded_field() {
        let slots = MemorySlots::new();
        slots.seed(
            USER_SLOT,
            r#"{"name":"Ada","email":"ada@example.com","role":"dev","avatar":"file:///old.png"}"#,
        );
        slots.seed(AVATAR_SLOT, "file:///new.png");

        let mut store = ProfileStore::new(slots);
        store.load();
        assert_eq!(store.profile().avatar.as_deref(), Some("file:///new.png"));
        assert_eq!(store.profile().name, "Ada");
    }

    #[test]
    fn malformed_profile_falls_back_to_defaults() {
        let slots = MemorySlots::new();
        slots.seed(USER_SLOT, "{broken");

        let mut store = ProfileStore::new(slots);
        store.load();
        assert_eq!(*store.profile(), UserProfile::default());
    }

    #[test]
    fn set_avatar_persists_both_slots() {
        let mut store = ProfileStore::new(MemorySlots::new());
        store.load();
        store.set_avatar("file:///me.png".to_string());

        assert_eq!(
            store.slots.raw(AVATAR_SLOT).as_deref(),
            Some("file:///me.png")
        );
        let raw = store.slots.raw(USER_SLOT).expect("user slot written");
        assert!(raw.contains("file:///me.png"));
    }
}
