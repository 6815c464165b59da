use devlist::profile::{ProfileStore, UserProfile};
use devlist::storage::{AVATAR_SLOT, USER_SLOT};

mod support;

use support::TempStorage;

#[test]
fn profile_round_trips_through_slot_files() {
    let temp = TempStorage::new();

    let mut store = ProfileStore::new(temp.storage());
    store.update(UserProfile {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: "engineer".to_string(),
        avatar: Some("file:///avatars/ada.png".to_string()),
    });

    let mut reloaded = ProfileStore::new(temp.storage());
    reloaded.load();
    assert_eq!(reloaded.profile(), store.profile());
}

#[test]
fn standalone_avatar_slot_wins_over_embedded_field() {
    let temp = TempStorage::new();
    temp.write_slot(
        USER_SLOT,
        r#"{"name":"Ada","email":"ada@example.com","role":"engineer","avatar":"file:///old.png"}"#,
    );
    temp.write_slot(AVATAR_SLOT, "file:///new.png");

    let mut store = ProfileStore::new(temp.storage());
    store.load();
    assert_eq!(store.profile().avatar.as_deref(), Some("file:///new.png"));
}

#[test]
fn malformed_user_slot_falls_back_to_defaults() {
    let temp = TempStorage::new();
    temp.write_slot(USER_SLOT, "][");

    let mut store = ProfileStore::new(temp.storage());
    store.load();
    assert_eq!(*store.profile(), UserProfile::default());
    assert_eq!(store.profile().role, "developer");
}

#[test]
fn avatar_only_storage_still_loads() {
    let temp = TempStorage::new();
    temp.write_slot(AVATAR_SLOT, "file:///only-avatar.png");

    let mut store = ProfileStore::new(temp.storage());
    store.load();
    assert_eq!(store.profile().name, "");
    assert_eq!(
        store.profile().avatar.as_deref(),
        Some("file:///only-avatar.png")
    );
}
