//! Snapshots written by earlier releases used Spanish category and priority
//! names and `D/M/YYYY` due dates. They must keep loading, and a rewrite
//! must come out in the canonical wire format.

use devlist::calendar::derive_markers;
use devlist::status::Status;
use devlist::storage::{MemorySlots, SlotStore, TASKS_SLOT};
use devlist::task::{Priority, TaskStore};

mod support;

use support::day;

const LEGACY_SNAPSHOT: &str = r#"[
  {
    "id": "1717200000000",
    "title": "Entregar informe",
    "description": "Versión final",
    "priority": "alta",
    "status": "pendiente",
    "creationDate": "1/6/2025",
    "dueDate": "1/6/2025"
  },
  {
    "id": "1717200000001",
    "title": "Revisar diseño",
    "description": "Con el equipo",
    "priority": "media",
    "status": "proceso",
    "creationDate": "1/6/2025",
    "dueDate": "15/6/2025"
  },
  {
    "id": "1717200000002",
    "title": "Configurar entorno",
    "description": "Hecho la semana pasada",
    "priority": "baja",
    "status": "terminado",
    "creationDate": "1/6/2025",
    "dueDate": "1/6/2025"
  }
]"#;

#[test]
fn legacy_snapshot_loads_with_mapped_statuses_and_priorities() {
    let slots = MemorySlots::new();
    slots.seed(TASKS_SLOT, LEGACY_SNAPSHOT);

    let mut store = TaskStore::new(slots);
    store.load();

    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get("1717200000000").expect("task").status,
        Status::Pending
    );
    assert_eq!(
        store.get("1717200000000").expect("task").priority,
        Priority::High
    );
    assert_eq!(
        store.get("1717200000001").expect("task").status,
        Status::InProgress
    );
    assert_eq!(
        store.get("1717200000002").expect("task").status,
        Status::Done
    );
}

#[test]
fn legacy_due_dates_derive_markers_on_the_right_days() {
    let slots = MemorySlots::new();
    slots.seed(TASKS_SLOT, LEGACY_SNAPSHOT);

    let mut store = TaskStore::new(slots);
    store.load();

    let markers = derive_markers(store.tasks());
    assert_eq!(markers.len(), 2);

    let june_first = &markers[&day(2025, 6, 1)];
    let statuses: Vec<Status> = june_first.iter().map(|m| m.status).collect();
    assert_eq!(statuses, vec![Status::Pending, Status::Done]);

    assert_eq!(markers[&day(2025, 6, 15)].len(), 1);
}

#[test]
fn rewriting_a_legacy_snapshot_canonicalizes_the_wire_names() {
    let slots = MemorySlots::new();
    slots.seed(TASKS_SLOT, LEGACY_SNAPSHOT);

    let mut store = TaskStore::new(slots);
    store.load();
    store.save_all();

    let raw = store
        .slots()
        .get(TASKS_SLOT)
        .expect("slot readable")
        .expect("slot present");
    assert!(raw.contains("\"pending\""));
    assert!(raw.contains("\"in-progress\""));
    assert!(raw.contains("\"done\""));
    assert!(!raw.contains("pendiente"));
    assert!(!raw.contains("proceso"));
    assert!(!raw.contains("terminado"));
}
