use devlist::status::{Direction, Status};
use devlist::storage::MemorySlots;
use devlist::task::TaskStore;

mod support;

#[test]
fn forward_move_on_done_is_a_noop() {
    let task = support::task("t1", "finished", Status::Done, "");
    let moved = task.moved(Direction::Forward);
    assert_eq!(moved.status, Status::Done);
    assert_eq!(task.status, Status::Done);
}

#[test]
fn backward_move_on_pending_is_a_noop() {
    let task = support::task("t1", "not started", Status::Pending, "");
    let moved = task.moved(Direction::Backward);
    assert_eq!(moved.status, Status::Pending);
}

#[test]
fn moves_walk_one_step_at_a_time() {
    let task = support::task("t1", "walking", Status::Pending, "");
    let step1 = task.moved(Direction::Forward);
    let step2 = step1.moved(Direction::Forward);
    assert_eq!(step1.status, Status::InProgress);
    assert_eq!(step2.status, Status::Done);

    let back = step2.moved(Direction::Backward);
    assert_eq!(back.status, Status::InProgress);
}

#[test]
fn store_move_persists_only_real_transitions() {
    let mut store = TaskStore::new(MemorySlots::new());
    store.upsert(support::task("t1", "movable", Status::Pending, ""));

    assert!(store.move_task("t1", Direction::Forward));
    assert_eq!(store.get("t1").expect("task").status, Status::InProgress);

    // Clamped at the end of the sequence
    assert!(store.move_task("t1", Direction::Forward));
    assert!(!store.move_task("t1", Direction::Forward));
    assert_eq!(store.get("t1").expect("task").status, Status::Done);

    // Unknown ids are a no-op
    assert!(!store.move_task("missing", Direction::Forward));
}
