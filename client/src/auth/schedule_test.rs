use std::cell::Cell;

use super::*;

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Task) {
    let hits = Rc::new(Cell::new(0));
    let make = {
        let hits = hits.clone();
        move || -> Task {
            let hits = hits.clone();
            Box::new(move || hits.set(hits.get() + 1))
        }
    };
    (hits, make)
}

#[test]
fn task_fires_only_once_due() {
    let scheduler = ManualScheduler::new();
    let (hits, task) = counter();
    let _handle = scheduler.schedule(Duration::from_millis(2000), task());

    assert_eq!(scheduler.advance(Duration::from_millis(1999)), 0);
    assert_eq!(hits.get(), 0);
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(Duration::from_secs(10)), 0);
    assert_eq!(hits.get(), 1);
}

#[test]
fn cancel_disarms_task() {
    let scheduler = ManualScheduler::new();
    let (hits, task) = counter();
    let handle = scheduler.schedule(Duration::from_millis(10), task());
    assert_eq!(scheduler.pending(), 1);
    handle.cancel();
    assert_eq!(scheduler.pending(), 0);
    scheduler.advance(Duration::from_secs(1));
    assert_eq!(hits.get(), 0);
}

#[test]
fn dropping_handle_cancels() {
    let scheduler = ManualScheduler::new();
    let (hits, task) = counter();
    drop(scheduler.schedule(Duration::from_millis(10), task()));
    scheduler.advance(Duration::from_secs(1));
    assert_eq!(hits.get(), 0);
}

#[test]
fn cancel_after_fire_is_noop() {
    let scheduler = ManualScheduler::new();
    let (hits, task) = counter();
    let handle = scheduler.schedule(Duration::ZERO, task());
    scheduler.advance(Duration::ZERO);
    handle.cancel();
    assert_eq!(hits.get(), 1);
}

#[test]
fn tasks_run_in_due_order() {
    let scheduler = ManualScheduler::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut handles = Vec::new();
    for (label, ms) in [("late", 30_u64), ("early", 10), ("tie-a", 20), ("tie-b", 20)] {
        let order = order.clone();
        handles.push(scheduler.schedule(Duration::from_millis(ms), Box::new(move || order.borrow_mut().push(label))));
    }
    assert_eq!(scheduler.advance(Duration::from_millis(30)), 4);
    assert_eq!(*order.borrow(), vec!["early", "tie-a", "tie-b", "late"]);
}

#[test]
fn clones_share_clock() {
    let scheduler = ManualScheduler::new();
    let other = scheduler.clone();
    let (hits, task) = counter();
    let _handle = other.schedule(Duration::from_millis(5), task());
    scheduler.advance(Duration::from_millis(5));
    assert_eq!(hits.get(), 1);
    assert_eq!(other.now(), Duration::from_millis(5));
}

#[test]
fn delay_is_relative_to_current_time() {
    let scheduler = ManualScheduler::new();
    scheduler.advance(Duration::from_millis(100));
    let (hits, task) = counter();
    let _handle = scheduler.schedule(Duration::from_millis(50), task());
    scheduler.advance(Duration::from_millis(49));
    assert_eq!(hits.get(), 0);
    scheduler.advance(Duration::from_millis(1));
    assert_eq!(hits.get(), 1);
}

#[test]
fn handle_outliving_scheduler_is_safe() {
    let (hits, task) = counter();
    let handle = {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(1), task())
    };
    handle.cancel();
    assert_eq!(hits.get(), 0);
}
