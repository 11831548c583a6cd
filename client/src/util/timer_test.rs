#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn ssr_scheduler_never_runs_task() {
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    let handle = BrowserScheduler.schedule(Duration::ZERO, Box::new(move || flag.set(true)));
    handle.cancel();
    assert!(!ran.get());
}

#[test]
fn ssr_scheduler_releases_task_on_drop() {
    let token = Rc::new(());
    let held = token.clone();
    let handle = BrowserScheduler.schedule(Duration::from_secs(2), Box::new(move || drop(held)));
    assert_eq!(Rc::strong_count(&token), 2);
    drop(handle);
    assert_eq!(Rc::strong_count(&token), 1);
}
