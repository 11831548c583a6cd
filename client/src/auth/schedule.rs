//! Cancellable delayed tasks.
//!
//! DESIGN
//! ======
//! The page schedules exactly one kind of deferred work (the return to the
//! login form after signup). Routing it through [`Scheduler`] lets the
//! browser use real timers while tests drive a virtual clock and can assert
//! or suppress the callback deterministically.
//!
//! A [`ScheduledTask`] cancels on drop, mirroring `gloo_timers` timeouts; the
//! owner keeps the handle alive for as long as the task should stay armed.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Source of delayed callbacks.
pub trait Scheduler {
    /// Run `task` once after `delay` unless the returned handle is cancelled
    /// or dropped first.
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask;
}

/// Handle to an armed task.
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wrap a cancellation hook. The hook runs at most once.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Disarm the task. A task that already ran is unaffected.
    pub fn cancel(mut self) {
        self.disarm();
    }

    fn disarm(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask").field("armed", &self.cancel.is_some()).finish()
    }
}

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Virtual-clock scheduler. Nothing fires until [`ManualScheduler::advance`].
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of armed tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Move the clock forward by `by`, running every task that becomes due in
    /// due order (ties in scheduling order). Returns how many ran.
    ///
    /// Tasks run with the queue unlocked, so they may schedule further work;
    /// anything they schedule within the window also runs.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.queue.borrow().now + by;
        let mut ran = 0;
        while let Some(entry) = self.pop_due(target) {
            (entry.task)();
            ran += 1;
        }
        self.queue.borrow_mut().now = target;
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(idx, _)| idx)?;
        let entry = queue.entries.remove(idx);
        queue.now = entry.due;
        Some(entry)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.entries.push(Entry { id, due, task });
            id
        };
        let weak: Weak<RefCell<ManualQueue>> = Rc::downgrade(&self.queue);
        ScheduledTask::new(move || {
            if let Some(queue) = weak.upgrade() {
                queue.borrow_mut().entries.retain(|e| e.id != id);
            }
        })
    }
}
