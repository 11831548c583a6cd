//! Browser timer scheduler.
//!
//! Backed by `gloo_timers::callback::Timeout` in the `hydrate` build. During
//! SSR there is no event loop to return to, so scheduled tasks are held by
//! the handle and simply never run.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

use crate::auth::schedule::{ScheduledTask, Scheduler, Task};

/// `setTimeout`-backed [`Scheduler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, task);
            ScheduledTask::new(move || drop(timeout.cancel()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("timer requested outside the browser; delay={delay:?} task will not run");
            ScheduledTask::new(move || drop(task))
        }
    }
}
