use std::time::Duration;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay. The turn controller goes through this so
/// tests can drive time by hand.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

/// `setTimeout`-backed scheduler. Tasks are fire-and-forget.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
