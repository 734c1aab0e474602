//! Virtual-clock scheduler for driving the turn controller in tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use super::scheduler::{Scheduler, Task};

struct Queued {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Queued>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward, running every task that comes due in
    /// (due time, scheduling order). Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut ran = 0;
        while let Some(queued) = self.pop_due(target) {
            self.now.set(queued.due);
            // The queue borrow is released here, so tasks may schedule more.
            (queued.task)();
            ran += 1;
        }
        self.now.set(target);
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Queued> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, q)| q.due <= target)
            .min_by_key(|(_, q)| (q.due, q.seq))
            .map(|(i, _)| i)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Queued {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn runs_tasks_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("late", 300), ("early", 100), ("same-a", 200), ("same-b", 200)] {
            let log = log.clone();
            scheduler.schedule(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(name)));
        }

        assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(150)), 3);
        assert_eq!(*log.borrow(), vec!["early", "same-a", "same-b"]);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn tasks_can_schedule_follow_ups() {
        let scheduler = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.set(inner_hits.get() + 1);
                let hits = inner_hits.clone();
                inner_scheduler.schedule(Duration::from_millis(10), Box::new(move || hits.set(hits.get() + 1)));
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(20)), 2);
        assert_eq!(hits.get(), 2);
    }
}
