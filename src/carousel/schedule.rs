//! Deferred work: timers and after-frame tasks.
//!
//! Tasks are plain data.  Each one carries the gesture generation or
//! expansion it was scheduled for and is re-checked against the state when
//! it fires, because a newer gesture may have started in between.

use std::time::{Duration, Instant};

/// Work deferred until a timer elapses or the next frame is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Finish a snap or revert once its animation has run.
    SettleDrag { generation: u64 },
    /// Clear `was_dragging` after the click cooldown.
    EndClickCooldown { generation: u64 },
    /// Measure the expanded content, focus the root, announce expansion.
    CaptureExpandedHeight { expansion: u64 },
    /// Scroll the page to the top after a collapse has been laid out.
    ScrollToTop { expansion: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Instant,
    seq: u64,
    task: Task,
}

/// Pending timers plus the after-frame queue.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    after_frame: Vec<Task>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once `delay` has elapsed after `now`.
    pub fn after(&mut self, now: Instant, delay: Duration, task: Task) {
        self.seq = self.seq.wrapping_add(1);
        self.timers.push(Timer {
            due: now + delay,
            seq: self.seq,
            task,
        });
    }

    /// Run `task` after the next rendered frame.
    pub fn after_frame(&mut self, task: Task) {
        self.after_frame.push(task);
    }

    /// Take every after-frame task queued so far.
    pub fn take_frame_tasks(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.after_frame)
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|t| t.due <= now);
        self.timers = pending;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|t| t.task).collect()
    }

    /// Earliest pending timer, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.due).min()
    }

    pub fn pending(&self) -> usize {
        self.timers.len() + self.after_frame.len()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
        self.after_frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_due_order() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        sched.after(now, Duration::from_millis(250), Task::SettleDrag { generation: 1 });
        sched.after(now, Duration::from_millis(100), Task::EndClickCooldown { generation: 1 });

        assert!(sched.take_due(now + Duration::from_millis(50)).is_empty());
        assert_eq!(sched.next_due(), Some(now + Duration::from_millis(100)));

        let due = sched.take_due(now + Duration::from_millis(300));
        assert_eq!(
            due,
            vec![
                Task::EndClickCooldown { generation: 1 },
                Task::SettleDrag { generation: 1 },
            ]
        );
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn frame_tasks_drain_once() {
        let mut sched = Scheduler::new();
        sched.after_frame(Task::ScrollToTop { expansion: 1 });
        assert_eq!(sched.take_frame_tasks().len(), 1);
        assert!(sched.take_frame_tasks().is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let now = Instant::now();
        let mut sched = Scheduler::new();
        sched.after(now, Duration::ZERO, Task::SettleDrag { generation: 3 });
        sched.after_frame(Task::CaptureExpandedHeight { expansion: 1 });
        sched.clear();
        assert_eq!(sched.pending(), 0);
        assert!(sched.take_due(now).is_empty());
    }
}
