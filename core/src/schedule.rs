use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Work the session asks to run later. Each task carries the token it was
/// issued under so a late firing can be recognised and dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Start a new round after a loss, valid only within `round`.
    Restart { round: u32 },
    /// Clear safe-click hint number `hint`, valid while that hint is pending.
    RevertSafeMark { hint: u32, coords: Coord2 },
}

/// Timing collaborator: runs a task after a delay, fire and forget.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, task: DeferredTask);
}

/// Scheduler that discards everything, for hosts without timers.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoScheduler;

impl Scheduler for NoScheduler {
    fn schedule(&mut self, delay_ms: u32, task: DeferredTask) {
        log::trace!("dropping {task:?} scheduled in {delay_ms}ms");
    }
}

/// Virtual clock scheduler: tasks become due when the clock is advanced past
/// their deadline.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    pending: Vec<(u64, DeferredTask)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the tasks that fell due, earliest
    /// first, in scheduling order for equal deadlines.
    pub fn advance(&mut self, ms: u64) -> Vec<DeferredTask> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;

        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|&(deadline, _)| deadline <= now);
        self.pending = pending;

        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, task)| task).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, task: DeferredTask) {
        let deadline = self.now_ms.saturating_add(delay_ms.into());
        self.pending.push((deadline, task));
    }
}
