//! Scheduled tasks owned by one form
//!
//! Every timer a form starts is tracked here and aborted when the form goes
//! away, so nothing can deliver an action to a form that no longer exists.

use tokio::task::JoinHandle;

/// What a scheduled task is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Submission,
    Reset,
}

/// Live tasks of one form instance
#[derive(Debug, Default)]
pub struct TaskSet {
    tasks: Vec<(TaskKind, JoinHandle<()>)>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: TaskKind, handle: JoinHandle<()>) {
        self.prune();
        self.tasks.push((kind, handle));
    }

    /// Number of tasks that have not finished yet
    pub fn pending(&mut self) -> usize {
        self.prune();
        self.tasks.len()
    }

    /// Number of unfinished tasks of `kind`
    pub fn pending_of(&mut self, kind: TaskKind) -> usize {
        self.prune();
        self.tasks.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Abort everything still running; returns how many were aborted
    pub fn abort_all(&mut self) -> usize {
        let mut aborted = 0;
        for (_, handle) in self.tasks.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        aborted
    }

    fn prune(&mut self) {
        self.tasks.retain(|(_, handle)| !handle.is_finished());
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}
