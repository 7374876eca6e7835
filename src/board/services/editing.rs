//! Edit-in-place selection state.

use super::TaskStore;
use crate::board::{
    domain::{Task, TaskId, TaskPatch},
    ports::TaskRepository,
};
use mockable::Clock;
use tracing::debug;

/// Tracks at most one task as the current edit target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSession {
    target: Option<TaskId>,
}

impl EditSession {
    /// Creates a session with no edit target.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: None }
    }

    /// Makes `id` the edit target, replacing any previous target.
    pub fn begin(&mut self, id: TaskId) {
        if let Some(previous) = self.target.replace(id).filter(|previous| *previous != id) {
            debug!(task_id = %id, previous = %previous, "switched edit target");
        }
    }

    /// Returns the current edit target.
    #[must_use]
    pub const fn target(&self) -> Option<TaskId> {
        self.target
    }

    /// Clears the edit target without touching the store.
    pub const fn cancel(&mut self) {
        self.target = None;
    }

    /// Applies `patch` to the edit target and clears it.
    ///
    /// Returns the updated task, or `None` when there is no target or the
    /// store rejected the patch. A rejected patch keeps the target so the
    /// form stays open; a target that no longer exists is cleared.
    pub fn save<'a, R, C>(
        &mut self,
        store: &'a mut TaskStore<R, C>,
        patch: TaskPatch,
    ) -> Option<&'a Task>
    where
        R: TaskRepository,
        C: Clock,
    {
        let id = self.target?;
        if store.get(id).is_none() {
            debug!(task_id = %id, "cleared edit target of missing task");
            self.target = None;
            return None;
        }
        let updated = store.update(id, patch)?;
        self.target = None;
        Some(updated)
    }
}
