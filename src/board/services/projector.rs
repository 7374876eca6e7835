//! Column projection: the per-status view of the task list.
//!
//! Projections are recomputed from the task slice on every call.

use crate::board::domain::{Task, TaskStatus};

/// The tasks of one column, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection<'a> {
    /// Column status.
    pub status: TaskStatus,
    /// Tasks whose status equals [`Self::status`].
    pub tasks: Vec<&'a Task>,
}

/// Yields the tasks in `status`, preserving their relative order.
pub fn project(tasks: &[Task], status: TaskStatus) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| task.status() == status)
}

/// Returns the number of tasks in `status`.
#[must_use]
pub fn count(tasks: &[Task], status: TaskStatus) -> usize {
    project(tasks, status).count()
}

/// Projects every column in board order.
#[must_use]
pub fn project_all(tasks: &[Task]) -> [ColumnProjection<'_>; 3] {
    TaskStatus::ALL.map(|status| ColumnProjection {
        status,
        tasks: project(tasks, status).collect(),
    })
}
