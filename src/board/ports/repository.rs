//! Repository port for the ordered task collection.

use crate::board::domain::{Task, TaskId};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task collection contract.
///
/// Implementations keep tasks in insertion order. Only [`append`] and
/// [`remove`] change the length of the collection; edits in place never
/// reorder it.
///
/// [`append`]: TaskRepository::append
/// [`remove`]: TaskRepository::remove
pub trait TaskRepository {
    /// Appends a task at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already held.
    fn append(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes and returns the task with `id`.
    ///
    /// Returns `None` when no such task exists.
    fn remove(&mut self, id: TaskId) -> Option<Task>;

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> Option<&Task>;

    /// Finds a task by identifier for in-place editing.
    fn find_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task>;

    /// Returns every task in insertion order.
    fn list(&self) -> &[Task];
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}
