//! In-memory repository holding the session's tasks.

use crate::board::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Insertion-ordered in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn append(&mut self, task: Task) -> TaskRepositoryResult<()> {
        if self.position(task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        // `Vec::remove` keeps the relative order of the remaining tasks.
        self.position(id).map(|index| self.tasks.remove(index))
    }

    fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn find_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }
}
