//! Task store: the authoritative task collection and its mutations.

use crate::board::{
    domain::{Task, TaskId, TaskPatch, TaskPriority, TaskStatus, TaskTitle},
    ports::TaskRepository,
};
use mockable::Clock;
use tracing::debug;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: TaskPriority,
}

impl CreateTaskRequest {
    /// Creates a request with the required title, an empty description and
    /// the default priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Owner of the task collection.
///
/// Every mutation is a silent no-op on invalid input or an unknown id; the
/// caller sees `None` and the collection is unchanged.
#[derive(Debug, Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    repository: R,
    clock: C,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a task store over `repository`.
    #[must_use]
    pub const fn new(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// Appends a new task in [`TaskStatus::Todo`].
    ///
    /// Returns the new task identifier, or `None` when the title is blank.
    pub fn create(&mut self, request: CreateTaskRequest) -> Option<TaskId> {
        let Ok(title) = TaskTitle::new(request.title) else {
            debug!("ignored task creation with blank title");
            return None;
        };

        let task = Task::new(title, request.description, request.priority, &self.clock);
        let id = task.id();
        if let Err(err) = self.repository.append(task) {
            debug!(task_id = %id, error = %err, "ignored task creation");
            return None;
        }
        debug!(task_id = %id, "created task");
        Some(id)
    }

    /// Removes the task with `id`, returning it. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.repository.remove(id);
        if removed.is_some() {
            debug!(task_id = %id, "deleted task");
        } else {
            debug!(task_id = %id, "ignored deletion of unknown task");
        }
        removed
    }

    /// Sets the status of the task with `id`. Unknown ids are ignored.
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> Option<&Task> {
        let Some(task) = self.repository.find_by_id_mut(id) else {
            debug!(task_id = %id, %status, "ignored move of unknown task");
            return None;
        };
        task.set_status(status);
        debug!(task_id = %id, %status, "moved task");
        Some(&*task)
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns `None`, leaving the task untouched, when the id is unknown
    /// or the patch carries a blank title.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Option<&Task> {
        let Some(task) = self.repository.find_by_id_mut(id) else {
            debug!(task_id = %id, "ignored update of unknown task");
            return None;
        };
        if let Err(err) = task.apply(patch) {
            debug!(task_id = %id, error = %err, "ignored task update");
            return None;
        }
        debug!(task_id = %id, "updated task");
        Some(&*task)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.repository.find_by_id(id)
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        self.repository.list()
    }

    /// Returns the number of tasks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
