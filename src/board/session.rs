//! Board session: the single owner of all board state for one UI session.

use crate::board::{
    adapters::memory::InMemoryTaskRepository,
    config::{BoardConfig, BoardConfigError},
    domain::{Column, Task, TaskId, TaskPatch, TaskPriority, TaskStatus},
    services::{
        CreateTaskRequest, DraftBuffer, DraftField, DraftFields, EditSession, TaskStore, count,
        project,
    },
    snapshot::BoardSnapshot,
};
use mockable::{Clock, DefaultClock};
use tracing::debug;

/// Tasks present on a freshly seeded board, in insertion order.
const SAMPLE_TASKS: [(&str, &str, TaskStatus, TaskPriority); 5] = [
    (
        "Design Homepage",
        "Create wireframes and mockups for the landing page",
        TaskStatus::Done,
        TaskPriority::High,
    ),
    (
        "Setup React Project",
        "Initialize project with Vite, TypeScript, and Tailwind",
        TaskStatus::Done,
        TaskPriority::High,
    ),
    (
        "Build Components",
        "Create reusable UI components for the application",
        TaskStatus::InProgress,
        TaskPriority::Medium,
    ),
    (
        "Add Authentication",
        "Implement user login and registration",
        TaskStatus::Todo,
        TaskPriority::High,
    ),
    (
        "Write Tests",
        "Add unit and integration tests",
        TaskStatus::Todo,
        TaskPriority::Low,
    ),
];

/// Store type owned by a session.
pub type SessionStore<C> = TaskStore<InMemoryTaskRepository, C>;

/// Top-level board state: the task store, the add-task draft and the edit
/// target.
///
/// The presentation layer reads through [`BoardSession::snapshot`] and
/// mutates only through the methods below.
#[derive(Debug, Clone)]
pub struct BoardSession<C: Clock = DefaultClock> {
    config: BoardConfig,
    store: SessionStore<C>,
    draft: DraftBuffer,
    edit: EditSession,
}

impl BoardSession<DefaultClock> {
    /// Creates an empty session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }

    /// Creates a session holding the sample tasks.
    #[must_use]
    pub fn with_sample_tasks() -> Self {
        let mut session = Self::new();
        session.seed_sample_tasks();
        session
    }
}

impl Default for BoardSession<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BoardSession<C> {
    /// Creates an empty session with the default configuration and `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self::assemble(BoardConfig::default(), clock)
    }

    /// Creates a session from `config`, seeding sample tasks when the
    /// configuration asks for them.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError`] when the configuration is invalid.
    pub fn from_config(config: BoardConfig, clock: C) -> Result<Self, BoardConfigError> {
        config.validate()?;
        let seed = config.seed_sample_tasks;
        let mut session = Self::assemble(config, clock);
        if seed {
            session.seed_sample_tasks();
        }
        Ok(session)
    }

    fn assemble(config: BoardConfig, clock: C) -> Self {
        let draft = DraftBuffer::new(config.default_priority);
        Self {
            config,
            store: TaskStore::new(InMemoryTaskRepository::new(), clock),
            draft,
            edit: EditSession::new(),
        }
    }

    fn seed_sample_tasks(&mut self) {
        for (title, description, status, priority) in SAMPLE_TASKS {
            let request = CreateTaskRequest::new(title)
                .with_description(description)
                .with_priority(priority);
            if let Some(id) = self.store.create(request) {
                self.store.move_task(id, status);
            }
        }
        debug!(count = self.store.len(), "seeded sample tasks");
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the three columns in board order.
    #[must_use]
    pub fn columns(&self) -> [Column; 3] {
        self.config.columns()
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Yields the tasks in `status`, in insertion order.
    pub fn project(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        project(self.store.list(), status)
    }

    /// Returns the task count of each column in board order.
    #[must_use]
    pub fn counts(&self) -> [(TaskStatus, usize); 3] {
        TaskStatus::ALL.map(|status| (status, count(self.store.list(), status)))
    }

    /// Builds a fresh snapshot of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::build(
            self.store.list(),
            &self.config,
            self.draft.fields(),
            self.edit.target(),
        )
    }

    /// Creates a task directly. See [`TaskStore::create`].
    pub fn create(&mut self, request: CreateTaskRequest) -> Option<TaskId> {
        self.store.create(request)
    }

    /// Deletes a task. Clears the edit target when it pointed at the
    /// deleted task.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.store.delete(id)?;
        if self.edit.target() == Some(id) {
            self.edit.cancel();
        }
        Some(removed)
    }

    /// Moves a task to `status`. See [`TaskStore::move_task`].
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> Option<&Task> {
        self.store.move_task(id, status)
    }

    /// Merges `patch` into a task. See [`TaskStore::update`].
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Option<&Task> {
        self.store.update(id, patch)
    }

    /// Opens the add-task form with empty fields.
    pub fn begin_draft(&mut self) {
        self.draft.begin();
    }

    /// Edits one field of the open form.
    pub fn set_draft_field(&mut self, field: DraftField) -> bool {
        self.draft.set_field(field)
    }

    /// Discards the open form.
    pub fn cancel_draft(&mut self) {
        self.draft.cancel();
    }

    /// Commits the open form. See [`DraftBuffer::commit`].
    pub fn commit_draft(&mut self) -> Option<TaskId> {
        self.draft.commit(&mut self.store)
    }

    /// Returns the open form's fields, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&DraftFields> {
        self.draft.fields()
    }

    /// Makes `id` the edit target. Unknown ids leave the target unchanged.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if self.store.get(id).is_none() {
            debug!(task_id = %id, "ignored edit of unknown task");
            return false;
        }
        self.edit.begin(id);
        true
    }

    /// Applies `patch` to the edit target and leaves edit mode.
    pub fn save_edit(&mut self, patch: TaskPatch) -> Option<&Task> {
        self.edit.save(&mut self.store, patch)
    }

    /// Leaves edit mode without changes.
    pub const fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Returns the edit target, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        self.edit.target()
    }
}
