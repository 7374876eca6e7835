//! Draft buffer for the add-task form.

use super::{CreateTaskRequest, TaskStore};
use crate::board::{
    domain::{TaskId, TaskPriority, TaskTitle},
    ports::TaskRepository,
};
use mockable::Clock;
use serde::Serialize;
use tracing::debug;

/// Field values of an uncommitted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftFields {
    /// Title as typed so far; not validated until commit.
    pub title: String,
    /// Description as typed so far.
    pub description: String,
    /// Selected priority.
    pub priority: TaskPriority,
}

impl DraftFields {
    const fn empty(priority: TaskPriority) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority,
        }
    }
}

/// A single-field edit of the draft form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    /// Replaces the title.
    Title(String),
    /// Replaces the description.
    Description(String),
    /// Replaces the priority.
    Priority(TaskPriority),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DraftState {
    Closed,
    Editing(DraftFields),
}

/// Holds the add-task form until it is committed or cancelled.
///
/// The buffer knows nothing about existing tasks. [`DraftBuffer::commit`]
/// is the only path from a draft into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftBuffer {
    state: DraftState,
    default_priority: TaskPriority,
}

impl Default for DraftBuffer {
    fn default() -> Self {
        Self::new(TaskPriority::default())
    }
}

impl DraftBuffer {
    /// Creates a closed buffer whose drafts start at `default_priority`.
    #[must_use]
    pub const fn new(default_priority: TaskPriority) -> Self {
        Self {
            state: DraftState::Closed,
            default_priority,
        }
    }

    /// Opens the form with every field reset.
    pub fn begin(&mut self) {
        self.state = DraftState::Editing(DraftFields::empty(self.default_priority));
    }

    /// Returns `true` while the form is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, DraftState::Editing(_))
    }

    /// Returns the current field values while the form is open.
    #[must_use]
    pub const fn fields(&self) -> Option<&DraftFields> {
        match &self.state {
            DraftState::Editing(fields) => Some(fields),
            DraftState::Closed => None,
        }
    }

    /// Replaces one field. Ignored, returning `false`, while closed.
    pub fn set_field(&mut self, field: DraftField) -> bool {
        let DraftState::Editing(fields) = &mut self.state else {
            debug!("ignored draft edit while the form is closed");
            return false;
        };
        match field {
            DraftField::Title(title) => fields.title = title,
            DraftField::Description(description) => fields.description = description,
            DraftField::Priority(priority) => fields.priority = priority,
        }
        true
    }

    /// Discards the draft and closes the form.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            debug!("cancelled task draft");
        }
        self.state = DraftState::Closed;
    }

    /// Promotes the draft into `store`.
    ///
    /// On success the form closes and the new task identifier is returned.
    /// A blank title keeps the form open with its fields intact and leaves
    /// the store untouched.
    pub fn commit<R, C>(&mut self, store: &mut TaskStore<R, C>) -> Option<TaskId>
    where
        R: TaskRepository,
        C: Clock,
    {
        let DraftState::Editing(fields) = &self.state else {
            debug!("ignored draft commit while the form is closed");
            return None;
        };
        if TaskTitle::new(fields.title.as_str()).is_err() {
            debug!("kept draft open: title is blank");
            return None;
        }

        let request = CreateTaskRequest::new(fields.title.as_str())
            .with_description(fields.description.as_str())
            .with_priority(fields.priority);
        let id = store.create(request)?;
        self.state = DraftState::Closed;
        Some(id)
    }
}
