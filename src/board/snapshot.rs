//! Read-only board view handed to the presentation layer.

use crate::board::{
    config::BoardConfig,
    domain::{Task, TaskId, TaskPriority, TaskStatus},
    services::{DraftFields, project},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Display form of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Display priority.
    pub priority: TaskPriority,
    /// Color tag for the priority badge.
    pub priority_color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Creation date for the calendar badge.
    pub created_on: NaiveDate,
}

impl TaskView {
    fn new(task: &Task, config: &BoardConfig) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description: task.description().to_owned(),
            status: task.status(),
            priority: task.priority(),
            priority_color: config.priority_colors.color(task.priority()).to_owned(),
            created_at: task.created_at(),
            created_on: task.created_at().date_naive(),
        }
    }
}

/// A status a column's tasks can be moved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveTarget {
    /// Destination status.
    pub status: TaskStatus,
    /// Destination column label.
    pub label: String,
}

/// Display form of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Column status.
    pub status: TaskStatus,
    /// Column heading.
    pub label: String,
    /// Column color tag.
    pub color: String,
    /// Number of tasks in the column.
    pub count: usize,
    /// Tasks in the column, in insertion order.
    pub tasks: Vec<TaskView>,
    /// Other columns, in board order.
    pub move_targets: Vec<MoveTarget>,
}

/// One entry of the priority selector, lowest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityOption {
    /// Selectable priority.
    pub priority: TaskPriority,
    /// Color tag for the priority badge.
    pub color: String,
}

/// Full board state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Every task in insertion order.
    pub tasks: Vec<TaskView>,
    /// The three columns in board order.
    pub columns: Vec<ColumnView>,
    /// Open add-task form, if any.
    pub draft: Option<DraftFields>,
    /// Task currently being edited, if any.
    pub editing: Option<TaskId>,
    /// Priorities offered by the add-task and edit forms.
    pub priority_options: Vec<PriorityOption>,
}

impl BoardSnapshot {
    pub(crate) fn build(
        tasks: &[Task],
        config: &BoardConfig,
        draft: Option<&DraftFields>,
        editing: Option<TaskId>,
    ) -> Self {
        let columns = config
            .columns()
            .into_iter()
            .map(|column| {
                let column_tasks: Vec<TaskView> = project(tasks, column.status())
                    .map(|task| TaskView::new(task, config))
                    .collect();
                let move_targets = column
                    .status()
                    .move_targets()
                    .into_iter()
                    .map(|status| MoveTarget {
                        status,
                        label: config.columns.style(status).label.clone(),
                    })
                    .collect();
                ColumnView {
                    status: column.status(),
                    label: column.label().to_owned(),
                    color: column.color().to_owned(),
                    count: column_tasks.len(),
                    tasks: column_tasks,
                    move_targets,
                }
            })
            .collect();

        Self {
            tasks: tasks.iter().map(|task| TaskView::new(task, config)).collect(),
            columns,
            draft: draft.cloned(),
            editing,
            priority_options: TaskPriority::ALL
                .into_iter()
                .map(|priority| PriorityOption {
                    priority,
                    color: config.priority_colors.color(priority).to_owned(),
                })
                .collect(),
        }
    }

    /// Returns the column view for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Renders the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if rendering fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
