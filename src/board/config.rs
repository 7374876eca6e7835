//! Board configuration: column styles, priority colors and draft defaults.

use crate::board::domain::{Column, ColumnStyle, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading a board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A column label is empty after trimming.
    #[error("column label for '{0}' must not be empty")]
    EmptyColumnLabel(TaskStatus),
}

/// Styles for the three fixed columns.
///
/// Each missing column, label or color keeps its default when parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialColumnStyles")]
pub struct ColumnStyles {
    /// Style of the to-do column.
    pub todo: ColumnStyle,
    /// Style of the in-progress column.
    pub in_progress: ColumnStyle,
    /// Style of the done column.
    pub done: ColumnStyle,
}

impl Default for ColumnStyles {
    fn default() -> Self {
        Self {
            todo: ColumnStyle::new("To Do", "gray"),
            in_progress: ColumnStyle::new("In Progress", "blue"),
            done: ColumnStyle::new("Done", "green"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialColumnStyle {
    label: Option<String>,
    color: Option<String>,
}

impl PartialColumnStyle {
    fn merge_into(self, base: ColumnStyle) -> ColumnStyle {
        ColumnStyle {
            label: self.label.unwrap_or(base.label),
            color: self.color.unwrap_or(base.color),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialColumnStyles {
    todo: PartialColumnStyle,
    in_progress: PartialColumnStyle,
    done: PartialColumnStyle,
}

impl From<PartialColumnStyles> for ColumnStyles {
    fn from(partial: PartialColumnStyles) -> Self {
        let defaults = Self::default();
        Self {
            todo: partial.todo.merge_into(defaults.todo),
            in_progress: partial.in_progress.merge_into(defaults.in_progress),
            done: partial.done.merge_into(defaults.done),
        }
    }
}

impl ColumnStyles {
    /// Returns the style of the column holding `status`.
    #[must_use]
    pub const fn style(&self, status: TaskStatus) -> &ColumnStyle {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

/// Color tags for each priority badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityColors {
    /// Low priority tag.
    pub low: String,
    /// Medium priority tag.
    pub medium: String,
    /// High priority tag.
    pub high: String,
}

impl Default for PriorityColors {
    fn default() -> Self {
        Self {
            low: "gray".to_owned(),
            medium: "yellow".to_owned(),
            high: "red".to_owned(),
        }
    }
}

impl PriorityColors {
    /// Returns the color tag of `priority`.
    #[must_use]
    pub fn color(&self, priority: TaskPriority) -> &str {
        match priority {
            TaskPriority::Low => &self.low,
            TaskPriority::Medium => &self.medium,
            TaskPriority::High => &self.high,
        }
    }
}

/// Presentation and default settings for a board session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Column labels and colors.
    pub columns: ColumnStyles,
    /// Priority badge colors.
    pub priority_colors: PriorityColors,
    /// Priority a freshly opened draft starts with.
    pub default_priority: TaskPriority,
    /// Whether a new session starts with the sample tasks.
    pub seed_sample_tasks: bool,
}

impl BoardConfig {
    /// Parses and validates a JSON configuration document. Missing keys
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed input and
    /// [`BoardConfigError::EmptyColumnLabel`] for a blank column label.
    pub fn from_json_str(input: &str) -> Result<Self, BoardConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every column has a visible label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::EmptyColumnLabel`] naming the first
    /// column, in board order, whose label is blank.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| self.columns.style(*status).label.trim().is_empty())
            .map_or(Ok(()), |status| {
                Err(BoardConfigError::EmptyColumnLabel(status))
            })
    }

    /// Returns the three board columns in order.
    #[must_use]
    pub fn columns(&self) -> [Column; 3] {
        TaskStatus::ALL.map(|status| Column::new(status, self.columns.style(status).clone()))
    }
}
