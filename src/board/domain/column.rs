//! Board columns: fixed configuration, not mutable state.

use super::TaskStatus;
use serde::{Deserialize, Serialize};

/// Display label and color tag for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStyle {
    /// Human-readable column heading.
    pub label: String,
    /// Presentation color tag.
    pub color: String,
}

impl ColumnStyle {
    /// Creates a column style.
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// One of the three board columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    status: TaskStatus,
    style: ColumnStyle,
}

impl Column {
    /// Creates the column for `status`.
    #[must_use]
    pub const fn new(status: TaskStatus, style: ColumnStyle) -> Self {
        Self { status, style }
    }

    /// Returns the status whose tasks this column holds.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.style.label
    }

    /// Returns the column color tag.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.style.color
    }
}
