//! Domain model for the task board.
//!
//! Tasks, their workflow status and priority, and the fixed column triple
//! live here. Nothing in this module owns a collection of tasks; that is the
//! job of the store in [`crate::board::services`].

mod column;
mod error;
mod ids;
mod patch;
mod priority;
mod task;

pub use column::{Column, ColumnStyle};
pub use error::{BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::{TaskId, TaskTitle};
pub use patch::TaskPatch;
pub use priority::TaskPriority;
pub use task::{Task, TaskStatus};
