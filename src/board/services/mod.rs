//! Application services for the task board.

mod draft;
mod editing;
mod projector;
mod store;

pub use draft::{DraftBuffer, DraftField, DraftFields};
pub use editing::EditSession;
pub use projector::{ColumnProjection, count, project, project_all};
pub use store::{CreateTaskRequest, TaskStore};
