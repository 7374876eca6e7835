//! Port contracts for the task board.
//!
//! Ports define storage-agnostic interfaces used by board services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
