//! In-memory adapters. The board holds state only for one session.

mod task;

pub use task::InMemoryTaskRepository;
