//! Taskboard: the state model of a three-column task board.
//!
//! This crate holds the tasks of one board session, derives the per-column
//! views the presentation layer renders, and buffers the add-task form
//! until it is committed. It performs no I/O and keeps no state beyond the
//! session object.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task store, column projection, draft buffer and session

pub mod board;
