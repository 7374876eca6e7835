//! Task board core.
//!
//! The board keeps tasks in three fixed workflow columns. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, projection, draft and edit services in [`services`]
//!
//! [`session::BoardSession`] ties these together for one UI session and
//! hands the presentation layer a [`snapshot::BoardSnapshot`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod session;
pub mod snapshot;
