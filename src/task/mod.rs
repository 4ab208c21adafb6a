//! Task management for the tasklist service.
//!
//! Tasks are created with a non-blank title, edited, moved through the
//! `Pending`, `InProgress`, and `Completed` statuses, and deleted. Completed
//! tasks keep accepting detail edits but refuse further status changes. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
