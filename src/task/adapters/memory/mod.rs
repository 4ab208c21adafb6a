//! In-memory adapter implementations.
//!
//! Thread-safe storage suitable for tests and for running the service
//! without a database.

mod task;

pub use task::InMemoryTaskRepository;
