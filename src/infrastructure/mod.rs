//! Infrastructure layer for external integrations.
//!
//! Implements the storage contracts defined by the domain layer.
//!
//! - [`persistence`] - SQLite pool, migrations and repository implementations

pub mod persistence;
