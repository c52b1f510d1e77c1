//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Business rules live in [`crate::application::services`].
//!
//! # Record Lifecycle
//!
//! 1. Created by [`crate::application::services::AllocatorService`]
//! 2. Read and hit (click count incremented) any number of times
//! 3. Optionally deleted, which is terminal

pub mod entities;
pub mod repositories;
