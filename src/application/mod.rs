//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocator_service::AllocatorService`] - Short code allocation with bounded collision retry
//! - [`services::link_service::LinkService`] - Lookup, listing, deletion and redirect resolution

pub mod services;
