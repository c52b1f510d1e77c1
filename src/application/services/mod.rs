//! Business logic services for the application layer.

pub mod allocator_service;
pub mod link_service;

pub use allocator_service::{AllocatorPolicy, AllocatorService};
pub use link_service::LinkService;
