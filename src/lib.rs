//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite. Long URLs are
//! mapped to short codes; visiting a short code redirects to the original URL
//! and increments its click counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `UrlRecord` entity and the storage trait
//! - **Application Layer** ([`application`]) - Code allocation and link services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="http://localhost:5000"
//!
//! cargo run
//! ```
//!
//! Migrations are embedded and applied on startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
