//! SQLite persistence.
//!
//! - [`database`] - Pool construction and embedded migrations
//! - [`SqliteUrlRepository`] - Implementation of
//!   [`crate::domain::repositories::UrlRepository`]

pub mod database;
pub mod sqlite_url_repository;

pub use database::PoolSettings;
pub use sqlite_url_repository::SqliteUrlRepository;
