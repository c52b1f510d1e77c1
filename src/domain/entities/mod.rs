//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short code mapping
//! - [`NewUrlRecord`] - Insert input for the store
//! - [`ShortLink`] - Allocation result carrying the shareable URL
//! - [`BaseUrl`] - Public prefix used to build shareable URLs

pub mod base_url;
pub mod url_record;

pub use base_url::BaseUrl;
pub use url_record::{NewUrlRecord, ShortLink, UrlRecord};
