//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, CORS, security headers and request tracing.

pub mod cors;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;
