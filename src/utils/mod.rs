//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random short code generation and custom code validation
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod url_validator;
