//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::validate_url;

/// Request to shorten a single URL.
///
/// An empty `customCode` is treated the same as an absent one. Field rules are
/// the ones the allocator enforces, so the HTTP and CLI paths reject the same input.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute URL).
    #[validate(
        required(message = "URL is required"),
        custom(function = "validate_target_url")
    )]
    pub url: Option<String>,

    /// Optional custom short code.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(custom(function = "validate_code"))]
    pub custom_code: Option<String>,
}

fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    validate_url(url).map_err(|e| into_field_error("url", e))
}

fn validate_code(code: &str) -> Result<(), ValidationError> {
    validate_custom_code(code).map_err(|e| into_field_error("custom_code", e))
}

fn into_field_error(code: &'static str, err: AppError) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(err.to_string()))
}
