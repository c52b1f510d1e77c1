//! Target URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Checks that `input` is a syntactically valid absolute URL.
///
/// The URL is stored exactly as given; parsing is only used for validation.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with `"URL is required"` for blank input and
/// `"Invalid URL format"` when parsing fails.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    if input.trim().is_empty() {
        return Err(AppError::bad_request("URL is required", json!({})));
    }

    Url::parse(input).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    Ok(())
}
