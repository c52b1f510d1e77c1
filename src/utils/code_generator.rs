//! Short code generation and validation utilities.
//!
//! Generated codes use an alphabet without look-alike characters so that links
//! survive being read aloud or retyped. Custom codes are checked against a
//! broader URL-safe character set.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Alphanumerics minus `0`, `O`, `o`, `1`, `I` and `l`.
pub const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Maximum accepted length of a custom code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Codes that would shadow service routes.
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Generates a random short code of `length` characters from [`CODE_ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Compiled pattern for the custom code character set.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Returns `true` if every character is a letter, digit, hyphen or underscore.
fn is_valid_code_charset(code: &str) -> bool {
    CUSTOM_CODE_REGEX.is_match(code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !is_valid_code_charset(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.iter().any(|r| r.eq_ignore_ascii_case(code)) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
