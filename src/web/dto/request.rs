//! Request DTOs for the Quill web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{no_control_chars, not_empty_trimmed};

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(custom(function = not_empty_trimmed))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(
        length(min = 3, max = 30, message = "Username must be 3-30 characters"),
        custom(function = no_control_chars)
    )]
    pub username: String,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Page number query parameter for listing endpoints.
///
/// The raw string is kept so non-numeric values fall back to the first
/// page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Requested page number.
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Parse the requested page number, if it is a valid integer.
    pub fn number(&self) -> Option<u64> {
        self.page.as_deref().and_then(|p| p.parse().ok())
    }
}
