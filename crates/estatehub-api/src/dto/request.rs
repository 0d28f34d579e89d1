//! Request DTOs with validation.
//!
//! Validation is intentionally minimal: fields must be present and
//! non-empty. Email format and password strength are not checked anywhere.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
///
/// Any `status` field supplied by the client is ignored; registration
/// always produces an active account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
