//! JWT claims structure embedded in every issued token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// JWT claims payload.
///
/// The token asserts exactly one identity claim: the holder's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the admin's email.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the email from the subject claim.
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
