//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and validity configuration.
///
/// The signing secret is loaded once at startup and never rotated at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token validity window in minutes, applied at issuance.
    #[serde(default = "default_token_validity")]
    pub token_validity_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_validity_minutes: default_token_validity(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_validity() -> u64 {
    60
}
