//! Token creation with configurable signing and validity window.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use estatehub_core::config::auth::AuthConfig;
use estatehub_core::error::AppError;

use super::claims::Claims;

/// Creates signed bearer tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token validity window in minutes.
    validity_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("validity_minutes", &self.validity_minutes)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact signed token string.
    pub token: String,
    /// Expiration timestamp embedded in the token.
    pub expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            validity_minutes: config.token_validity_minutes as i64,
        }
    }

    /// Issues a signed token asserting the given email.
    ///
    /// Expiry is issue-time plus the configured validity window.
    pub fn issue(&self, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.validity_minutes);

        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}
