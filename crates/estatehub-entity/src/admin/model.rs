//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AdminStatus;

/// A registered admin account in the EstateHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier, assigned by the store.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, matched exactly as stored).
    pub email: String,
    /// Stored password. Plaintext for parity with the system being
    /// replaced; never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
    /// Account status.
    pub status: AdminStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdmin {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password, stored as submitted.
    pub password: String,
    /// Initial account status.
    pub status: AdminStatus,
}

impl CreateAdmin {
    /// Standard registration constructor. The account is always Active.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            status: AdminStatus::Active,
        }
    }

    /// Constructor permitting an arbitrary initial status. Only used when
    /// deliberately seeding accounts outside the registration path.
    pub fn with_status(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        status: AdminStatus,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            status,
        }
    }
}
