//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use estatehub_entity::admin::Admin;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Admin account summary for responses. The stored password is never
/// included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminResponse {
    /// Admin ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Account status.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            status: admin.status.to_string(),
            created_at: admin.created_at,
        }
    }
}

/// Login response carrying the issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}
