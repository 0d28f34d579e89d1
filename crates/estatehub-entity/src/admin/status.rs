//! Admin account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status for an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "admin_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    /// Account is active and can log in.
    Active,
    /// Account is deactivated and login is refused.
    Inactive,
}

impl AdminStatus {
    /// Check if the account can log in with this status.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Default for AdminStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminStatus {
    type Err = estatehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(estatehub_core::AppError::validation(format!(
                "Invalid admin status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}
