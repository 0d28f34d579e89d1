//! The authentication gate.
//!
//! Orchestrates registration, login (credential comparison + status check +
//! token issuance), and authenticated account lookup. This service is the
//! sole consumer of the account store and the token encoder.

use std::sync::Arc;

use tracing::{info, warn};

use estatehub_core::error::AppError;
use estatehub_core::result::AppResult;
use estatehub_database::repositories::AdminStore;
use estatehub_entity::admin::{Admin, AdminStatus, CreateAdmin};

use crate::jwt::encoder::{IssuedToken, TokenEncoder};

/// Credential authentication service for admin accounts.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Account persistence.
    store: Arc<dyn AdminStore>,
    /// Token issuer.
    encoder: Arc<TokenEncoder>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(store: Arc<dyn AdminStore>, encoder: Arc<TokenEncoder>) -> Self {
        Self { store, encoder }
    }

    /// Registers a new admin account.
    ///
    /// No duplicate-email pre-check is performed here; uniqueness is the
    /// store's concern and a violation propagates as a conflict.
    pub async fn register(&self, data: &CreateAdmin) -> AppResult<Admin> {
        let admin = self.store.create(data).await?;
        info!(admin_id = %admin.id, email = %admin.email, "Admin registered");
        Ok(admin)
    }

    /// Validates credentials and issues a bearer token.
    ///
    /// The status check runs after the password comparison, so an inactive
    /// account with a wrong password is reported as a credential failure.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let admin = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::validation("Admin not found"))?;

        if password != admin.password {
            warn!(email = %email, "Login rejected: invalid password");
            return Err(AppError::validation("Invalid password"));
        }

        if admin.status == AdminStatus::Inactive {
            warn!(email = %email, "Login rejected: account is inactive");
            return Err(AppError::validation("Account is inactive"));
        }

        let issued = self.encoder.issue(email)?;
        info!(email = %email, expires_at = %issued.expires_at, "Login succeeded");
        Ok(issued)
    }

    /// Looks up the account behind an already-verified identity claim.
    ///
    /// The account may have disappeared since the token was issued; that
    /// case surfaces as not-found, not as an authentication failure.
    pub async fn admin_details(&self, email: &str) -> AppResult<Admin> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))
    }
}
