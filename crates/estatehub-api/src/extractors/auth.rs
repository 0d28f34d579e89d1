//! `AuthAdmin` extractor — hands verified token claims to handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use estatehub_auth::jwt::claims::Claims;
use estatehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The verified identity claims bound to the request by the authorization
/// filter.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Claims);

impl AuthAdmin {
    /// Returns the authenticated email.
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

impl std::ops::Deref for AuthAdmin {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The authorization filter runs before routing and inserts the
        // verified claims; a miss here means the route is misconfigured
        // outside the filter.
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthAdmin)
            .ok_or_else(|| AppError::unauthorized("Missing authentication context").into())
    }
}
