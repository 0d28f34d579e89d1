//! Request authorization filter.
//!
//! Every request outside the auth path prefix must carry a valid bearer
//! token. Verified claims are bound to the request for downstream
//! handlers; the account record itself is not fetched here.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use estatehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Routes under this prefix pass through unauthenticated.
const AUTH_PATH_PREFIX: &str = "/auth";

/// Rejects any request to a protected path without a valid bearer token.
///
/// Expired and otherwise-invalid tokens are collapsed into one generic
/// unauthorized response; the caller learns nothing about which check
/// failed.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if request.uri().path().starts_with(AUTH_PATH_PREFIX) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

    let claims = state
        .token_decoder
        .verify(token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
