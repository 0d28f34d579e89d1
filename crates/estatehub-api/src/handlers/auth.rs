//! Auth handlers — register and login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use estatehub_core::error::AppError;
use estatehub_entity::admin::CreateAdmin;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AdminResponse, ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/register
///
/// The submitted record is stored as-is (no duplicate pre-check here) and
/// the account always starts Active.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let admin = state
        .auth_service
        .register(&CreateAdmin::new(req.name, req.email, req.password))
        .await?;

    Ok(Json(ApiResponse::ok(admin.into())))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    })))
}
