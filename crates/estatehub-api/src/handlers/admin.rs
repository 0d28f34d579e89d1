//! Admin self-service handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{AdminResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::AuthAdmin;
use crate::state::AppState;

/// GET /admin/getadmindetails
///
/// The authorization filter has already verified the token; this handler
/// resolves the claimed email to the stored record. 404 if the account no
/// longer exists.
pub async fn get_admin_details(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    let admin = state.auth_service.admin_details(auth.email()).await?;

    Ok(Json(ApiResponse::ok(admin.into())))
}
