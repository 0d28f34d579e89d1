//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use estatehub_auth::jwt::decoder::TokenDecoder;
use estatehub_auth::service::AuthService;
use estatehub_core::config::AppConfig;

/// Passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks; everything
/// here is read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token verifier used by the authorization filter.
    pub token_decoder: Arc<TokenDecoder>,
    /// Credential authentication service.
    pub auth_service: Arc<AuthService>,
}
