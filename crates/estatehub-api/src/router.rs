//! Route definitions for the EstateHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. The authorization filter wraps every route; paths
//! under `/auth` pass through it unauthenticated.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authorize,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Authenticated admin endpoints
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/getadmindetails",
        get(handlers::admin::get_admin_details),
    )
}
