//! EstateHub Admin Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use estatehub_api::state::AppState;
use estatehub_auth::jwt::decoder::TokenDecoder;
use estatehub_auth::jwt::encoder::TokenEncoder;
use estatehub_auth::service::AuthService;
use estatehub_core::config::AppConfig;
use estatehub_core::error::AppError;
use estatehub_database::repositories::{AdminRepository, AdminStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("ESTATEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        "Starting EstateHub admin backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = estatehub_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    tracing::info!("Running database migrations...");
    estatehub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let admin_store: Arc<dyn AdminStore> = Arc::new(AdminRepository::new(db_pool.clone()));
    let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&admin_store),
        Arc::clone(&token_encoder),
    ));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        token_decoder,
        auth_service,
    };

    let app = estatehub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("EstateHub admin backend listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("EstateHub admin backend shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
