//! Shared test helpers for integration tests.
//!
//! The test application is wired against the in-memory admin store so the
//! full router can be exercised without a live database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use estatehub_api::state::AppState;
use estatehub_auth::jwt::decoder::TokenDecoder;
use estatehub_auth::jwt::encoder::TokenEncoder;
use estatehub_auth::service::AuthService;
use estatehub_core::config::AppConfig;
use estatehub_database::repositories::{AdminStore, MemoryAdminStore};
use estatehub_entity::admin::{Admin, AdminStatus, CreateAdmin};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle to the backing store for seeding
    pub store: Arc<MemoryAdminStore>,
    /// Application config
    pub config: AppConfig,
}

/// Decoded response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` when the body is empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let store = Arc::new(MemoryAdminStore::new());
        let admin_store: Arc<dyn AdminStore> = store.clone();

        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let auth_service = Arc::new(AuthService::new(admin_store, Arc::clone(&token_encoder)));

        let state = AppState {
            config: Arc::new(config.clone()),
            token_decoder,
            auth_service,
        };

        let router = estatehub_api::router::build_router(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Seed an admin account directly into the store
    pub async fn seed_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
        status: AdminStatus,
    ) -> Admin {
        self.store
            .create(&CreateAdmin::with_status(name, email, password, status))
            .await
            .expect("Failed to seed admin")
    }

    /// Login and return the issued bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.request("POST", "/auth/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .pointer("/data/token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
