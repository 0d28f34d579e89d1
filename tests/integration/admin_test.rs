//! Integration tests for the authorization filter and admin details.

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{EncodingKey, Header, encode};

use estatehub_auth::jwt::claims::Claims;
use estatehub_auth::jwt::encoder::TokenEncoder;
use estatehub_entity::admin::AdminStatus;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_details_success() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Active)
        .await;
    let token = app.login("a@x.com", "p1").await;

    let response = app
        .request("GET", "/admin/getadmindetails", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/email").unwrap().as_str(),
        Some("a@x.com")
    );
    assert_eq!(
        response.body.pointer("/data/name").unwrap().as_str(),
        Some("Ann")
    );
    assert!(response.body.pointer("/data/password").is_none());
}

#[tokio::test]
async fn test_details_missing_header() {
    let app = TestApp::new();

    let response = app.request("GET", "/admin/getadmindetails", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_details_malformed_header() {
    let app = TestApp::new();

    let req = http::Request::builder()
        .method("GET")
        .uri("/admin/getadmindetails")
        .header("Authorization", "Token abc")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_details_invalid_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/admin/getadmindetails", None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_details_tampered_token() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Active)
        .await;
    let token = app.login("a@x.com", "p1").await;

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .request("GET", "/admin/getadmindetails", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_details_expired_token() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Active)
        .await;

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "a@x.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app.config.auth.jwt_secret.as_bytes()),
    )
    .unwrap();

    let response = app
        .request("GET", "/admin/getadmindetails", None, Some(&token))
        .await;

    // Expired and invalid tokens are indistinguishable at this boundary.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("message").unwrap().as_str(),
        Some("Invalid or expired token")
    );
}

#[tokio::test]
async fn test_details_account_gone_after_issuance() {
    let app = TestApp::new();

    // A validly signed token whose account was never stored (or has since
    // been removed) authenticates but resolves to 404.
    let encoder = TokenEncoder::new(&app.config.auth);
    let issued = encoder.issue("ghost@x.com").unwrap();

    let response = app
        .request("GET", "/admin/getadmindetails", None, Some(&issued.token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
