//! Integration tests for registration and login.

use http::StatusCode;

use estatehub_entity::admin::AdminStatus;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "name": "Ann",
                "email": "ann@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/email").unwrap().as_str(),
        Some("ann@x.com")
    );
    assert_eq!(
        response.body.pointer("/data/status").unwrap().as_str(),
        Some("active")
    );
    // The stored password must never be echoed back.
    assert!(response.body.pointer("/data/password").is_none());
}

#[tokio::test]
async fn test_register_ignores_supplied_status() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "name": "Ann",
                "email": "ann@x.com",
                "password": "p1",
                "status": "inactive",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/status").unwrap().as_str(),
        Some("active")
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.seed_admin("Ann", "ann@x.com", "p1", AdminStatus::Active)
        .await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "name": "Other",
                "email": "ann@x.com",
                "password": "p2",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "name": "",
                "email": "ann@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Active)
        .await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body.pointer("/data/token").unwrap().as_str().unwrap();
    assert!(!token.is_empty());

    // The issued token must authorize protected routes.
    let details = app
        .request("GET", "/admin/getadmindetails", None, Some(token))
        .await;
    assert_eq!(details.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Active)
        .await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("message").unwrap().as_str(),
        Some("Invalid password")
    );
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "nobody@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("message").unwrap().as_str(),
        Some("Admin not found")
    );
}

#[tokio::test]
async fn test_login_inactive_account() {
    let app = TestApp::new();
    app.seed_admin("Ann", "a@x.com", "p1", AdminStatus::Inactive)
        .await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    // Correct password, so the status is the rejection reason.
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("message").unwrap().as_str(),
        Some("Account is inactive")
    );
}

#[tokio::test]
async fn test_auth_paths_bypass_filter() {
    let app = TestApp::new();

    // No Authorization header anywhere near this request; the /auth prefix
    // must pass through the filter untouched.
    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "name": "Ann",
                "email": "ann@x.com",
                "password": "p1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
