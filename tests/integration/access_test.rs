//! Integration tests for route access control.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_unknown_route_is_forbidden_for_everyone() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let visitor = app.request("GET", "/v3/whatever", None, None).await;
    assert_eq!(visitor.status, StatusCode::FORBIDDEN);
    assert_eq!(visitor.body["error"], "FORBIDDEN");

    let admin = app
        .request("GET", "/v3/whatever", None, Some(&admin))
        .await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_allowed_but_unrouted_path_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", "/v2/anything", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/v2/anything", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_public_path_open_to_visitors() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/public", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/public", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("POST", "/v2/public/upload", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_space_prefix_needs_a_regular_user() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.create_user(&admin, "alice", "alice-pwd", "user").await;
    let user = app.login("alice", "alice-pwd").await;

    let response = app
        .request("POST", "/v2/my/whatever", None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/v2/my/whatever", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_routes_closed_to_users() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.create_user(&admin, "alice", "alice-pwd", "user").await;
    let user = app.login("alice", "alice-pwd").await;

    for (method, path) in [
        ("GET", "/v1/users/list"),
        ("GET", "/v1/roles/list"),
        ("POST", "/v1/users/"),
        ("PATCH", "/v1/users/pwd/force-set"),
    ] {
        let response = app.request(method, path, None, Some(&user)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
    }

    let response = app
        .request("GET", "/v1/users/list", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_custom_role_has_no_routes() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let response = app
        .request(
            "POST",
            "/v1/roles/",
            Some(serde_json::json!({ "role": "auditor" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    app.create_user(&admin, "carol", "carol-pwd", "auditor").await;
    let token = app.login("carol", "carol-pwd").await;

    let response = app
        .request("GET", "/v1/users/self", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app
        .request("OPTIONS", "/v1/settings/health", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

const FRONTEND: &str = "https://files.example.com";

async fn cross_origin_app() -> TestApp {
    TestApp::with_config(|config| {
        config.server.cors.allowed_origins = vec![FRONTEND.to_string()];
        config.server.cors.allowed_headers = vec!["content-type".to_string()];
        config.server.cors.allow_credentials = true;
    })
    .await
}

#[tokio::test]
async fn test_cross_origin_preflight_allows_credentials() {
    let app = cross_origin_app().await;

    let response = app
        .request_with_headers(
            "OPTIONS",
            "/v1/users/login",
            None,
            None,
            &[
                ("origin", FRONTEND),
                ("access-control-request-method", "POST"),
                ("access-control-request-headers", "content-type"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["access-control-allow-origin"],
        FRONTEND
    );
    assert_eq!(response.headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cross_origin_session_request_allows_credentials() {
    let app = cross_origin_app().await;
    let token = app.login_admin().await;

    let response = app
        .request_with_headers(
            "GET",
            "/v1/users/isauthed",
            None,
            Some(&token),
            &[("origin", FRONTEND)],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["access-control-allow-origin"],
        FRONTEND
    );
    assert_eq!(response.headers["access-control-allow-credentials"], "true");

    let other = app
        .request_with_headers(
            "GET",
            "/v1/users/isauthed",
            None,
            Some(&token),
            &[("origin", "https://evil.example.com")],
        )
        .await;
    assert!(other.headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_default_cors_sends_no_credentials() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers("GET", "/", None, None, &[("origin", FRONTEND)])
        .await;
    assert_eq!(response.headers["access-control-allow-origin"], "*");
    assert!(response.headers.get("access-control-allow-credentials").is_none());
}
