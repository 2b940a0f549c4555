//! Integration tests for login, logout, and self-service.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{ADMIN_NAME, ADMIN_PWD, TestApp};

#[tokio::test]
async fn test_login_sets_cookie_and_returns_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": ADMIN_NAME, "pwd": ADMIN_PWD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token");
    let cookie = response.set_cookie().expect("Set-Cookie header");
    assert!(cookie.starts_with(&format!("tk={token}; Path=/")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));

    let authed = app
        .request("GET", "/v1/users/isauthed", None, Some(token))
        .await;
    assert_eq!(authed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new().await;

    let wrong_pwd = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": ADMIN_NAME, "pwd": "not-the-password" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": "nobody", "pwd": ADMIN_PWD })),
            None,
        )
        .await;

    assert_eq!(wrong_pwd.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pwd.body["message"], unknown.body["message"]);
    assert!(wrong_pwd.set_cookie().is_none());
}

#[tokio::test]
async fn test_visitor_account_can_not_log_in() {
    let app = TestApp::new().await;

    let empty = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": "visitor", "pwd": "" })),
            None,
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let guessed = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": "visitor", "pwd": "anything" })),
            None,
        )
        .await;
    assert_eq!(guessed.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_login_body_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "username": ADMIN_NAME })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_requests_without_session_act_as_visitor() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/v1/users/isauthed", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Visitors may reach the self route, but it still needs a session.
    let response = app
        .request("GET", "/v1/users/self", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_ignored() {
    let app = TestApp::new().await;
    let token = app.login_admin().await;

    let mut bytes = token.into_bytes();
    let at = bytes.len() - 5;
    bytes[at] = if bytes[at] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).expect("ascii token");

    let response = app
        .request("GET", "/v1/users/list", None, Some(&tampered))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let app = TestApp::new().await;
    let token = app.login_admin().await;

    let response = app
        .request("POST", "/v1/users/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let cookie = response.set_cookie().expect("Set-Cookie header");
    assert!(cookie.starts_with("tk=; Path=/"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_self_profile() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let id = app.create_user(&admin, "alice", "alice-pwd", "user").await;
    let token = app.login("alice", "alice-pwd").await;

    let response = app
        .request("GET", "/v1/users/self", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.to_string());
    assert_eq!(response.body["name"], "alice");
    assert_eq!(response.body["role"], "user");
    assert_eq!(response.body["usedSpace"], "0");
    assert_eq!(
        response.body["quota"]["spaceLimit"],
        app.config.users.space_limit
    );
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.create_user(&admin, "alice", "alice-pwd", "user").await;
    let token = app.login("alice", "alice-pwd").await;

    let wrong_old = app
        .request(
            "PATCH",
            "/v1/users/pwd",
            Some(json!({ "oldPwd": "guess", "newPwd": "next-pwd" })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong_old.status, StatusCode::FORBIDDEN);

    let same = app
        .request(
            "PATCH",
            "/v1/users/pwd",
            Some(json!({ "oldPwd": "alice-pwd", "newPwd": "alice-pwd" })),
            Some(&token),
        )
        .await;
    assert_eq!(same.status, StatusCode::BAD_REQUEST);

    let changed = app
        .request(
            "PATCH",
            "/v1/users/pwd",
            Some(json!({ "oldPwd": "alice-pwd", "newPwd": "next-pwd" })),
            Some(&token),
        )
        .await;
    assert_eq!(changed.status, StatusCode::OK);

    app.login("alice", "next-pwd").await;
    let old = app
        .request(
            "POST",
            "/v1/users/login",
            Some(json!({ "user": "alice", "pwd": "alice-pwd" })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_set_preferences() {
    let app = TestApp::new().await;
    let token = app.login_admin().await;

    let response = app
        .request(
            "PATCH",
            "/v1/users/preferences",
            Some(json!({ "preferences": { "theme": "dark", "lan": "zh_CN" } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let profile = app
        .request("GET", "/v1/users/self", None, Some(&token))
        .await;
    assert_eq!(profile.body["preferences"]["theme"], "dark");
    assert_eq!(profile.body["preferences"]["lan"], "zh_CN");
}
