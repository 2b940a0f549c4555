//! Integration tests for admin user and role management.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_builtin_users_are_seeded() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let response = app
        .request("GET", "/v1/users/list", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 0);
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[1]["id"], 1);
    assert_eq!(users[1]["name"], "visitor");
    assert!(users.iter().all(|u| u.get("pwd").is_none()));
    assert!(app.home_dir(0).join("files").is_dir());
}

#[tokio::test]
async fn test_add_user_provisions_home() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let id = app.create_user(&admin, "alice", "alice-pwd", "user").await;
    assert!(id > 1);
    assert!(app.home_dir(id).join("files").is_dir());
    assert!(app.home_dir(id).join("uploadings").is_dir());

    app.login("alice", "alice-pwd").await;
}

#[tokio::test]
async fn test_add_user_rejections() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    app.create_user(&admin, "alice", "alice-pwd", "user").await;

    for (body, status) in [
        (json!({ "name": "alice", "pwd": "other-pwd", "role": "user" }), StatusCode::CONFLICT),
        (json!({ "name": "a", "pwd": "other-pwd", "role": "user" }), StatusCode::CONFLICT),
        (json!({ "name": "bob", "pwd": "123", "role": "user" }), StatusCode::BAD_REQUEST),
        (json!({ "name": "bob", "pwd": "bob-pwd", "role": "ghost" }), StatusCode::BAD_REQUEST),
        (json!({ "name": "bob", "pwd": "bob-pwd" }), StatusCode::BAD_REQUEST),
    ] {
        let response = app
            .request("POST", "/v1/users/", Some(body.clone()), Some(&admin))
            .await;
        assert_eq!(response.status, status, "{body}");
    }
}

#[tokio::test]
async fn test_delete_user_removes_home() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let id = app.create_user(&admin, "alice", "alice-pwd", "user").await;

    let response = app
        .request("DELETE", &format!("/v1/users/?id={id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.to_string());
    assert!(!app.home_dir(id).exists());

    let again = app
        .request("DELETE", &format!("/v1/users/?id={id}"), None, Some(&admin))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_refusals() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    for (query, status) in [
        ("id=0", StatusCode::FORBIDDEN),
        ("id=1", StatusCode::FORBIDDEN),
        ("id=abc", StatusCode::BAD_REQUEST),
        ("", StatusCode::BAD_REQUEST),
    ] {
        let response = app
            .request("DELETE", &format!("/v1/users/?{query}"), None, Some(&admin))
            .await;
        assert_eq!(response.status, status, "{query}");
    }
    assert!(app.home_dir(0).is_dir());
}

#[tokio::test]
async fn test_admin_can_not_delete_self() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let id = app.create_user(&admin, "second", "second-pwd", "admin").await;
    let second = app.login("second", "second-pwd").await;

    let response = app
        .request("DELETE", &format!("/v1/users/?id={id}"), None, Some(&second))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.home_dir(id).is_dir());
}

#[tokio::test]
async fn test_force_set_password() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let id = app.create_user(&admin, "alice", "alice-pwd", "user").await;
    let other_admin = app.create_user(&admin, "second", "second-pwd", "admin").await;

    let response = app
        .request(
            "PATCH",
            "/v1/users/pwd/force-set",
            Some(json!({ "id": id.to_string(), "newPwd": "reset-pwd" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    app.login("alice", "reset-pwd").await;

    let response = app
        .request(
            "PATCH",
            "/v1/users/pwd/force-set",
            Some(json!({ "id": other_admin.to_string(), "newPwd": "reset-pwd" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    app.login("second", "second-pwd").await;
}

#[tokio::test]
async fn test_set_user_updates_role_and_quota() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;
    let id = app.create_user(&admin, "alice", "alice-pwd", "user").await;

    let response = app
        .request(
            "PATCH",
            "/v1/users/",
            Some(json!({
                "id": id.to_string(),
                "role": "admin",
                "quota": {
                    "spaceLimit": 2048,
                    "uploadSpeedLimit": 10,
                    "downloadSpeedLimit": 20
                }
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", "/v1/users/list", None, Some(&admin))
        .await;
    let users = list.body["users"].as_array().expect("users array");
    let alice = users
        .iter()
        .find(|u| u["name"] == "alice")
        .expect("alice listed");
    assert_eq!(alice["role"], "admin");
    assert_eq!(alice["quota"]["spaceLimit"], 2048);

    // Role changes apply to sessions issued afterwards.
    let token = app.login("alice", "alice-pwd").await;
    let response = app
        .request("GET", "/v1/users/list", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_root_admin_keeps_admin_role() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let response = app
        .request(
            "PATCH",
            "/v1/users/",
            Some(json!({ "id": "0", "role": "user" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_lifecycle() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    let added = app
        .request(
            "POST",
            "/v1/roles/",
            Some(json!({ "role": "auditor" })),
            Some(&admin),
        )
        .await;
    assert_eq!(added.status, StatusCode::OK);

    let list = app
        .request("GET", "/v1/roles/list", None, Some(&admin))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    for role in ["admin", "user", "visitor", "auditor"] {
        assert_eq!(list.body["roles"][role], true, "{role}");
    }

    let deleted = app
        .request(
            "DELETE",
            "/v1/roles/",
            Some(json!({ "role": "auditor" })),
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .request(
            "DELETE",
            "/v1/roles/",
            Some(json!({ "role": "auditor" })),
            Some(&admin),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_predefined_roles_are_fixed() {
    let app = TestApp::new().await;
    let admin = app.login_admin().await;

    for method in ["POST", "DELETE"] {
        let response = app
            .request(method, "/v1/roles/", Some(json!({ "role": "user" })), Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::CONFLICT, "{method}");
    }
}
