//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use sharebox_api::AppState;
use sharebox_auth::password::PasswordHasher;
use sharebox_core::config::{AppConfig, SameSitePolicy};
use sharebox_database::MemoryUserRepository;
use sharebox_storage::{LocalProvisioner, TimestampIdGenerator};

pub const ADMIN_NAME: &str = "admin";
pub const ADMIN_PWD: &str = "admin-pwd";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct service access
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
    /// Home folder root, removed on drop
    storage: TempDir,
}

/// A captured response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Create a new test application with seeded built-in users
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Like `new`, with config changes applied before the app is built
    pub async fn with_config(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let storage = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.auth.token_secret = "integration-test-secret".to_string();
        config.cookie.secure = false;
        config.cookie.same_site = SameSitePolicy::Lax;
        config.users.default_admin_name = ADMIN_NAME.to_string();
        config.users.default_admin_pwd = ADMIN_PWD.to_string();
        config.storage.root = storage.path().to_string_lossy().into_owned();
        customize(&mut config);
        config.validate().expect("Test config must be valid");

        let provisioner = Arc::new(
            LocalProvisioner::new(storage.path())
                .await
                .expect("Failed to init storage"),
        );
        let hasher = Arc::new(PasswordHasher::with_cost(1024, 1).expect("Hasher params"));

        let state = AppState::build(
            config.clone(),
            Arc::new(MemoryUserRepository::new()),
            provisioner,
            Arc::new(TimestampIdGenerator::new()),
            hasher,
        );
        state
            .admin_user_service
            .ensure_builtin_users()
            .await
            .expect("Failed to seed users");

        let router = sharebox_api::build_app(state.clone());

        Self {
            router,
            state,
            config,
            storage,
        }
    }

    /// Send a request, optionally with a JSON body and a session token cookie
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, token, &[])
            .await
    }

    /// Send a request with extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("tk={token}"));
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("Failed to build request"))
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Log in and return the session token
    pub async fn login(&self, name: &str, pwd: &str) -> String {
        let response = self
            .request(
                "POST",
                "/v1/users/login",
                Some(json!({ "user": name, "pwd": pwd })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }

    /// Log in as the seeded root admin
    pub async fn login_admin(&self) -> String {
        self.login(ADMIN_NAME, ADMIN_PWD).await
    }

    /// Create a user through the admin API and return its id
    pub async fn create_user(&self, admin_token: &str, name: &str, pwd: &str, role: &str) -> u64 {
        let response = self
            .request(
                "POST",
                "/v1/users/",
                Some(json!({ "name": name, "pwd": pwd, "role": role })),
                Some(admin_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "add user failed: {:?}", response.body);
        response.body["id"]
            .as_str()
            .expect("id in add user response")
            .parse()
            .expect("numeric id")
    }

    /// Path of a user's home folder
    pub fn home_dir(&self, id: u64) -> PathBuf {
        self.storage.path().join(id.to_string())
    }
}
