//! Shared test helpers for integration tests.
//!
//! Every `TestApp` runs the real router over a fresh in-memory store and a
//! private upload directory, so tests need no external database and can run
//! in parallel.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use jobportal_api::{AppState, build_app};
use jobportal_auth::PasswordHasher;
use jobportal_core::config::AppConfig;
use jobportal_database::{Database, UserStore};
use jobportal_entity::user::{CreateUser, UserRole};

/// Password used for every account created by the helpers.
pub const PASSWORD: &str = "password123";

const BOUNDARY: &str = "jobportal-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct store access
    pub state: AppState,
    /// Upload root, removed on drop
    pub upload_root: PathBuf,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let upload_root = std::env::temp_dir().join(format!("jobportal-test-{}", Uuid::new_v4()));

        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.uploads.root_dir = upload_root.to_string_lossy().into_owned();

        let state = AppState::new(config, Database::memory());
        let router = build_app(state.clone());

        Self {
            router,
            state,
            upload_root,
        }
    }

    /// Insert an account directly, bypassing registration rules.
    ///
    /// This is the only way to obtain a super-admin.
    pub async fn create_user(&self, name: &str, email: &str, role: UserRole) -> Uuid {
        let password_hash = PasswordHasher::new()
            .hash_password(PASSWORD)
            .expect("Failed to hash password");
        self.state
            .db
            .users()
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Login and return the JWT
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create an account of `role` and return `(id, token)`.
    pub async fn user_with_token(&self, name: &str, role: UserRole) -> (Uuid, String) {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let id = self.create_user(name, &email, role).await;
        let token = self.login(&email).await;
        (id, token)
    }

    /// Post a job as `token` and return its id.
    pub async fn create_job(&self, token: &str, title: &str, salary: Option<f64>) -> String {
        let response = self
            .request(
                "POST",
                "/api/jobs",
                Some(json!({
                    "title": title,
                    "description": format!("{title} wanted for a growing team"),
                    "company": "Acme Corp",
                    "location": "Berlin",
                    "salary": salary,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create job failed: {:?}",
            response.body
        );

        response.body["id"].as_str().expect("No job id").to_string()
    }

    /// Apply to `job_id` with a multipart resume.
    pub async fn apply(
        &self,
        token: &str,
        job_id: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.send_multipart(token, job_id, body).await
    }

    /// Apply with a form that has no `resume` part.
    pub async fn apply_without_resume(&self, token: &str, job_id: &str) -> TestResponse {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             hello\r\n--{BOUNDARY}--\r\n"
        );
        self.send_multipart(token, job_id, body.into_bytes()).await
    }

    async fn send_multipart(&self, token: &str, job_id: &str, body: Vec<u8>) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/applications/apply/{job_id}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Make a JSON HTTP request to the test app
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
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 8 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_root);
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}

/// A minimal byte string that passes as a PDF upload.
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n".to_vec()
}
