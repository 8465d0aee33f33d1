//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use jobboard_api::{AppState, build_router};
use jobboard_auth::JwtEncoder;
use jobboard_core::config::AppConfig;
use jobboard_core::types::UserId;
use jobboard_database::{EntityStore, MemoryStore};

pub const PASSWORD: &str = "password";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct assertions
    pub store: Arc<dyn EntityStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig::default();
        let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
        let router = build_router(AppState::build(config.clone(), Arc::clone(&store)));

        Self {
            router,
            store,
            config,
        }
    }

    /// Sign up a user
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/signup",
            Some(json!({ "name": name, "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Login and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Sign up and log in, returning the token
    pub async fn register(&self, name: &str, email: &str) -> String {
        let response = self.signup(name, email, PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "Signup failed: {:?}", response.body);
        self.login(email, PASSWORD).await
    }

    /// Sign a valid token for an arbitrary subject, bypassing login
    pub fn token_for(&self, user_id: UserId) -> String {
        JwtEncoder::new(&self.config.auth)
            .issue(user_id)
            .expect("Failed to issue token")
            .token
    }

    /// Create a company over REST and return its id
    pub async fn add_company(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/addcompany",
                Some(json!({ "company_name": name, "founded_year": 2016, "location": "USA" })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        id_of(&response.body)
    }

    /// Create a job over REST and return its id
    pub async fn create_job(&self, token: &str, company_id: &str, title: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/createjob/{company_id}/jobs"),
                Some(json!({ "title": title, "experience_level": "Senior" })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        id_of(&response.body)
    }

    /// Run a GraphQL operation
    pub async fn graphql(&self, query: &str, variables: Value, token: Option<&str>) -> TestResponse {
        self.request(
            "POST",
            "/graphql",
            Some(json!({ "query": query, "variables": variables })),
            token,
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.raw_request(
            method,
            path,
            body.map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
                .unwrap_or_default(),
            token.map(|t| format!("Bearer {t}")).as_deref(),
        )
        .await
    }

    /// Make a request with a literal body and `Authorization` value
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Extract the `id` field of an entity body
pub fn id_of(body: &Value) -> String {
    body.get("id")
        .and_then(|v| v.as_str())
        .expect("No id in response")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of a REST error body
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(|v| v.as_str())
    }

    /// The `extensions.code` of the first GraphQL error
    pub fn graphql_code(&self) -> Option<&str> {
        self.body
            .get("errors")?
            .get(0)?
            .get("extensions")?
            .get("code")?
            .as_str()
    }
}
