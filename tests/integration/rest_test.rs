//! Integration tests for the REST surface.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use helpers::{PASSWORD, TestApp, id_of};
use jobboard_auth::{Claims, JwtEncoder};
use jobboard_core::types::UserId;

#[tokio::test]
async fn test_owner_flow_and_foreign_access() {
    let app = TestApp::new();

    let signup = app
        .signup("Diwakar", "diwakar@email.com", "password")
        .await;
    assert_eq!(signup.status, StatusCode::OK);
    assert_eq!(signup.body["name"], "Diwakar");
    assert_eq!(signup.body["email"], "diwakar@email.com");
    assert!(signup.body.get("password").is_none());
    assert!(signup.body.get("password_hash").is_none());

    let token = app.login("diwakar@email.com", "password").await;

    let company = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "TEKsystem", "founded_year": 2016, "location": "USA" })),
            Some(&token),
        )
        .await;
    assert_eq!(company.status, StatusCode::OK);
    assert_eq!(company.body["company_name"], "TEKsystem");
    assert_eq!(company.body["owner_id"], signup.body["id"]);
    let company_id = id_of(&company.body);

    let job = app
        .request(
            "POST",
            &format!("/createjob/{company_id}/jobs"),
            Some(json!({ "title": "Rust Developer", "experience_required": "Senior" })),
            Some(&token),
        )
        .await;
    assert_eq!(job.status, StatusCode::CREATED);
    assert_eq!(job.body["company_id"], company_id.as_str());
    assert_eq!(job.body["experience_level"], "Senior");

    let other = app.register("Mallory", "mallory@email.com").await;
    let view = app
        .request("POST", &format!("/viewcompany/{company_id}"), None, Some(&other))
        .await;
    assert_eq!(view.status, StatusCode::FORBIDDEN);
    assert_eq!(view.error_code(), Some("FORBIDDEN"));

    let post = app
        .request(
            "POST",
            &format!("/createjob/{company_id}/jobs"),
            Some(json!({ "title": "Sneaky", "experience_level": "Junior" })),
            Some(&other),
        )
        .await;
    assert_eq!(post.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("Ada", "ada@email.com").await;

    let again = app.signup("Ada Again", "ADA@email.com", PASSWORD).await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.error_code(), Some("DUPLICATE_EMAIL"));
}

#[tokio::test]
async fn test_signup_rejects_invalid_input() {
    let app = TestApp::new();

    let bad_email = app.signup("Ada", "not-an-email", PASSWORD).await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.error_code(), Some("VALIDATION_ERROR"));

    let short = app.signup("Ada", "ada@email.com", "short").await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let malformed = app
        .raw_request("POST", "/signup", "{not json".to_string(), None)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("Ada", "ada@email.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "ada@email.com", "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "nobody@email.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.error_code(), Some("INVALID_CREDENTIALS"));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new();
    let id = Uuid::now_v7();

    let routes = [
        ("POST", "/addcompany".to_string()),
        ("POST", "/viewcompanyall".to_string()),
        ("POST", format!("/viewcompany/{id}")),
        ("GET", format!("/viewcompany/{id}")),
        ("POST", format!("/createjob/{id}/jobs")),
        ("POST", "/viewjoball".to_string()),
        ("POST", format!("/viewjobbyid/{id}/jobs")),
    ];

    for (method, path) in routes {
        let response = app.request(method, &path, Some(json!({})), None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path}: {:?}",
            response.body
        );
        assert_eq!(response.error_code(), Some("UNAUTHENTICATED"));
    }
}

#[tokio::test]
async fn test_bad_credentials_are_unauthenticated() {
    let app = TestApp::new();

    let garbage = app
        .request("POST", "/viewcompanyall", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let wrong_scheme = app
        .raw_request(
            "POST",
            "/viewcompanyall",
            String::new(),
            Some("Basic dXNlcjpwYXNz"),
        )
        .await;
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let signup = app.signup("Ada", "ada@email.com", PASSWORD).await;
    let user_id: UserId = id_of(&signup.body).parse().expect("user id");

    let issued = Utc::now() - chrono::Duration::hours(2);
    let claims = Claims {
        sub: user_id,
        iat: issued.timestamp(),
        exp: (issued + chrono::Duration::hours(1)).timestamp(),
        jti: Uuid::new_v4(),
    };
    let token = JwtEncoder::new(&app.config.auth)
        .encode(&claims)
        .expect("encode");

    let response = app
        .request("POST", "/viewcompanyall", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;
    let missing = Uuid::now_v7();

    let unknown_company = app
        .request("POST", &format!("/viewcompany/{missing}"), None, Some(&token))
        .await;
    assert_eq!(unknown_company.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown_company.error_code(), Some("NOT_FOUND"));

    let unknown_job = app
        .request("POST", &format!("/viewjobbyid/{missing}/jobs"), None, Some(&token))
        .await;
    assert_eq!(unknown_job.status, StatusCode::NOT_FOUND);

    let job_under_unknown = app
        .request(
            "POST",
            &format!("/createjob/{missing}/jobs"),
            Some(json!({ "title": "Ghost", "experience_level": "Any" })),
            Some(&token),
        )
        .await;
    assert_eq!(job_under_unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("POST", "/viewcompany/42", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_add_company_requires_fields() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let missing = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "location": "USA" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error_code(), Some("VALIDATION_ERROR"));

    let bad_year = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "Acme", "founded_year": 99, "location": "USA" })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_year.status, StatusCode::BAD_REQUEST);

    let listed = app
        .request("POST", "/viewcompanyall", None, Some(&token))
        .await;
    assert_eq!(listed.body["companies"], json!([]));
}

#[tokio::test]
async fn test_listings_are_scoped_to_owner() {
    let app = TestApp::new();
    let ada = app.register("Ada", "ada@email.com").await;
    let bob = app.register("Bob", "bob@email.com").await;

    let first = app.add_company(&ada, "First").await;
    let second = app.add_company(&ada, "Second").await;
    let theirs = app.add_company(&bob, "Theirs").await;

    app.create_job(&ada, &first, "Engineer").await;
    app.create_job(&ada, &second, "Designer").await;
    app.create_job(&bob, &theirs, "Manager").await;

    let companies = app
        .request("POST", "/viewcompanyall", None, Some(&ada))
        .await;
    assert_eq!(companies.status, StatusCode::OK);
    let names: Vec<_> = companies.body["companies"]
        .as_array()
        .expect("companies array")
        .iter()
        .map(|c| c["company_name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);

    let jobs = app.request("POST", "/viewjoball", None, Some(&ada)).await;
    assert_eq!(jobs.status, StatusCode::OK);
    let titles: Vec<_> = jobs.body["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .map(|j| j["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Engineer", "Designer"]);

    let bob_jobs = app.request("POST", "/viewjoball", None, Some(&bob)).await;
    assert_eq!(bob_jobs.body["jobs"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_company_jobs_and_job_view() {
    let app = TestApp::new();
    let ada = app.register("Ada", "ada@email.com").await;
    let bob = app.register("Bob", "bob@email.com").await;

    let company = app.add_company(&ada, "Acme").await;
    let job = app.create_job(&ada, &company, "Engineer").await;

    let jobs = app
        .request("GET", &format!("/viewcompany/{company}"), None, Some(&ada))
        .await;
    assert_eq!(jobs.status, StatusCode::OK);
    assert_eq!(jobs.body.as_array().map(Vec::len), Some(1));
    assert_eq!(jobs.body[0]["id"], job.as_str());

    let view = app
        .request("POST", &format!("/viewjobbyid/{job}/jobs"), None, Some(&ada))
        .await;
    assert_eq!(view.status, StatusCode::OK);
    assert_eq!(view.body["title"], "Engineer");

    let foreign = app
        .request("POST", &format!("/viewjobbyid/{job}/jobs"), None, Some(&bob))
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let foreign_list = app
        .request("GET", &format!("/viewcompany/{company}"), None, Some(&bob))
        .await;
    assert_eq!(foreign_list.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}

#[tokio::test]
async fn test_token_for_unknown_user_cannot_create_company() {
    let app = TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "Orphan", "founded_year": 2016, "location": "USA" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHENTICATED"));
    assert!(app.store.list_companies().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_unparseable_body_is_rejected_before_authentication() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "Acme", "founded_year": "abc", "location": "USA" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_blank_company_name_is_rejected() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let response = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "   ", "founded_year": 2016, "location": "USA" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}
