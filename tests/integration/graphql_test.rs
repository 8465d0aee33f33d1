//! Integration tests for the GraphQL surface.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;
use jobboard_core::types::UserId;

const ADD_COMPANY: &str = r#"
    mutation AddCompany($input: NewCompanyInput!) {
        addCompany(input: $input) { id companyName foundedYear location ownerId }
    }
"#;

const CREATE_JOB: &str = r#"
    mutation CreateJob($companyId: ID!, $input: NewJobInput!) {
        createJob(companyId: $companyId, input: $input) { id title experienceLevel companyId }
    }
"#;

const FIND_COMPANY: &str = r#"
    query FindCompany($id: ID!) {
        findCompanyById(id: $id) { id companyName jobs { id title } }
    }
"#;

fn company_input(name: &str) -> serde_json::Value {
    json!({ "input": { "companyName": name, "foundedYear": 2016, "location": "USA" } })
}

#[tokio::test]
async fn test_add_company_and_create_job() {
    let app = TestApp::new();
    let token = app.register("Diwakar", "diwakar@email.com").await;

    let company = app
        .graphql(ADD_COMPANY, company_input("TEKsystem"), Some(&token))
        .await;
    assert_eq!(company.status, StatusCode::OK);
    assert!(company.body.get("errors").is_none(), "{:?}", company.body);
    let created = &company.body["data"]["addCompany"];
    assert_eq!(created["companyName"], "TEKsystem");
    assert_eq!(created["foundedYear"], 2016);
    let company_id = created["id"].as_str().expect("company id").to_string();

    let job = app
        .graphql(
            CREATE_JOB,
            json!({
                "companyId": company_id,
                "input": { "title": "Rust Developer", "experienceLevel": "Senior" }
            }),
            Some(&token),
        )
        .await;
    assert!(job.body.get("errors").is_none(), "{:?}", job.body);
    assert_eq!(job.body["data"]["createJob"]["companyId"], company_id.as_str());

    let found = app
        .graphql(FIND_COMPANY, json!({ "id": company_id }), Some(&token))
        .await;
    let jobs = &found.body["data"]["findCompanyById"]["jobs"];
    assert_eq!(jobs.as_array().map(Vec::len), Some(1));
    assert_eq!(jobs[0]["title"], "Rust Developer");
}

#[tokio::test]
async fn test_rest_and_graphql_see_the_same_records() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let company_id = app.add_company(&token, "Acme").await;
    let job_id = app.create_job(&token, &company_id, "Engineer").await;

    let listed = app
        .graphql(
            "{ allCompanies { id companyName } allJobs { id title companyId } }",
            json!({}),
            Some(&token),
        )
        .await;
    let data = &listed.body["data"];
    assert_eq!(data["allCompanies"][0]["id"], company_id.as_str());
    assert_eq!(data["allJobs"][0]["id"], job_id.as_str());

    let rest_job = app
        .request("POST", &format!("/viewjobbyid/{job_id}/jobs"), None, Some(&token))
        .await;
    let gql_job = app
        .graphql(
            "query Job($id: ID!) { findJobById(id: $id) { id title experienceLevel companyId } }",
            json!({ "id": job_id }),
            Some(&token),
        )
        .await;
    let gql_job = &gql_job.body["data"]["findJobById"];
    assert_eq!(gql_job["title"], rest_job.body["title"]);
    assert_eq!(gql_job["experienceLevel"], rest_job.body["experience_level"]);
    assert_eq!(gql_job["companyId"], rest_job.body["company_id"]);
}

#[tokio::test]
async fn test_anonymous_operations_are_unauthenticated() {
    let app = TestApp::new();

    let query = app.graphql("{ allCompanies { id } }", json!({}), None).await;
    assert_eq!(query.status, StatusCode::OK);
    assert_eq!(query.graphql_code(), Some("UNAUTHENTICATED"));

    let mutation = app
        .graphql(ADD_COMPANY, company_input("Acme"), None)
        .await;
    assert_eq!(mutation.graphql_code(), Some("UNAUTHENTICATED"));

    let garbage_id = app
        .graphql(FIND_COMPANY, json!({ "id": "42" }), None)
        .await;
    assert_eq!(garbage_id.graphql_code(), Some("UNAUTHENTICATED"));

    let bad_token = app
        .graphql("{ allJobs { id } }", json!({}), Some("not.a.token"))
        .await;
    assert_eq!(bad_token.graphql_code(), Some("UNAUTHENTICATED"));
}

#[tokio::test]
async fn test_foreign_company_is_forbidden() {
    let app = TestApp::new();
    let owner = app.register("Ada", "ada@email.com").await;
    let other = app.register("Bob", "bob@email.com").await;
    let company_id = app.add_company(&owner, "Acme").await;

    let view = app
        .graphql(FIND_COMPANY, json!({ "id": company_id }), Some(&other))
        .await;
    assert_eq!(view.graphql_code(), Some("FORBIDDEN"));

    let post = app
        .graphql(
            CREATE_JOB,
            json!({
                "companyId": company_id,
                "input": { "title": "Sneaky", "experienceLevel": "Junior" }
            }),
            Some(&other),
        )
        .await;
    assert_eq!(post.graphql_code(), Some("FORBIDDEN"));

    let jobs = app
        .graphql(
            "query Jobs($id: ID!) { jobsByCompany(companyId: $id) { id } }",
            json!({ "id": company_id }),
            Some(&other),
        )
        .await;
    assert_eq!(jobs.graphql_code(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let missing = app
        .graphql(FIND_COMPANY, json!({ "id": Uuid::now_v7().to_string() }), Some(&token))
        .await;
    assert_eq!(missing.graphql_code(), Some("NOT_FOUND"));

    let malformed = app
        .graphql(FIND_COMPANY, json!({ "id": "42" }), Some(&token))
        .await;
    assert_eq!(malformed.graphql_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_invalid_company_input() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let response = app
        .graphql(
            ADD_COMPANY,
            json!({ "input": { "companyName": "", "foundedYear": 2016, "location": "USA" } }),
            Some(&token),
        )
        .await;
    assert_eq!(response.graphql_code(), Some("VALIDATION_ERROR"));

    let listed = app
        .graphql("{ allCompanies { id } }", json!({}), Some(&token))
        .await;
    assert_eq!(listed.body["data"]["allCompanies"], json!([]));
}

#[tokio::test]
async fn test_token_for_unknown_user_cannot_add_company() {
    let app = TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app
        .graphql(ADD_COMPANY, company_input("Orphan"), Some(&token))
        .await;
    assert_eq!(response.graphql_code(), Some("UNAUTHENTICATED"));
    assert!(app.store.list_companies().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_uncoercible_input_matches_rest() {
    let app = TestApp::new();

    let rest = app
        .request(
            "POST",
            "/addcompany",
            Some(json!({ "company_name": "Acme", "founded_year": "abc", "location": "USA" })),
            None,
        )
        .await;
    let graphql = app
        .graphql(
            ADD_COMPANY,
            json!({ "input": { "companyName": "Acme", "foundedYear": "abc", "location": "USA" } }),
            None,
        )
        .await;

    assert_eq!(rest.error_code(), Some("VALIDATION_ERROR"));
    assert_eq!(graphql.graphql_code(), rest.error_code());

    let inline = app
        .graphql(
            r#"mutation { addCompany(input: { companyName: "Acme", foundedYear: "abc", location: "USA" }) { id } }"#,
            json!({}),
            None,
        )
        .await;
    assert_eq!(inline.graphql_code(), Some("VALIDATION_ERROR"));

    let syntax = app.graphql("{ allCompanies { id ", json!({}), None).await;
    assert_eq!(syntax.graphql_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_blank_company_name_matches_rest() {
    let app = TestApp::new();
    let token = app.register("Ada", "ada@email.com").await;

    let response = app
        .graphql(
            ADD_COMPANY,
            json!({ "input": { "companyName": "  ", "foundedYear": 2016, "location": "USA" } }),
            Some(&token),
        )
        .await;
    assert_eq!(response.graphql_code(), Some("VALIDATION_ERROR"));
}
