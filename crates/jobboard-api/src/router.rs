//! Route definitions for the job board HTTP API.
//!
//! REST routes are mounted at the root, next to `/graphql` and `/health`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::graphql;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let server = &config.server;

    let http_layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(CompressionLayer::new())
        .layer(timeout_layer(server.request_timeout_seconds));

    Router::new()
        .merge(auth_routes())
        .merge(company_routes())
        .merge(job_routes())
        .merge(graphql_routes(server.graphql_playground))
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(http_layers)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Requests running longer than `seconds` are answered with 408
fn timeout_layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(seconds))
}

/// Signup and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
}

/// Company creation, listing, and per-company views
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/addcompany", post(handlers::company::add_company))
        .route(
            "/viewcompanyall",
            post(handlers::company::view_all_companies),
        )
        .route(
            "/viewcompany/{company_id}",
            post(handlers::company::view_company).get(handlers::company::company_jobs),
        )
}

/// Job creation and views
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/createjob/{company_id}/jobs",
            post(handlers::job::create_job),
        )
        .route("/viewjoball", post(handlers::job::view_all_jobs))
        .route("/viewjobbyid/{job_id}/jobs", post(handlers::job::view_job))
}

/// GraphQL endpoint, with the GraphiQL playground when enabled
fn graphql_routes(playground: bool) -> Router<AppState> {
    let route = post(graphql::graphql_handler);
    let route = if playground {
        route.get(graphql::graphql_playground)
    } else {
        route
    };
    Router::new().route("/graphql", route)
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
