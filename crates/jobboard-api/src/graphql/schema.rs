//! Schema construction and the HTTP endpoint.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Error, ErrorExtensionValues, ErrorExtensions, Schema};
use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_service::BoardService;

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::error::public_message;
use crate::extractors::CurrentPrincipal;
use crate::state::AppState;

/// The job board GraphQL schema.
pub type BoardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the board service as shared data.
pub fn build_schema(board: Arc<BoardService>) -> BoardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(board)
        .finish()
}

/// Converts a domain error into a GraphQL error with a `code` extension.
pub(crate) fn gql_error(err: AppError) -> Error {
    let code = err.kind.code();
    Error::new(public_message(&err)).extend_with(|_, ext| ext.set("code", code))
}

/// Tags errors raised before any resolver ran with `VALIDATION_ERROR`.
///
/// Parse failures and argument or variable coercion failures come from the
/// executor itself and carry no code; resolver errors already have one.
pub(crate) fn tag_request_errors(response: &mut async_graphql::Response) {
    for error in &mut response.errors {
        let extensions = error
            .extensions
            .get_or_insert_with(ErrorExtensionValues::default);
        if extensions.get("code").is_none() {
            extensions.set("code", ErrorKind::Validation.code());
        }
    }
}

/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let mut response = state.schema.execute(request.data(principal)).await;
    tag_request_errors(&mut response);
    Json(response)
}

/// GET /graphql
pub async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
