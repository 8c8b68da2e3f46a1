//! GraphQL endpoint handlers

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};
use tracing::{Span, debug, field};

use crate::web::AppState;

/// Operation name used in logs when the client did not name its operation
const ANONYMOUS_OPERATION: &str = "anonymous";

/// Execute a GraphQL request against the shared schema
pub async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    let operation = request
        .operation_name
        .clone()
        .unwrap_or_else(|| ANONYMOUS_OPERATION.to_string());
    Span::current().record("operation", field::display(&operation));

    let response = state.schema.execute(request).await;
    if response.is_err() {
        debug!(
            errors = response.errors.len(),
            "GraphQL operation {} returned errors", operation
        );
    }
    response.into()
}

/// Serve the GraphiQL IDE pointed at the configured endpoint
pub async fn graphiql(State(state): State<AppState>) -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(&state.config.graphql.path)
            .finish(),
    )
}
