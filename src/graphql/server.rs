use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::{Router, routing::get};

use crate::error::Result;

use super::TodoSchema;

async fn graphql_handler(
    State(schema): State<TodoSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Serves the schema over HTTP: `POST /` executes GraphQL requests,
/// `GET /` serves the Playground.
pub async fn run_server(schema: TodoSchema, port: u16) -> Result<()> {
    let app = Router::new()
        .route("/", get(graphql_playground).post(graphql_handler))
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
