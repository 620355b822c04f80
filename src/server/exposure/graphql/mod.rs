//! GraphQL API exposure
//!
//! Wraps the async-graphql schema in axum routes. The schema itself only
//! sees the [`BookService`](crate::core::BookService) held by the host.

mod schema;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use types::{AuthorNode, BookNode, GenreValue};

use crate::server::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Routes, relative to the configured `graphql.path`:
    /// - `POST {path}` executes queries and mutations
    /// - `GET {path}/schema` returns the SDL
    /// - `GET {path}/playground` serves the playground, when enabled
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let schema = build_schema(host.book_service.clone());
        let path = host.config.graphql.path.clone();

        let mut router = Router::new()
            .route(&path, post(graphql_handler))
            .route(&format!("{}/schema", path), get(graphql_sdl));

        if host.config.graphql.playground {
            router = router.route(&format!("{}/playground", path), get(graphql_playground));
        }

        tracing::debug!(
            path = %path,
            playground = host.config.graphql.playground,
            "GraphQL routes registered"
        );

        Ok(router
            .layer(Extension(GraphQLEndpoint(path)))
            .layer(Extension(schema)))
    }
}

/// Endpoint path the playground should post to
#[derive(Clone)]
struct GraphQLEndpoint(String);

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let response = schema.execute(req.into_inner()).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    response.into()
}

/// Handler for the GraphQL playground UI
async fn graphql_playground(Extension(endpoint): Extension<GraphQLEndpoint>) -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(&endpoint.0)))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(Extension(schema): Extension<BookshelfSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
