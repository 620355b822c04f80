//! Service-level routes shared by every exposure

use crate::core::error::BookshelfError;
use crate::server::host::ServerHost;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// Build the health route
///
/// - GET /health - liveness plus the current book count
pub fn build_health_routes(host: Arc<ServerHost>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(host)
}

async fn health_check(State(host): State<Arc<ServerHost>>) -> Result<Json<Value>, BookshelfError> {
    let books = host.book_service.count().await?;
    Ok(Json(json!({ "status": "ok", "books": books })))
}
