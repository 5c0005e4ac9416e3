mod auth;
mod documents;
pub mod error;
mod users;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Generic `{"message": ...}` success body shared by the mutation routes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Auth
        .route("/api/login", post(auth::login))
        // Users
        .route("/api/users", get(users::list_users))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:id", delete(users::delete_user))
        // Documents (notulen)
        .route("/api/documents", get(documents::list_documents))
        .route("/api/documents", post(documents::create_document))
        .route("/api/documents/:id", put(documents::update_document))
        .route("/api/documents/:id", delete(documents::delete_document))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
