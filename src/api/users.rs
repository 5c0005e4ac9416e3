use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use super::error::ApiError;
use super::MessageResponse;
use crate::db::{CreateUserRequest, UserInfo};
use crate::AppState;

/// List all users (passwords excluded).
///
/// GET /api/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let users = state.gateway.list_users().await?;
    Ok(Json(users))
}

/// Create a user.
///
/// POST /api/users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.gateway.create_user(&request).await?;
    info!(username = %request.username, "User created");
    Ok(Json(MessageResponse {
        message: "User berhasil dibuat".to_string(),
    }))
}

/// Delete a user by id. Unknown ids still report success: the zero-row
/// delete is not an error at the store.
///
/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.gateway.delete_user(id).await?;
    info!(id, "User deleted");
    Ok(Json(MessageResponse {
        message: "User dihapus".to_string(),
    }))
}
