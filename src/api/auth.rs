use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::error::ApiError;
use crate::db::{LoginFailure, LoginRequest, LoginResponse, UserInfo};
use crate::AppState;

/// Login endpoint.
///
/// A single equality check against the stored credentials. A match
/// returns the user's row minus the password; no session or token is
/// issued — the dashboard remembers the result client-side.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let user = state
        .gateway
        .find_user_by_credentials(&request.username, &request.password)
        .await?;

    match user {
        Some(user) => Ok(Json(LoginResponse {
            success: true,
            message: "Login Berhasil".to_string(),
            data: UserInfo::from(user),
        })
        .into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginFailure {
                success: false,
                message: "Username atau Password salah!".to_string(),
            }),
        )
            .into_response()),
    }
}
