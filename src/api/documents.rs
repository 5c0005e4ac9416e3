use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::error::ApiError;
use super::MessageResponse;
use crate::db::{Document, DocumentPayload};
use crate::AppState;

/// Response for a created document: the store-generated identifier.
#[derive(Debug, Serialize)]
pub struct DocumentCreated {
    pub message: String,
    pub id: u64,
}

/// List all meeting minutes, newest identifier first.
///
/// GET /api/documents
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let docs = state.gateway.list_documents().await?;
    Ok(Json(docs))
}

/// Create a meeting-minutes record.
///
/// POST /api/documents
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<DocumentCreated>, ApiError> {
    let id = state.gateway.create_document(&payload).await?;
    info!(id, "Document created");
    Ok(Json(DocumentCreated {
        message: "Berhasil disimpan".to_string(),
        id,
    }))
}

/// Replace all five content fields of a record. Fields absent from the
/// body become NULL; there is no merge with the existing row.
///
/// PUT /api/documents/:id
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<DocumentPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.gateway.update_document(id, &payload).await?;
    info!(id, "Document updated");
    Ok(Json(MessageResponse {
        message: "Data berhasil diupdate".to_string(),
    }))
}

/// Delete a record by identifier.
///
/// DELETE /api/documents/:id
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.gateway.delete_document(id).await?;
    info!(id, "Document deleted");
    Ok(Json(MessageResponse {
        message: "Data berhasil dihapus".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_response_carries_the_generated_id() {
        let response = DocumentCreated {
            message: "Berhasil disimpan".to_string(),
            id: 42,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Berhasil disimpan");
        assert_eq!(value["id"], 42);
    }
}
