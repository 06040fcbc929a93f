use super::service::IngestionService;
use super::types::{
    ErrorResponse, IngestError, IngestRequest, IngestResponse, IngestionId, StatusResponse,
};

use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;

/// Maps a boundary failure onto its HTTP shape.
fn error_response(err: &IngestError) -> (StatusCode, Json<ErrorResponse>) {
    let code = match err {
        IngestError::InvalidInput => StatusCode::BAD_REQUEST,
        IngestError::NotFound => StatusCode::NOT_FOUND,
    };

    (
        code,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn handle_ingest(
    Extension(service): Extension<Arc<IngestionService>>,
    Json(req): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ids = req.ids.unwrap_or_default();
    let priority = req.priority.unwrap_or_default();

    match service.submit(ids, &priority) {
        Ok(ingestion_id) => {
            tracing::info!("Ingestion submitted successfully: {}", ingestion_id.0);
            Ok(Json(IngestResponse { ingestion_id }))
        }
        Err(err) => {
            tracing::warn!("Rejected submission: {}", err);
            Err(error_response(&err))
        }
    }
}

pub async fn handle_status(
    Extension(service): Extension<Arc<IngestionService>>,
    Path(ingestion_id): Path<String>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    match service.status(&IngestionId(ingestion_id)) {
        Ok(status) => Ok(Json(status)),
        Err(err) => {
            tracing::debug!("Status query failed: {}", err);
            Err(error_response(&err))
        }
    }
}
