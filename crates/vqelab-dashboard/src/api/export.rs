//! JSON export download.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use vqelab_core::ExportConfig;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/export - Download configuration, result and curve as one JSON file.
///
/// Responds 204 No Content when there is no result to export.
pub async fn export(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let artifact = state
        .session
        .read()
        .await
        .export(&ExportConfig::default())?;

    let Some(artifact) = artifact else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    tracing::info!("Exporting {}", artifact.filename);
    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.contents,
    )
        .into_response())
}
