//! Result endpoints: latest snapshot, dissociation curve and energy comparison.

use std::sync::Arc;

use axum::{Json, extract::State};
use vqelab_core::{DissociationPoint, VqeResult};

use crate::dto::ComparisonResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/results - Latest published VQE result.
pub async fn get_result(State(state): State<Arc<AppState>>) -> Result<Json<VqeResult>, ApiError> {
    state
        .session
        .read()
        .await
        .result()
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No VQE result yet".to_string()))
}

/// GET /api/dissociation - Dissociation curve (empty until generated).
pub async fn get_dissociation(State(state): State<Arc<AppState>>) -> Json<Vec<DissociationPoint>> {
    Json(state.session.read().await.dissociation().to_vec())
}

/// GET /api/comparison - Energy comparison table.
pub async fn get_comparison(State(state): State<Arc<AppState>>) -> Json<ComparisonResponse> {
    let session = state.session.read().await;
    Json(ComparisonResponse::from_session(&session))
}
