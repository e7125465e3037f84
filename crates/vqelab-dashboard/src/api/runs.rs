//! Run control endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use vqelab_core::RunKind;

use crate::dto::{RunAccepted, StatusResponse};
use crate::error::ApiError;
use crate::processor;
use crate::state::AppState;

/// POST /api/runs/convergence - Start the convergence simulator.
pub async fn start_convergence(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<RunAccepted>), ApiError> {
    start(&state, RunKind::Convergence).await
}

/// POST /api/runs/dissociation - Start the dissociation curve generator.
pub async fn start_dissociation(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<RunAccepted>), ApiError> {
    start(&state, RunKind::Dissociation).await
}

async fn start(
    state: &Arc<AppState>,
    kind: RunKind,
) -> Result<(StatusCode, Json<RunAccepted>), ApiError> {
    let run_id = processor::start_run(state, kind).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(RunAccepted {
            run_id: run_id.to_string(),
            kind,
        }),
    ))
}

/// GET /api/status - Run guard state and progress.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session.read().await;
    Json(StatusResponse::from_session(&session))
}
