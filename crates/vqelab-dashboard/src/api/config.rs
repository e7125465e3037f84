//! Run configuration endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use vqelab_core::MoleculeConfig;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/config - Current molecule configuration.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<MoleculeConfig> {
    Json(state.session.read().await.config().clone())
}

/// PUT /api/config - Replace the configuration. 409 while a run is in flight.
pub async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(config): Json<MoleculeConfig>,
) -> Result<Json<MoleculeConfig>, ApiError> {
    state.session.write().await.update_config(config.clone())?;
    tracing::info!(
        "Configuration updated: {} at {} Å, {} / {}",
        config.molecule,
        config.bond_length,
        config.ansatz,
        config.backend
    );
    Ok(Json(config))
}
