//! Data Transfer Objects for the dashboard API.
//!
//! Core types ([`vqelab_core::MoleculeConfig`], [`vqelab_core::VqeResult`], ...)
//! serialize directly; these cover the responses that combine them.

use serde::Serialize;
use vqelab_core::metrics::{self, ComparisonRow};
use vqelab_core::{Molecule, RunKind, Session};

// ============================================================================
// Run DTOs
// ============================================================================

/// Response to a run start request.
#[derive(Debug, Serialize)]
pub struct RunAccepted {
    /// ID of the new run.
    pub run_id: String,
    /// Kind of the new run.
    pub kind: RunKind,
}

/// Run guard and progress, for the progress bar and trigger buttons.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// State name ("idle", "running_convergence", "running_dissociation", "done").
    pub state: String,
    /// Whether a run is in flight.
    pub running: bool,
    /// Progress of the active or last run (0–100).
    pub progress: f64,
    /// Most recent run ID.
    pub run_id: Option<String>,
    /// Most recent run kind.
    pub kind: Option<RunKind>,
    /// Convergence points received in the current convergence run.
    pub convergence_points: usize,
    /// Whether a result can be exported.
    pub has_result: bool,
    /// Dissociation points available.
    pub dissociation_points: usize,
    /// When the most recent run started.
    pub started_at: Option<String>,
    /// When the most recent run finished.
    pub finished_at: Option<String>,
}

impl StatusResponse {
    /// Summarize a session.
    pub fn from_session(session: &Session) -> Self {
        let state = session.state();
        let last_run = session.last_run();
        Self {
            state: state.name().to_string(),
            running: state.is_running(),
            progress: session.progress(),
            run_id: last_run.map(|r| r.id.to_string()),
            kind: last_run.map(|r| r.kind),
            convergence_points: session.convergence().len(),
            has_result: session.result().is_some(),
            dissociation_points: session.dissociation().len(),
            started_at: last_run.map(|r| r.started_at.to_rfc3339()),
            finished_at: last_run.and_then(|r| r.finished_at.map(|t| t.to_rfc3339())),
        }
    }
}

// ============================================================================
// Comparison DTOs
// ============================================================================

/// Energy comparison panel.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    /// Molecule being compared.
    pub molecule: Molecule,
    /// Hartree-Fock, VQE (when available) and exact rows.
    pub rows: Vec<ComparisonRow>,
    /// VQE deviation from the reference energy (mHa).
    pub vqe_error_mha: Option<f64>,
    /// Whether the VQE error is within chemical accuracy.
    pub chemical_accuracy: Option<bool>,
    /// Correlation energy recovered by VQE (%).
    pub correlation_recovered: Option<f64>,
}

impl ComparisonResponse {
    /// Build the comparison for the latest result and the molecule it was computed for.
    pub fn from_session(session: &Session) -> Self {
        let molecule = session.result_config().molecule;
        let result = session.result();
        let vqe_energy = result.map(|r| r.energy);
        let vqe_error_mha = result.map(|r| r.diagnostics.error);

        Self {
            molecule,
            rows: metrics::comparison_table(molecule, vqe_energy),
            vqe_error_mha,
            chemical_accuracy: vqe_error_mha.map(metrics::is_chemically_accurate),
            correlation_recovered: vqe_energy.map(|e| metrics::correlation_recovered(molecule, e)),
        }
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
