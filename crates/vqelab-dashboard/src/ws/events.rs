//! WebSocket event types for real-time updates.

use serde::Serialize;
use vqelab_core::{ConvergencePoint, DissociationPoint, RunEvent, RunId, RunKind, VqeResult};

/// Events sent to WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A run was accepted and the guard is held.
    RunStarted { run_id: String, kind: RunKind },
    /// Progress indicator moved.
    Progress { run_id: String, progress: f64 },
    /// A convergence point was computed.
    ConvergencePoint {
        run_id: String,
        point: ConvergencePoint,
    },
    /// A convergence snapshot replaced the current result.
    Snapshot { run_id: String, result: VqeResult },
    /// The dissociation curve is available.
    DissociationComplete {
        run_id: String,
        curve: Vec<DissociationPoint>,
    },
    /// The run released the guard.
    RunFinished { run_id: String, kind: RunKind },
}

impl DashboardEvent {
    /// Translate an event of run `run_id` for clients.
    pub fn from_run_event(run_id: RunId, kind: RunKind, event: &RunEvent) -> Self {
        let run_id = run_id.to_string();
        match event {
            RunEvent::Progress(progress) => DashboardEvent::Progress {
                run_id,
                progress: *progress,
            },
            RunEvent::Point(point) => DashboardEvent::ConvergencePoint {
                run_id,
                point: *point,
            },
            RunEvent::Snapshot(result) => DashboardEvent::Snapshot {
                run_id,
                result: result.clone(),
            },
            RunEvent::Curve(curve) => DashboardEvent::DissociationComplete {
                run_id,
                curve: curve.clone(),
            },
            RunEvent::Finished => DashboardEvent::RunFinished { run_id, kind },
        }
    }

    /// Get the event type name.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::RunStarted { .. } => "run_started",
            DashboardEvent::Progress { .. } => "progress",
            DashboardEvent::ConvergencePoint { .. } => "convergence_point",
            DashboardEvent::Snapshot { .. } => "snapshot",
            DashboardEvent::DissociationComplete { .. } => "dissociation_complete",
            DashboardEvent::RunFinished { .. } => "run_finished",
        }
    }
}
